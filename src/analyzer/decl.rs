use log::debug;

use crate::{
    errors::errors::Error,
    lexer::tokens::TokenKind,
    semantic::semantic::{aggregate, SemanticResult, SemanticResultType},
    symbol_table::symbol_table::SymbolId,
};

use super::{analyzer::Analyzer, stmt::parse_stmt_list};

// program ::= program identifier [decl-list] begin stmt-list end "."
pub fn parse_program(analyzer: &mut Analyzer) -> Result<SemanticResult, Error> {
    analyzer.consume(TokenKind::Program)?;
    analyzer.consume(TokenKind::Identifier)?;

    let declarations = if analyzer.current_token_kind() != TokenKind::Begin {
        parse_decl_list(analyzer)?
    } else {
        SemanticResult::ok()
    };

    analyzer.consume(TokenKind::Begin)?;
    let body = parse_stmt_list(analyzer)?;
    analyzer.consume(TokenKind::End)?;
    analyzer.consume(TokenKind::Dot)?;

    Ok(aggregate([declarations, body]))
}

// decl-list ::= decl ";" { decl ";" }
pub fn parse_decl_list(analyzer: &mut Analyzer) -> Result<SemanticResult, Error> {
    let mut declarations = vec![];

    loop {
        declarations.push(parse_decl(analyzer)?);
        analyzer.consume(TokenKind::Semicolon)?;

        if analyzer.current_token_kind() != TokenKind::Identifier {
            break;
        }
    }

    Ok(aggregate(declarations))
}

// decl ::= ident-list is type
pub fn parse_decl(analyzer: &mut Analyzer) -> Result<SemanticResult, Error> {
    let identifiers = parse_ident_list(analyzer)?;
    analyzer.consume(TokenKind::Is)?;
    let declared = parse_type(analyzer)?;

    if !declared.is_error() {
        for id in identifiers {
            debug!(
                "declared {} as {}",
                analyzer.symbols().lexeme(id),
                declared.kind
            );
            analyzer.symbols_mut().declare(id, declared.kind);
        }
    }

    Ok(declared.ok_if_not_error())
}

// ident-list ::= identifier { "," identifier }
pub fn parse_ident_list(analyzer: &mut Analyzer) -> Result<Vec<SymbolId>, Error> {
    let first = analyzer.consume(TokenKind::Identifier)?;
    let mut identifiers = vec![analyzer.symbol_of(&first)];

    while analyzer.current_token_kind() == TokenKind::Comma {
        analyzer.consume(TokenKind::Comma)?;
        let next = analyzer.consume(TokenKind::Identifier)?;
        identifiers.push(analyzer.symbol_of(&next));
    }

    Ok(identifiers)
}

// type ::= int | float | char
//
// Anything else is a semantic error; the token is left for decl-list, which
// then expects the closing ";".
pub fn parse_type(analyzer: &mut Analyzer) -> Result<SemanticResult, Error> {
    let line = analyzer.line();
    let declared = match analyzer
        .get_type_lookup()
        .get(&analyzer.current_token_kind())
        .copied()
    {
        Some(declared) => declared,
        None => return Ok(analyzer.report(SemanticResult::error_on_line(line))),
    };

    analyzer.advance()?;

    if analyzer.config().collapse_declared_types {
        Ok(SemanticResult::new(Some(SemanticResultType::Int)))
    } else {
        Ok(SemanticResult::new(Some(declared)))
    }
}
