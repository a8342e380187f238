use crate::{
    errors::errors::Error,
    lexer::tokens::TokenKind,
    semantic::semantic::{
        aggregate, incompatible_types_message, undefined_variable_message, Diagnostics,
        SemanticResult, SemanticResultType,
    },
};

use super::{
    analyzer::Analyzer,
    expr::{parse_condition, parse_simple_expr},
};

// stmt-list ::= stmt { ";" stmt }
pub fn parse_stmt_list(analyzer: &mut Analyzer) -> Result<SemanticResult, Error> {
    let mut statements = vec![parse_stmt(analyzer)?];

    while analyzer.current_token_kind() == TokenKind::Semicolon {
        analyzer.consume(TokenKind::Semicolon)?;
        statements.push(parse_stmt(analyzer)?);
    }

    Ok(aggregate(statements))
}

// stmt ::= assign-stmt | if-stmt | while-stmt | repeat-stmt | read-stmt | write-stmt
pub fn parse_stmt(analyzer: &mut Analyzer) -> Result<SemanticResult, Error> {
    let handler = analyzer
        .get_stmt_lookup()
        .get(&analyzer.current_token_kind())
        .copied();

    match handler {
        Some(handler) => handler(analyzer),
        None => Err(analyzer.unexpected()),
    }
}

// assign-stmt ::= identifier "=" simple-expr
pub fn parse_assign_stmt(analyzer: &mut Analyzer) -> Result<SemanticResult, Error> {
    let line = analyzer.line();
    let target = analyzer.consume(TokenKind::Identifier)?;
    let id = analyzer.symbol_of(&target);
    analyzer.consume(TokenKind::Assignment)?;
    let value = parse_simple_expr(analyzer)?;

    let declared = match analyzer.symbols().declared_type(id) {
        Some(declared) => declared,
        None => {
            let mut diagnostics = Diagnostics::new();
            diagnostics.push(undefined_variable_message(line, &target.value), line);
            diagnostics.absorb(&value);
            return Ok(analyzer.report(diagnostics.into_error()));
        }
    };

    // Already reported further down.
    if value.is_error() {
        return Ok(value);
    }

    let widening = declared == SemanticResultType::Float && value.kind == SemanticResultType::Int;
    if declared == value.kind || widening {
        Ok(SemanticResult::ok())
    } else {
        Ok(analyzer.report(SemanticResult::error(
            incompatible_types_message(line),
            line,
        )))
    }
}

// if-stmt ::= if condition then stmt-list end-else
pub fn parse_if_stmt(analyzer: &mut Analyzer) -> Result<SemanticResult, Error> {
    analyzer.consume(TokenKind::If)?;
    let condition = parse_condition(analyzer)?;
    analyzer.consume(TokenKind::Then)?;
    let then_body = parse_stmt_list(analyzer)?;
    let else_body = parse_end_else(analyzer)?;

    Ok(aggregate([condition, then_body, else_body]))
}

// end-else ::= end | else stmt-list end
pub fn parse_end_else(analyzer: &mut Analyzer) -> Result<SemanticResult, Error> {
    match analyzer.current_token_kind() {
        TokenKind::End => {
            analyzer.consume(TokenKind::End)?;
            Ok(SemanticResult::ok())
        }
        TokenKind::Else => {
            analyzer.consume(TokenKind::Else)?;
            let body = parse_stmt_list(analyzer)?;
            analyzer.consume(TokenKind::End)?;
            Ok(body)
        }
        _ => Err(analyzer.unexpected()),
    }
}

// repeat-stmt ::= repeat stmt-list until condition
pub fn parse_repeat_stmt(analyzer: &mut Analyzer) -> Result<SemanticResult, Error> {
    analyzer.consume(TokenKind::Repeat)?;
    let body = parse_stmt_list(analyzer)?;
    analyzer.consume(TokenKind::Until)?;
    let condition = parse_condition(analyzer)?;

    Ok(aggregate([body, condition]))
}

// while-stmt ::= while condition do stmt-list end
pub fn parse_while_stmt(analyzer: &mut Analyzer) -> Result<SemanticResult, Error> {
    analyzer.consume(TokenKind::While)?;
    let condition = parse_condition(analyzer)?;
    analyzer.consume(TokenKind::Do)?;
    let body = parse_stmt_list(analyzer)?;
    analyzer.consume(TokenKind::End)?;

    Ok(aggregate([condition, body]))
}

// read-stmt ::= read "(" identifier ")"
pub fn parse_read_stmt(analyzer: &mut Analyzer) -> Result<SemanticResult, Error> {
    let line = analyzer.line();
    analyzer.consume(TokenKind::Read)?;
    analyzer.consume(TokenKind::OpenParen)?;
    let target = analyzer.consume(TokenKind::Identifier)?;
    analyzer.consume(TokenKind::CloseParen)?;

    let id = analyzer.symbol_of(&target);
    match analyzer.symbols().declared_type(id) {
        Some(_) => Ok(SemanticResult::ok()),
        None => Ok(analyzer.report(SemanticResult::error(
            undefined_variable_message(line, &target.value),
            line,
        ))),
    }
}

// write-stmt ::= write "(" writable ")"
pub fn parse_write_stmt(analyzer: &mut Analyzer) -> Result<SemanticResult, Error> {
    analyzer.consume(TokenKind::Write)?;
    analyzer.consume(TokenKind::OpenParen)?;
    let value = parse_writable(analyzer)?;
    analyzer.consume(TokenKind::CloseParen)?;

    Ok(value.ok_if_not_error())
}

// writable ::= simple-expr | literal
pub fn parse_writable(analyzer: &mut Analyzer) -> Result<SemanticResult, Error> {
    if analyzer.current_token_kind() == TokenKind::StringConst {
        analyzer.consume(TokenKind::StringConst)?;
        Ok(SemanticResult::new(Some(SemanticResultType::String)))
    } else {
        parse_simple_expr(analyzer)
    }
}
