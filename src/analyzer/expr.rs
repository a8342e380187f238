use log::debug;

use crate::{
    errors::errors::Error,
    lexer::tokens::TokenKind,
    semantic::semantic::{
        expected_numeric_message, unexpected_type_message, Diagnostics, SemanticResult,
        SemanticResultType,
    },
};

use super::{analyzer::Analyzer, lookups::ParseHandler};

// condition ::= expression
pub fn parse_condition(analyzer: &mut Analyzer) -> Result<SemanticResult, Error> {
    parse_expression(analyzer)
}

// expression ::= simple-expr { relop simple-expr }
pub fn parse_expression(analyzer: &mut Analyzer) -> Result<SemanticResult, Error> {
    parse_comparable_chain(analyzer, at_relop, parse_relop, parse_simple_expr)
}

// simple-expr ::= term { addop term }
pub fn parse_simple_expr(analyzer: &mut Analyzer) -> Result<SemanticResult, Error> {
    parse_comparable_chain(analyzer, at_addop, parse_addop, parse_term)
}

fn at_relop(analyzer: &Analyzer) -> bool {
    analyzer
        .get_relop_lookup()
        .contains_key(&analyzer.current_token_kind())
}

fn at_addop(analyzer: &Analyzer) -> bool {
    analyzer
        .get_addop_lookup()
        .contains_key(&analyzer.current_token_kind())
}

fn at_mulop(analyzer: &Analyzer) -> bool {
    analyzer
        .get_mulop_lookup()
        .contains_key(&analyzer.current_token_kind())
}

/// `operand { operator operand }` where every operand must be numeric or
/// char. The left operand's kind is kept unless some operand fails.
fn parse_comparable_chain(
    analyzer: &mut Analyzer,
    at_operator: fn(&Analyzer) -> bool,
    operator: ParseHandler,
    operand: ParseHandler,
) -> Result<SemanticResult, Error> {
    let line = analyzer.line();
    let mut result = operand(analyzer)?;
    let mut diagnostics = Diagnostics::new();
    diagnostics.absorb(&result);

    while at_operator(analyzer) {
        operator(analyzer)?;
        let right = operand(analyzer)?;
        diagnostics.absorb(&right);

        if !result.is_numeric_or_char() || !right.is_numeric_or_char() {
            result = SemanticResult::new(None);
        }
    }

    Ok(finish(analyzer, result, diagnostics, line))
}

// term ::= factor-a { mulop factor-a }
pub fn parse_term(analyzer: &mut Analyzer) -> Result<SemanticResult, Error> {
    let line = analyzer.line();
    let mut result = parse_factor_a(analyzer)?;
    let mut diagnostics = Diagnostics::new();
    diagnostics.absorb(&result);

    while at_mulop(analyzer) {
        let operator = parse_mulop(analyzer)?;
        let right = parse_factor_a(analyzer)?;
        diagnostics.absorb(&right);

        let kind = if !result.is_numeric_or_char() || !right.is_numeric_or_char() {
            None
        } else if operator.kind == SemanticResultType::Div
            || result.kind == SemanticResultType::Float
            || right.kind == SemanticResultType::Float
        {
            Some(SemanticResultType::Float)
        } else {
            // `&&` promotes like `*`.
            Some(SemanticResultType::Int)
        };

        result = SemanticResult::new(kind);
    }

    Ok(finish(analyzer, result, diagnostics, line))
}

/// Attaches the operands' messages to a failed chain, or the generic line
/// message when no operand explained itself.
fn finish(
    analyzer: &Analyzer,
    result: SemanticResult,
    diagnostics: Diagnostics,
    line: u32,
) -> SemanticResult {
    if !result.is_error() {
        return result;
    }

    if diagnostics.is_empty() {
        analyzer.report(SemanticResult::error_on_line(line))
    } else {
        diagnostics.into_error()
    }
}

// factor-a ::= factor | "!" factor | "-" factor
pub fn parse_factor_a(analyzer: &mut Analyzer) -> Result<SemanticResult, Error> {
    let line = analyzer.line();

    match analyzer.current_token_kind() {
        TokenKind::Not => {
            analyzer.consume(TokenKind::Not)?;
        }
        TokenKind::Dash => {
            analyzer.consume(TokenKind::Dash)?;
        }
        _ => {}
    }

    let factor = parse_factor(analyzer)?;

    if factor.is_numeric_or_char() {
        return Ok(factor);
    }

    if factor.is_error() && factor.message.is_some() {
        return Ok(factor);
    }

    Ok(analyzer.report(SemanticResult::error(
        expected_numeric_message(line),
        line,
    )))
}

// factor ::= identifier | constant | "(" expression ")"
pub fn parse_factor(analyzer: &mut Analyzer) -> Result<SemanticResult, Error> {
    match analyzer.current_token_kind() {
        TokenKind::Identifier => {
            let token = analyzer.consume(TokenKind::Identifier)?;
            let id = analyzer.symbol_of(&token);
            let declared = analyzer.symbols().declared_type(id);

            if declared.is_none() {
                debug!("{} used on line {} before any declaration", token.value, token.line());
            }

            Ok(SemanticResult::new(declared))
        }
        TokenKind::OpenParen => {
            let line = analyzer.line();
            analyzer.consume(TokenKind::OpenParen)?;
            let inner = parse_expression(analyzer)?;
            analyzer.consume(TokenKind::CloseParen)?;

            if inner.is_numeric_or_char() {
                return Ok(inner);
            }

            let mut diagnostics = Diagnostics::new();
            diagnostics.absorb(&inner);
            diagnostics.push(unexpected_type_message(line), line);
            Ok(analyzer.report(diagnostics.into_error()))
        }
        _ => parse_constant(analyzer),
    }
}

// relop ::= "==" | ">" | ">=" | "<" | "<=" | "!="
pub fn parse_relop(analyzer: &mut Analyzer) -> Result<SemanticResult, Error> {
    if !at_relop(analyzer) {
        return Err(analyzer.unexpected());
    }

    analyzer.advance()?;
    Ok(SemanticResult::ok())
}

// addop ::= "+" | "-" | "||"
pub fn parse_addop(analyzer: &mut Analyzer) -> Result<SemanticResult, Error> {
    if !at_addop(analyzer) {
        return Err(analyzer.unexpected());
    }

    analyzer.advance()?;
    Ok(SemanticResult::ok())
}

// mulop ::= "*" | "/" | "&&"
pub fn parse_mulop(analyzer: &mut Analyzer) -> Result<SemanticResult, Error> {
    let operator = match analyzer
        .get_mulop_lookup()
        .get(&analyzer.current_token_kind())
        .copied()
    {
        Some(operator) => operator,
        None => return Err(analyzer.unexpected()),
    };

    analyzer.advance()?;
    Ok(SemanticResult::new(Some(operator)))
}

// constant ::= integer_const | float_const | char_const
pub fn parse_constant(analyzer: &mut Analyzer) -> Result<SemanticResult, Error> {
    let synthesized = match analyzer
        .get_constant_lookup()
        .get(&analyzer.current_token_kind())
        .copied()
    {
        Some(synthesized) => synthesized,
        None => return Err(analyzer.unexpected()),
    };

    analyzer.advance()?;
    Ok(SemanticResult::new(Some(synthesized)))
}
