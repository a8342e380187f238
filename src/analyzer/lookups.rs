use std::collections::HashMap;

use crate::{
    errors::errors::Error, lexer::tokens::TokenKind, semantic::semantic::SemanticResult,
    semantic::semantic::SemanticResultType,
};

use super::{analyzer::Analyzer, stmt::*};

/// A grammar rule: consumes its tokens and returns what it synthesized.
pub type ParseHandler = fn(&mut Analyzer) -> Result<SemanticResult, Error>;
pub type StmtHandler = ParseHandler;

pub fn create_token_lookups(analyzer: &mut Analyzer) {
    // Relational
    analyzer.relop(TokenKind::Equals);
    analyzer.relop(TokenKind::Greater);
    analyzer.relop(TokenKind::GreaterEquals);
    analyzer.relop(TokenKind::Less);
    analyzer.relop(TokenKind::LessEquals);
    analyzer.relop(TokenKind::NotEquals);

    // Additive and multiplicative
    analyzer.addop(TokenKind::Plus);
    analyzer.addop(TokenKind::Dash);
    analyzer.addop(TokenKind::Or);
    analyzer.mulop(TokenKind::Star, SemanticResultType::Mul);
    analyzer.mulop(TokenKind::Slash, SemanticResultType::Div);
    analyzer.mulop(TokenKind::And, SemanticResultType::And);

    // Declarations
    analyzer.type_keyword(TokenKind::Int, SemanticResultType::Int);
    analyzer.type_keyword(TokenKind::Float, SemanticResultType::Float);
    analyzer.type_keyword(TokenKind::Char, SemanticResultType::Char);

    // Constants
    analyzer.constant(TokenKind::IntConst, SemanticResultType::Int);
    analyzer.constant(TokenKind::FloatConst, SemanticResultType::Float);
    analyzer.constant(TokenKind::CharConst, SemanticResultType::Char);

    // Statements
    analyzer.stmt(TokenKind::Identifier, parse_assign_stmt);
    analyzer.stmt(TokenKind::If, parse_if_stmt);
    analyzer.stmt(TokenKind::While, parse_while_stmt);
    analyzer.stmt(TokenKind::Repeat, parse_repeat_stmt);
    analyzer.stmt(TokenKind::Read, parse_read_stmt);
    analyzer.stmt(TokenKind::Write, parse_write_stmt);
}

// Lookup tables inside analyzer struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type KindLookup = HashMap<TokenKind, SemanticResultType>;
