use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{symbol_table::symbol_table::SymbolId, Position};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("program", TokenKind::Program);
        map.insert("begin", TokenKind::Begin);
        map.insert("end", TokenKind::End);
        map.insert("is", TokenKind::Is);
        map.insert("int", TokenKind::Int);
        map.insert("float", TokenKind::Float);
        map.insert("char", TokenKind::Char);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("repeat", TokenKind::Repeat);
        map.insert("until", TokenKind::Until);
        map.insert("while", TokenKind::While);
        map.insert("do", TokenKind::Do);
        map.insert("read", TokenKind::Read);
        map.insert("write", TokenKind::Write);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Invalid,
    Identifier,

    IntConst,
    FloatConst,
    CharConst,
    StringConst,

    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Dot,
    Semicolon,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Program,
    Begin,
    End,
    Is,
    Int,
    Float,
    Char,
    If,
    Then,
    Else,
    Repeat,
    Until,
    While,
    Do,
    Read,
    Write,
}

impl TokenKind {
    /// The spelling used when a token kind shows up in a diagnostic.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Invalid => "invalid",
            TokenKind::Identifier => "identifier",
            TokenKind::IntConst => "integer_const",
            TokenKind::FloatConst => "float_const",
            TokenKind::CharConst => "char_const",
            TokenKind::StringConst => "literal",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Assignment => "=",
            TokenKind::Equals => "==",
            TokenKind::Not => "!",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::Or => "||",
            TokenKind::And => "&&",
            TokenKind::Dot => ".",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Program => "program",
            TokenKind::Begin => "begin",
            TokenKind::End => "end",
            TokenKind::Is => "is",
            TokenKind::Int => "int",
            TokenKind::Float => "float",
            TokenKind::Char => "char",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::Repeat => "repeat",
            TokenKind::Until => "until",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::Read => "read",
            TokenKind::Write => "write",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single lexeme. Identifiers also carry the symbol table entry they were
/// interned as, so every occurrence of a name resolves to the same record.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
    pub symbol: Option<SymbolId>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    pub fn line(&self) -> u32 {
        self.position.line()
    }

    /// One-line rendering used by the `--tokens` listing.
    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::Identifier,
            TokenKind::IntConst,
            TokenKind::FloatConst,
            TokenKind::CharConst,
            TokenKind::StringConst,
            TokenKind::Invalid,
        ]) {
            format!("{}:{} {} ({})", self.position.1, self.line(), self.kind, self.value)
        } else {
            format!("{}:{} {}", self.position.1, self.line(), self.kind)
        }
    }
}
