//! Unit tests for the lexer module.
//!
//! Covers keywords and identifiers, constants, operators, comments, line
//! tracking and invalid input.

use pretty_assertions::assert_eq;

use super::{
    lexer::{tokenize, Lexer},
    source::TokenSource,
    tokens::TokenKind,
};
use crate::symbol_table::symbol_table::SymbolTable;

fn kinds(source: &str) -> Vec<TokenKind> {
    let mut symbols = SymbolTable::new();
    tokenize(source.to_string(), Some("test.txt".to_string()), &mut symbols)
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("program begin end is int float char if then else repeat until while do read write"),
        vec![
            TokenKind::Program,
            TokenKind::Begin,
            TokenKind::End,
            TokenKind::Is,
            TokenKind::Int,
            TokenKind::Float,
            TokenKind::Char,
            TokenKind::If,
            TokenKind::Then,
            TokenKind::Else,
            TokenKind::Repeat,
            TokenKind::Until,
            TokenKind::While,
            TokenKind::Do,
            TokenKind::Read,
            TokenKind::Write,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_keywords_are_case_sensitive() {
    assert_eq!(
        kinds("Program BEGIN"),
        vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_identifiers_share_symbols() {
    let mut symbols = SymbolTable::new();
    let tokens = tokenize("foo bar foo _x1".to_string(), None, &mut symbols).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[0].symbol, tokens[2].symbol);
    assert_ne!(tokens[0].symbol, tokens[1].symbol);
    assert_eq!(tokens[3].value, "_x1");
    assert_eq!(symbols.len(), 3);
}

#[test]
fn test_keywords_are_not_interned() {
    let mut symbols = SymbolTable::new();
    let tokens = tokenize("program begin".to_string(), None, &mut symbols).unwrap();

    assert!(tokens[0].symbol.is_none());
    assert!(symbols.is_empty());
}

#[test]
fn test_tokenize_constants() {
    let mut symbols = SymbolTable::new();
    let tokens = tokenize(
        r#"42 3.14 'a' "hello world" 7."#.to_string(),
        None,
        &mut symbols,
    )
    .unwrap();

    assert_eq!(tokens[0].kind, TokenKind::IntConst);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::FloatConst);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::CharConst);
    assert_eq!(tokens[2].value, "a");
    assert_eq!(tokens[3].kind, TokenKind::StringConst);
    assert_eq!(tokens[3].value, "hello world");
    assert_eq!(tokens[4].kind, TokenKind::IntConst);
    assert_eq!(tokens[5].kind, TokenKind::Dot);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("== != >= <= && || = > < + - * / ! ; , . ( )"),
        vec![
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::GreaterEquals,
            TokenKind::LessEquals,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Assignment,
            TokenKind::Greater,
            TokenKind::Less,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Not,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_operators_without_spaces() {
    assert_eq!(
        kinds("a>=b"),
        vec![
            TokenKind::Identifier,
            TokenKind::GreaterEquals,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_comments_are_skipped() {
    assert_eq!(
        kinds("a // trailing\n/* block\n comment */ b"),
        vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::EOF]
    );
}

#[test]
fn test_line_tracking() {
    let mut symbols = SymbolTable::new();
    let tokens = tokenize(
        "program\n\np /* one\ntwo */ begin\nend.".to_string(),
        None,
        &mut symbols,
    )
    .unwrap();

    let lines: Vec<u32> = tokens.iter().map(|token| token.line()).collect();
    assert_eq!(lines, vec![1, 3, 4, 5, 5, 5]);
}

#[test]
fn test_invalid_character_becomes_token() {
    let mut symbols = SymbolTable::new();
    let tokens = tokenize("a $ b".to_string(), None, &mut symbols).unwrap();

    assert_eq!(tokens[1].kind, TokenKind::Invalid);
    assert_eq!(tokens[1].value, "$");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
}

#[test]
fn test_lone_ampersand_is_invalid() {
    assert_eq!(
        kinds("&"),
        vec![TokenKind::Invalid, TokenKind::EOF]
    );
}

#[test]
fn test_unterminated_literals_are_invalid() {
    let mut symbols = SymbolTable::new();
    let tokens = tokenize("\"open".to_string(), None, &mut symbols).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Invalid);
    assert_eq!(tokens[0].value, "\"");

    let tokens = tokenize("/* never closed".to_string(), None, &mut symbols).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Invalid);
    assert_eq!(tokens[0].value, "/*");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_eof_is_repeated() {
    let mut symbols = SymbolTable::new();
    let mut lexer = Lexer::new(String::from("x"), None);

    assert_eq!(lexer.next_token(&mut symbols).unwrap().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token(&mut symbols).unwrap().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token(&mut symbols).unwrap().kind, TokenKind::EOF);
}

#[test]
fn test_from_file_reports_missing_file() {
    let result = Lexer::from_file(std::path::Path::new("tests/does_not_exist.txt"));
    match result {
        Err(error) => assert_eq!(error.get_error_name(), "Io"),
        Ok(_) => panic!("expected an Io error"),
    }
}

#[test]
fn test_token_kind_display() {
    assert_eq!(TokenKind::Dot.to_string(), ".");
    assert_eq!(TokenKind::Program.to_string(), "program");
    assert_eq!(TokenKind::Identifier.to_string(), "identifier");
    assert_eq!(TokenKind::IntConst.to_string(), "integer_const");
}
