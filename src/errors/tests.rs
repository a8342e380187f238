//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use pretty_assertions::assert_eq;
use std::rc::Rc;

fn at_line(line: u32) -> Position {
    Position(line, Rc::new("test.txt".to_string()))
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::InvalidToken {
            lexeme: "@".to_string(),
        },
        at_line(42),
    );

    assert_eq!(error.get_position().line(), 42);
    assert_eq!(error.get_error_name(), "InvalidToken");
}

#[test]
fn test_unexpected_token_with_expected_kind() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: Some(TokenKind::Dot),
            found: TokenKind::EOF,
            lexeme: "EOF".to_string(),
        },
        at_line(5),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "Unexpected token: EOF of type: EOF on line: 5\nExpected: type: ."
    );
}

#[test]
fn test_unexpected_token_without_expected_kind() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: None,
            found: TokenKind::Then,
            lexeme: "then".to_string(),
        },
        at_line(3),
    );

    assert_eq!(
        error.to_string(),
        "Unexpected token: then of type: then on line: 3"
    );
}

#[test]
fn test_unexpected_end_of_input() {
    let error = Error::new(
        ErrorImpl::UnexpectedEndOfInput {
            expected: TokenKind::End,
        },
        at_line(9),
    );

    assert_eq!(error.get_error_name(), "UnexpectedEndOfInput");
    assert_eq!(
        error.to_string(),
        "Unexpected end of file on line: 9\nExpected: type: end"
    );
}

#[test]
fn test_invalid_token_message() {
    let error = Error::new(
        ErrorImpl::InvalidToken {
            lexeme: "$".to_string(),
        },
        at_line(2),
    );

    assert_eq!(error.to_string(), "Invalid token $ on line 2");
}

#[test]
fn test_io_error_message() {
    let error = Error::new(
        ErrorImpl::Io {
            path: "missing.txt".to_string(),
            message: "No such file or directory".to_string(),
        },
        at_line(0),
    );

    assert_eq!(error.get_error_name(), "Io");
    assert_eq!(
        error.to_string(),
        "An error occurred while trying to read from the file missing.txt: No such file or directory"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::InvalidToken {
            lexeme: "@".to_string(),
        },
        at_line(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: Some(TokenKind::Semicolon),
            found: TokenKind::Begin,
            lexeme: "begin".to_string(),
        },
        at_line(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Expected `;`, found `begin`"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
