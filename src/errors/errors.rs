use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A structural failure. The first one raised ends the analysis.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::InvalidToken { .. } => "InvalidToken",
            ErrorImpl::Io { .. } => "Io",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken {
                expected: Some(expected),
                lexeme,
                ..
            } => ErrorTip::Suggestion(format!("Expected `{}`, found `{}`", expected, lexeme)),
            ErrorImpl::UnexpectedToken { lexeme, .. } => {
                ErrorTip::Suggestion(format!("`{}` cannot appear here", lexeme))
            }
            ErrorImpl::UnexpectedEndOfInput { expected } => ErrorTip::Suggestion(format!(
                "Input ended while `{}` was expected, is the program terminated with `end.`?",
                expected
            )),
            ErrorImpl::InvalidToken { .. } => ErrorTip::None,
            ErrorImpl::Io { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line = self.position.line();
        match &self.internal_error {
            ErrorImpl::UnexpectedToken {
                expected,
                found,
                lexeme,
            } => {
                write!(
                    f,
                    "Unexpected token: {} of type: {} on line: {}",
                    lexeme, found, line
                )?;
                if let Some(expected) = expected {
                    write!(f, "\nExpected: type: {}", expected)?;
                }
                Ok(())
            }
            ErrorImpl::UnexpectedEndOfInput { expected } => write!(
                f,
                "Unexpected end of file on line: {}\nExpected: type: {}",
                line, expected
            ),
            ErrorImpl::InvalidToken { lexeme } => {
                write!(f, "Invalid token {} on line {}", lexeme, line)
            }
            other => write!(f, "{}", other),
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected token {lexeme:?} of type {found}")]
    UnexpectedToken {
        expected: Option<TokenKind>,
        found: TokenKind,
        lexeme: String,
    },
    #[error("unexpected end of file, expected {expected}")]
    UnexpectedEndOfInput { expected: TokenKind },
    #[error("invalid token {lexeme:?}")]
    InvalidToken { lexeme: String },
    #[error("An error occurred while trying to read from the file {path}: {message}")]
    Io { path: String, message: String },
}
