//! Lexical analysis module.
//!
//! Turns source text into tokens, one at a time, as the analyzer asks for
//! them:
//!
//! - Keywords, identifiers, numeric/char/string constants and operators
//! - Line tracking for diagnostics
//! - `//` and `/* */` comments and whitespace are skipped
//! - Unknown characters become `Invalid` tokens rather than errors

pub mod lexer;
pub mod source;
pub mod tokens;

#[cfg(test)]
mod tests;
