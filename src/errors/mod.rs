//! Structural error types for the analyzer.
//!
//! Everything in here is fatal: an unexpected token, input that ends too
//! early, a lexeme the lexer could not classify, or a source file that cannot
//! be read. Type errors are not represented here, they travel inside
//! [`crate::semantic::semantic::SemanticResult`] instead.

pub mod errors;

#[cfg(test)]
mod tests;
