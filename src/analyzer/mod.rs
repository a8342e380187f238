//! Combined syntactic and semantic analysis.
//!
//! A recursive-descent recognizer with one function per grammar production.
//! Each production consumes its tokens and synthesizes a
//! [`SemanticResult`](crate::semantic::semantic::SemanticResult) from its
//! children's results in the same pass, so no syntax tree is built.
//!
//! Structural problems (a token that does not fit the grammar, early end of
//! input, an invalid lexeme) abort with an `Err`. Type problems are folded
//! into the synthesized results and reported together at the end.

pub mod analyzer;
pub mod decl;
pub mod expr;
pub mod lookups;
pub mod stmt;
