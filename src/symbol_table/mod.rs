//! Flat symbol table shared by the lexer and the analyzer.
//!
//! Identifiers are interned once per lexeme; the declared type lives in the
//! table, keyed by [`symbol_table::SymbolId`], rather than in the tokens.

pub mod symbol_table;
