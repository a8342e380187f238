use std::rc::Rc;

use crate::{errors::errors::Error, symbol_table::symbol_table::SymbolTable};

use super::tokens::Token;

/// Anything the analyzer can pull tokens from, one at a time.
///
/// Implementations must report unknown input as a [`TokenKind::Invalid`]
/// token instead of failing, and must intern identifiers into `symbols` so
/// every occurrence of a name shares one record. A token's `symbol` must be
/// an id returned by that same `symbols` table. `Err` is reserved for the
/// underlying input becoming unreadable.
///
/// [`TokenKind::Invalid`]: super::tokens::TokenKind::Invalid
pub trait TokenSource {
    fn next_token(&mut self, symbols: &mut SymbolTable) -> Result<Token, Error>;

    /// Line the source is currently positioned on.
    fn line(&self) -> u32;

    fn file(&self) -> Rc<String>;
}
