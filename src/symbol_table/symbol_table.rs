use std::collections::HashMap;

use crate::semantic::semantic::SemanticResultType;

/// Index of a [`Word`] inside a [`SymbolTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolId(usize);

/// An identifier record: its lexeme and, once declared, its type.
#[derive(Debug, Clone)]
pub struct Word {
    pub lexeme: String,
    pub declared_type: Option<SemanticResultType>,
}

/// Flat lexeme to [`Word`] arena for one analysis run.
///
/// Every [`SymbolId`] passed in must have been handed out by this same
/// table; an id from another table panics on lookup.
#[derive(Debug, Default)]
pub struct SymbolTable {
    lookup: HashMap<String, SymbolId>,
    words: Vec<Word>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Returns the entry for `lexeme`, creating an undeclared one on first sight.
    pub fn lookup_or_insert(&mut self, lexeme: &str) -> SymbolId {
        if let Some(id) = self.lookup.get(lexeme) {
            return *id;
        }

        let id = SymbolId(self.words.len());
        self.words.push(Word {
            lexeme: lexeme.to_string(),
            declared_type: None,
        });
        self.lookup.insert(lexeme.to_string(), id);
        id
    }

    pub fn find(&self, lexeme: &str) -> Option<SymbolId> {
        self.lookup.get(lexeme).copied()
    }

    pub fn lexeme(&self, id: SymbolId) -> &str {
        &self.words[id.0].lexeme
    }

    pub fn declared_type(&self, id: SymbolId) -> Option<SemanticResultType> {
        self.words[id.0].declared_type
    }

    /// Sets the declared type. A later declaration of the same name wins.
    pub fn declare(&mut self, id: SymbolId, declared_type: SemanticResultType) {
        self.words[id.0].declared_type = Some(declared_type);
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
