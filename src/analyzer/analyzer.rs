//! Analyzer state and the structural primitives every grammar rule uses.
//!
//! The analyzer holds the single lookahead token, pulls the next one from a
//! [`TokenSource`] on demand and owns the symbol table identifiers are
//! interned into. Grammar rules live in `decl.rs`, `stmt.rs` and `expr.rs`;
//! dispatch tables are filled by `lookups.rs`.

use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        source::TokenSource,
        tokens::{Token, TokenKind},
    },
    semantic::semantic::{SemanticResult, SemanticResultType},
    symbol_table::symbol_table::{SymbolId, SymbolTable},
    Position, MK_TOKEN,
};

use super::{
    decl::parse_program,
    lookups::{create_token_lookups, KindLookup, StmtHandler, StmtLookup},
};

/// Switches for behaviour that differs from the straightforward reading of
/// the grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Declare every variable as `int`, whatever type keyword follows `is`.
    pub collapse_declared_types: bool,
}

pub struct Analyzer {
    /// Where tokens come from
    source: Box<dyn TokenSource>,
    /// Declared types, keyed by interned identifier
    symbols: SymbolTable,
    /// The lookahead token
    current: Token,
    config: AnalyzerConfig,
    /// Statement handlers keyed by their first token
    stmt_lookup: StmtLookup,
    /// Relational operators
    relop_lookup: KindLookup,
    /// Additive operators
    addop_lookup: KindLookup,
    /// Multiplicative operators and the kind each one synthesizes
    mulop_lookup: KindLookup,
    /// Type keywords accepted after `is`
    type_lookup: KindLookup,
    /// Constant tokens and the kind they synthesize
    constant_lookup: KindLookup,
}

impl Analyzer {
    pub fn new(source: Box<dyn TokenSource>, config: AnalyzerConfig) -> Self {
        let start = Position(source.line(), source.file());

        Analyzer {
            source,
            symbols: SymbolTable::new(),
            current: MK_TOKEN!(TokenKind::EOF, String::new(), start),
            config,
            stmt_lookup: HashMap::new(),
            relop_lookup: HashMap::new(),
            addop_lookup: HashMap::new(),
            mulop_lookup: HashMap::new(),
            type_lookup: HashMap::new(),
            constant_lookup: HashMap::new(),
        }
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Line of the lookahead token.
    pub fn line(&self) -> u32 {
        self.current.line()
    }

    pub fn get_position(&self) -> Position {
        self.current.position.clone()
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    /// Pulls the next token and returns the one it replaces.
    ///
    /// An invalid lexeme from the source ends the analysis.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.source.next_token(&mut self.symbols)?;

        if next.kind == TokenKind::Invalid {
            return Err(Error::new(
                ErrorImpl::InvalidToken { lexeme: next.value },
                next.position,
            ));
        }

        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consumes the lookahead if it has the expected kind.
    ///
    /// Reaching the end of input while something else was expected is
    /// reported as `UnexpectedEndOfInput` rather than as a mismatch.
    pub fn consume(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let kind = self.current_token_kind();

        if kind == TokenKind::EOF && expected_kind != TokenKind::EOF {
            return Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: expected_kind,
                },
                self.get_position(),
            ));
        }

        if kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: Some(expected_kind),
                    found: kind,
                    lexeme: self.current.value.clone(),
                },
                self.get_position(),
            ));
        }

        trace!("consumed {} on line {}", kind, self.line());

        // Nothing follows the end of input, so there is nothing to pull.
        if kind == TokenKind::EOF {
            return Ok(self.current.clone());
        }

        self.advance()
    }

    /// The error for a lookahead that no alternative of the current rule accepts.
    pub fn unexpected(&self) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: None,
                found: self.current_token_kind(),
                lexeme: self.current.value.clone(),
            },
            self.get_position(),
        )
    }

    /// Symbol table entry for an identifier token.
    pub fn symbol_of(&mut self, token: &Token) -> SymbolId {
        match token.symbol {
            Some(id) => id,
            None => self.symbols.lookup_or_insert(&token.value),
        }
    }

    /// Logs a freshly detected type error and passes it through.
    pub fn report(&self, result: SemanticResult) -> SemanticResult {
        if let Some(message) = &result.message {
            debug!("semantic error: {}", message.replace('\n', " / "));
        }
        result
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    pub fn get_relop_lookup(&self) -> &KindLookup {
        &self.relop_lookup
    }

    pub fn get_addop_lookup(&self) -> &KindLookup {
        &self.addop_lookup
    }

    pub fn get_mulop_lookup(&self) -> &KindLookup {
        &self.mulop_lookup
    }

    pub fn get_type_lookup(&self) -> &KindLookup {
        &self.type_lookup
    }

    pub fn get_constant_lookup(&self) -> &KindLookup {
        &self.constant_lookup
    }

    /// Registers the handler for statements starting with `kind`.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn relop(&mut self, kind: TokenKind) {
        self.relop_lookup.insert(kind, SemanticResultType::Ok);
    }

    pub fn addop(&mut self, kind: TokenKind) {
        self.addop_lookup.insert(kind, SemanticResultType::Ok);
    }

    pub fn mulop(&mut self, kind: TokenKind, operator: SemanticResultType) {
        self.mulop_lookup.insert(kind, operator);
    }

    pub fn type_keyword(&mut self, kind: TokenKind, declared: SemanticResultType) {
        self.type_lookup.insert(kind, declared);
    }

    pub fn constant(&mut self, kind: TokenKind, synthesized: SemanticResultType) {
        self.constant_lookup.insert(kind, synthesized);
    }
}

/// Checks a whole program pulled from `source`.
///
/// Returns the analyzer (so its symbol table can be inspected) together with
/// either the program's semantic result or the first structural error.
pub fn analyze<S>(source: S, config: AnalyzerConfig) -> (Analyzer, Result<SemanticResult, Error>)
where
    S: TokenSource + 'static,
{
    let mut analyzer = Analyzer::new(Box::new(source), config);
    create_token_lookups(&mut analyzer);

    debug!("analysis of {} started", analyzer.get_position().1);
    let result = run(&mut analyzer);

    match &result {
        Ok(semantic) => debug!(
            "analysis finished with {} ({} symbols)",
            semantic.kind,
            analyzer.symbols().len()
        ),
        Err(error) => debug!("analysis aborted: {}", error.get_error_name()),
    }

    (analyzer, result)
}

/// Convenience wrapper running [`analyze`] over source text.
pub fn analyze_source(
    source: &str,
    file: Option<String>,
    config: AnalyzerConfig,
) -> (Analyzer, Result<SemanticResult, Error>) {
    analyze(Lexer::new(source.to_string(), file), config)
}

fn run(analyzer: &mut Analyzer) -> Result<SemanticResult, Error> {
    analyzer.advance()?;
    let result = parse_program(analyzer)?;
    analyzer.consume(TokenKind::EOF)?;
    Ok(result)
}
