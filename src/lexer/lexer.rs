use std::{fs, path::Path, rc::Rc};

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    symbol_table::symbol_table::SymbolTable,
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::{
    source::TokenSource,
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

/// Builds a token from the matched text, or returns `None` for input that
/// produces no token (whitespace, comments).
pub type RegexHandler = fn(&Lexer, &str, &mut SymbolTable) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order, first match wins. Every pattern is anchored at the cursor.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^//[^\\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^/\\*(?s:.)*?\\*/").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^/\\*(?s:.)*").unwrap(), handler: unterminated_comment_handler },
        RegexPattern { regex: Regex::new("^[0-9]+\\.[0-9]+").unwrap(), handler: float_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: int_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^'[^'\\n]'").unwrap(), handler: char_handler },
        RegexPattern { regex: Regex::new("^\"[^\"\\n]*\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
        RegexPattern { regex: Regex::new("^&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::And, "&&") },
        RegexPattern { regex: Regex::new("^\\|\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Or, "||") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
    ];
}

/// On-demand scanner over an in-memory source.
pub struct Lexer {
    source: String,
    pos: usize,
    line: u32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            line: 1,
            file: file_name,
        }
    }

    pub fn from_file(path: &Path) -> Result<Lexer, Error> {
        let name = path.to_string_lossy().into_owned();
        let source = fs::read_to_string(path).map_err(|err| {
            Error::new(
                ErrorImpl::Io {
                    path: name.clone(),
                    message: err.to_string(),
                },
                Position(0, Rc::new(name.clone())),
            )
        })?;

        Ok(Lexer::new(source, Some(name)))
    }

    pub fn position(&self) -> Position {
        Position(self.line, Rc::clone(&self.file))
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn advance(&mut self, text: &str) {
        self.line += text.matches('\n').count() as u32;
        self.pos += text.len();
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self, symbols: &mut SymbolTable) -> Result<Token, Error> {
        loop {
            if self.at_eof() {
                return Ok(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), self.position()));
            }

            let remainder = self.remainder();
            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remainder)
                    .map(|found| (pattern.handler, found.as_str().to_string()))
            });

            match matched {
                Some((handler, text)) => {
                    let token = handler(self, &text, symbols);
                    self.advance(&text);

                    if let Some(token) = token {
                        trace!("scanned {}", token.debug());
                        return Ok(token);
                    }
                }
                None => {
                    // Unknown character: hand it to the analyzer as an invalid lexeme.
                    let bad = remainder.chars().next().map(String::from).unwrap_or_default();
                    let token = MK_TOKEN!(TokenKind::Invalid, bad.clone(), self.position());
                    self.advance(&bad);
                    return Ok(token);
                }
            }
        }
    }

    fn line(&self) -> u32 {
        self.line
    }

    fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }
}

fn skip_handler(_lexer: &Lexer, _matched: &str, _symbols: &mut SymbolTable) -> Option<Token> {
    None
}

fn unterminated_comment_handler(
    lexer: &Lexer,
    _matched: &str,
    _symbols: &mut SymbolTable,
) -> Option<Token> {
    Some(MK_TOKEN!(TokenKind::Invalid, String::from("/*"), lexer.position()))
}

fn int_handler(lexer: &Lexer, matched: &str, _symbols: &mut SymbolTable) -> Option<Token> {
    Some(MK_TOKEN!(TokenKind::IntConst, matched.to_string(), lexer.position()))
}

fn float_handler(lexer: &Lexer, matched: &str, _symbols: &mut SymbolTable) -> Option<Token> {
    Some(MK_TOKEN!(TokenKind::FloatConst, matched.to_string(), lexer.position()))
}

fn char_handler(lexer: &Lexer, matched: &str, _symbols: &mut SymbolTable) -> Option<Token> {
    let value = matched.trim_matches('\'').to_string();
    Some(MK_TOKEN!(TokenKind::CharConst, value, lexer.position()))
}

fn string_handler(lexer: &Lexer, matched: &str, _symbols: &mut SymbolTable) -> Option<Token> {
    let value = matched[1..matched.len() - 1].to_string();
    Some(MK_TOKEN!(TokenKind::StringConst, value, lexer.position()))
}

fn symbol_handler(lexer: &Lexer, matched: &str, symbols: &mut SymbolTable) -> Option<Token> {
    if let Some(kind) = RESERVED_LOOKUP.get(matched) {
        return Some(MK_TOKEN!(*kind, matched.to_string(), lexer.position()));
    }

    let mut token = MK_TOKEN!(TokenKind::Identifier, matched.to_string(), lexer.position());
    token.symbol = Some(symbols.lookup_or_insert(matched));
    Some(token)
}

/// Drains a fresh lexer over `source`, EOF token included.
pub fn tokenize(
    source: String,
    file: Option<String>,
    symbols: &mut SymbolTable,
) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token(symbols)?;
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}
