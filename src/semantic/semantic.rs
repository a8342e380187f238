use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SemanticResultType {
    Ok,
    Error,
    Int,
    Float,
    Char,
    String,
    Mul,
    Div,
    And,
}

impl Display for SemanticResultType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SemanticResultType::Ok => "ok",
            SemanticResultType::Error => "error",
            SemanticResultType::Int => "int",
            SemanticResultType::Float => "float",
            SemanticResultType::Char => "char",
            SemanticResultType::String => "string",
            SemanticResultType::Mul => "*",
            SemanticResultType::Div => "/",
            SemanticResultType::And => "&&",
        };
        write!(f, "{}", name)
    }
}

/// The attribute every grammar rule synthesizes: a kind, plus a message and
/// line when the rule (or one of its children) found a type error.
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticResult {
    pub kind: SemanticResultType,
    pub message: Option<String>,
    pub line: Option<u32>,
}

impl SemanticResult {
    /// A missing kind (an identifier that was never declared) becomes `Error`.
    pub fn new(kind: Option<SemanticResultType>) -> Self {
        SemanticResult {
            kind: kind.unwrap_or(SemanticResultType::Error),
            message: None,
            line: None,
        }
    }

    pub fn ok() -> Self {
        SemanticResult::new(Some(SemanticResultType::Ok))
    }

    pub fn with_message(kind: Option<SemanticResultType>, message: String, line: u32) -> Self {
        SemanticResult {
            message: Some(message),
            line: Some(line),
            ..SemanticResult::new(kind)
        }
    }

    pub fn error(message: String, line: u32) -> Self {
        SemanticResult::with_message(Some(SemanticResultType::Error), message, line)
    }

    /// An error with the generic "Semantic error on line L" text.
    pub fn error_on_line(line: u32) -> Self {
        SemanticResult::error(semantic_error_message(line), line)
    }

    pub fn is_numeric_or_char(&self) -> bool {
        matches!(
            self.kind,
            SemanticResultType::Int | SemanticResultType::Float | SemanticResultType::Char
        )
    }

    pub fn is_error(&self) -> bool {
        self.kind == SemanticResultType::Error
    }

    pub fn ok_if_not_error(self) -> Self {
        if self.is_error() {
            self
        } else {
            SemanticResult::ok()
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Display for SemanticResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}", message),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Collects error messages in the order they were found.
#[derive(Debug, Default)]
pub struct Diagnostics {
    messages: Vec<String>,
    line: Option<u32>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    /// Records `result`'s message if it is an error carrying one.
    pub fn absorb(&mut self, result: &SemanticResult) {
        if !result.is_error() {
            return;
        }
        if let Some(message) = &result.message {
            self.messages.push(message.clone());
            self.line = self.line.or(result.line);
        }
    }

    pub fn push(&mut self, message: String, line: u32) {
        self.messages.push(message);
        self.line = self.line.or(Some(line));
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Builds an `Error` result from everything collected so far.
    pub fn into_error(self) -> SemanticResult {
        SemanticResult {
            kind: SemanticResultType::Error,
            message: if self.messages.is_empty() {
                None
            } else {
                Some(self.messages.join("\n"))
            },
            line: self.line,
        }
    }
}

/// `Error` if any child is an error, carrying the failing children's messages
/// newline-joined in order; `Ok` otherwise.
pub fn aggregate<I>(results: I) -> SemanticResult
where
    I: IntoIterator<Item = SemanticResult>,
{
    let mut diagnostics = Diagnostics::new();
    let mut failed = false;

    for result in results {
        if result.is_error() {
            failed = true;
            diagnostics.absorb(&result);
        }
    }

    if failed {
        diagnostics.into_error()
    } else {
        SemanticResult::ok()
    }
}

pub fn semantic_error_message(line: u32) -> String {
    format!("Semantic error on line {}", line)
}

pub fn unexpected_type_message(line: u32) -> String {
    format!(
        "Unexpected Expression Type on line {}\nExpected type int, float or char",
        line
    )
}

pub fn expected_numeric_message(line: u32) -> String {
    format!("Expected a numeric type expression on line {}.", line)
}

pub fn undefined_variable_message(line: u32, name: &str) -> String {
    format!("Undefined variable {} on line {}.", name, line)
}

// The doubled space is part of the established message text.
pub fn incompatible_types_message(line: u32) -> String {
    format!("Incompatible variable types on  on line {}.", line)
}
