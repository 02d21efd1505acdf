use std::collections::BTreeMap;
use std::fmt::Display;

use thiserror::Error;

/// Reason attached to a dropped lexeme. The messages are the exact
/// vocabulary the lexical error report uses.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalErrorKind {
    #[error("Invalid input")]
    InvalidInput,
    #[error("Invalid number")]
    InvalidNumber,
    #[error("Unmatched comment")]
    UnmatchedComment,
    #[error("Unclosed comment")]
    UnclosedComment,
}

/// A single lexical defect: the offending lexeme and why it was dropped.
///
/// Renders as `(<lexeme>, <reason>)`, the entry format of the lexical
/// error report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalError {
    pub lexeme: String,
    pub kind: LexicalErrorKind,
}

impl LexicalError {
    pub fn new(lexeme: impl Into<String>, kind: LexicalErrorKind) -> Self {
        LexicalError {
            lexeme: lexeme.into(),
            kind,
        }
    }
}

impl Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lexeme, self.kind)
    }
}

/// A recorded syntax defect. The three variants are the complete message
/// vocabulary of the syntax error report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// An expected terminal or nonterminal was absent.
    #[error("missing {0}")]
    Missing(String),
    /// The lookahead neither starts nor follows the current nonterminal.
    #[error("illegal {0}")]
    Illegal(String),
    /// Input ran out while more structure was expected. Fatal.
    #[error("Unexpected EOF")]
    UnexpectedEof,
}

/// Conditions that abort the whole run. Everything else is recovered
/// locally and recorded in an [`ErrorLog`].
#[derive(Error, Debug)]
pub enum FrontendError {
    #[error("failed to read {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed grammar rule on line {line}")]
    MalformedRule { line: usize },
    #[error("malformed predict entry on line {line}")]
    MalformedPredict { line: usize },
    #[error("grammar rule and predict tables are not line-aligned")]
    MisalignedTables,
    #[error("grammar tables are empty")]
    EmptyTables,
    #[error("unexpected end of input while more structure was expected")]
    UnexpectedEof,
    #[error("expansion depth limit exceeded")]
    DepthLimitExceeded,
}

/// Line-indexed multimap of error entries.
///
/// Entries for a line keep insertion order (first detected, first listed);
/// iteration yields lines in ascending order.
#[derive(Debug, Clone)]
pub struct ErrorLog<T> {
    entries: BTreeMap<u32, Vec<T>>,
}

impl<T> ErrorLog<T> {
    pub fn new() -> Self {
        ErrorLog {
            entries: BTreeMap::new(),
        }
    }

    /// Appends an entry under `line`.
    pub fn log(&mut self, line: u32, entry: T) {
        self.entries.entry(line).or_default().push(entry);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &[T])> {
        self.entries
            .iter()
            .map(|(line, entries)| (*line, entries.as_slice()))
    }

    /// All entries in line order, flattened. Convenient for assertions.
    pub fn entries(&self) -> Vec<&T> {
        self.entries.values().flatten().collect()
    }
}

impl<T> Default for ErrorLog<T> {
    fn default() -> Self {
        ErrorLog::new()
    }
}
