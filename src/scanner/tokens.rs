use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

/// Reserved words of the language, in the order the symbol table lists them.
pub const KEYWORDS: [&str; 8] = [
    "break", "else", "if", "endif", "int", "while", "return", "void",
];

/// Single-character symbols. `==` is the only compound symbol and is
/// assembled by the scanner via lookahead; `/` is deliberately absent
/// because it leads comments.
pub const SYMBOL_CHARS: [char; 14] = [
    ';', ':', ',', '[', ']', '(', ')', '{', '}', '+', '-', '*', '=', '<',
];

const WHITESPACE_CHARS: [char; 6] = [' ', '\n', '\r', '\t', '\u{b}', '\u{c}'];

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        for keyword in KEYWORDS {
            set.insert(keyword);
        }
        set
    };
}

/// Character classes driving the scanner's dispatch.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CharClass {
    Whitespace,
    Symbol,
    Digit,
    Alnum,
    CommentLead,
    Invalid,
}

/// Classifies a single character. Order matters: `/` is not a symbol
/// character, it leads comments.
pub fn classify(c: char) -> CharClass {
    if WHITESPACE_CHARS.contains(&c) {
        CharClass::Whitespace
    } else if SYMBOL_CHARS.contains(&c) {
        CharClass::Symbol
    } else if c.is_ascii_digit() {
        CharClass::Digit
    } else if c.is_alphanumeric() {
        CharClass::Alnum
    } else if c == '/' {
        CharClass::CommentLead
    } else {
        CharClass::Invalid
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Symbol,
    Num,
    Id,
    Keyword,
    Comment,
    Invalid,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Symbol => "SYMBOL",
            TokenKind::Num => "NUM",
            TokenKind::Id => "ID",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Comment => "COMMENT",
            TokenKind::Invalid => "INVALID",
        };
        write!(f, "{}", name)
    }
}

/// A classified token. Immutable once produced; `line` is 1-based.
///
/// Renders as `(<KIND>, <value>)`, the form used by the token listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub line: u32,
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(line: u32, kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            line,
            kind,
            literal: literal.into(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.kind, self.literal)
    }
}
