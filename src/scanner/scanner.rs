use std::collections::BTreeMap;

use crate::errors::errors::{ErrorLog, LexicalError, LexicalErrorKind};

use super::tokens::{classify, CharClass, Token, TokenKind, RESERVED_LOOKUP};

/// Longest prefix of a partial comment kept in the unclosed-comment report.
const COMMENT_PREVIEW_LEN: usize = 7;

/// Result of one scanner pull: either a classified token or the end marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextToken {
    Token(Token),
    EndOfInput,
}

/// The lexical scanner.
///
/// Consumes the source character by character and produces one token per
/// [`Scanner::next_token`] call. Malformed lexemes never stop the scan:
/// they are appended to the lexical error log, the offending span is
/// consumed, and scanning resumes at the next character. As tokens are
/// emitted they are also recorded into the per-line token listing and the
/// identifier table, so a single parser-driven pass yields every report.
pub struct Scanner {
    chars: Vec<char>,
    cursor: usize,
    line: u32,
    errors: ErrorLog<LexicalError>,
    listing: BTreeMap<u32, Vec<Token>>,
    identifiers: Vec<String>,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Scanner {
            chars: source.chars().collect(),
            cursor: 0,
            line: 1,
            errors: ErrorLog::new(),
            listing: BTreeMap::new(),
            identifiers: Vec::new(),
        }
    }

    /// Scans forward until a token can be emitted or input runs out.
    ///
    /// Whitespace, comments and erroneous spans are consumed without
    /// producing anything; once the cursor reaches the end every further
    /// call returns [`NextToken::EndOfInput`].
    pub fn next_token(&mut self) -> NextToken {
        loop {
            if self.at_end() {
                return NextToken::EndOfInput;
            }
            let c = self.chars[self.cursor];
            let produced = match classify(c) {
                CharClass::Whitespace => {
                    if c == '\n' {
                        self.line += 1;
                    }
                    self.cursor += 1;
                    None
                }
                CharClass::Symbol => self.scan_symbol(c),
                CharClass::Digit => self.scan_number(),
                CharClass::Alnum => self.scan_name(),
                CharClass::CommentLead => self.scan_comment_lead(),
                CharClass::Invalid => {
                    self.log_error(c.to_string(), LexicalErrorKind::InvalidInput);
                    self.cursor += 1;
                    None
                }
            };
            if let Some(token) = produced {
                self.record(&token);
                return NextToken::Token(token);
            }
        }
    }

    /// Lexical errors collected so far, keyed by line.
    pub fn errors(&self) -> &ErrorLog<LexicalError> {
        &self.errors
    }

    /// Emitted tokens grouped by source line.
    pub fn listing(&self) -> &BTreeMap<u32, Vec<Token>> {
        &self.listing
    }

    /// Distinct identifiers in first-seen order.
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    fn at_end(&self) -> bool {
        self.cursor >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.cursor + 1).copied()
    }

    fn log_error(&mut self, lexeme: String, kind: LexicalErrorKind) {
        self.errors.log(self.line, LexicalError::new(lexeme, kind));
    }

    fn record(&mut self, token: &Token) {
        self.listing
            .entry(token.line)
            .or_default()
            .push(token.clone());
        if token.kind == TokenKind::Id && !self.identifiers.contains(&token.literal) {
            self.identifiers.push(token.literal.clone());
        }
    }

    fn emit_symbol(&mut self, literal: impl Into<String>) -> Option<Token> {
        Some(Token::new(self.line, TokenKind::Symbol, literal))
    }

    /// Single-character symbols, with one-character lookahead for the two
    /// special leads: `=` (may form `==` or pair with an invalid character)
    /// and `*` (may form a stray `*/` or pair with an invalid character).
    fn scan_symbol(&mut self, c: char) -> Option<Token> {
        match c {
            '*' => {
                if let Some(next) = self.peek() {
                    if next == '/' {
                        self.cursor += 2;
                        self.log_error("*/".to_string(), LexicalErrorKind::UnmatchedComment);
                        return None;
                    }
                    if classify(next) == CharClass::Invalid {
                        self.cursor += 2;
                        self.log_error(format!("*{}", next), LexicalErrorKind::InvalidInput);
                        return None;
                    }
                }
            }
            '=' => {
                if let Some(next) = self.peek() {
                    if next == '=' {
                        self.cursor += 2;
                        return self.emit_symbol("==");
                    }
                    if classify(next) == CharClass::Invalid {
                        self.cursor += 2;
                        self.log_error(format!("={}", next), LexicalErrorKind::InvalidInput);
                        return None;
                    }
                }
            }
            _ => {}
        }
        self.cursor += 1;
        self.emit_symbol(c.to_string())
    }

    /// Maximal-munch of a digit run. Whitespace or a symbol terminates the
    /// numeral cleanly (boundary not consumed); any other character is
    /// glued onto the lexeme, consumed, and the whole run is dropped as an
    /// invalid number.
    fn scan_number(&mut self) -> Option<Token> {
        let mut lexeme = String::new();
        lexeme.push(self.chars[self.cursor]);
        self.cursor += 1;
        while !self.at_end() {
            let c = self.chars[self.cursor];
            match classify(c) {
                CharClass::Digit => {
                    lexeme.push(c);
                    self.cursor += 1;
                }
                CharClass::Whitespace | CharClass::Symbol => break,
                _ => {
                    lexeme.push(c);
                    self.cursor += 1;
                    self.log_error(lexeme, LexicalErrorKind::InvalidNumber);
                    return None;
                }
            }
        }
        Some(Token::new(self.line, TokenKind::Num, lexeme))
    }

    /// Maximal-munch of an alphanumeric run; boundary rules mirror
    /// [`Scanner::scan_number`]. A clean run is classified against the
    /// keyword set, anything else becomes an identifier.
    fn scan_name(&mut self) -> Option<Token> {
        let mut lexeme = String::new();
        lexeme.push(self.chars[self.cursor]);
        self.cursor += 1;
        while !self.at_end() {
            let c = self.chars[self.cursor];
            match classify(c) {
                CharClass::Digit | CharClass::Alnum => {
                    lexeme.push(c);
                    self.cursor += 1;
                }
                CharClass::Whitespace | CharClass::Symbol => break,
                _ => {
                    lexeme.push(c);
                    self.cursor += 1;
                    self.log_error(lexeme, LexicalErrorKind::InvalidInput);
                    return None;
                }
            }
        }
        let kind = if RESERVED_LOOKUP.contains(lexeme.as_str()) {
            TokenKind::Keyword
        } else {
            TokenKind::Id
        };
        Some(Token::new(self.line, kind, lexeme))
    }

    /// A `/` either opens a block comment or is an invalid lexeme; it is
    /// never a token. Comments are scanned to their `*/` close (tracking
    /// newlines) and discarded; an input-exhausted comment is reported at
    /// its starting line with a truncated preview.
    fn scan_comment_lead(&mut self) -> Option<Token> {
        let next = match self.peek() {
            Some(next) => next,
            None => {
                self.log_error("/".to_string(), LexicalErrorKind::InvalidInput);
                self.cursor += 1;
                return None;
            }
        };
        if next != '*' {
            match classify(next) {
                CharClass::Whitespace => {
                    self.log_error("/".to_string(), LexicalErrorKind::InvalidInput);
                    // A following newline is left for the whitespace branch
                    // so the line counter stays right.
                    if next == '\n' {
                        self.cursor += 1;
                    } else {
                        self.cursor += 2;
                    }
                }
                CharClass::Symbol | CharClass::Digit | CharClass::CommentLead => {
                    self.log_error("/".to_string(), LexicalErrorKind::InvalidInput);
                    self.cursor += 1;
                }
                _ => {
                    self.log_error(format!("/{}", next), LexicalErrorKind::InvalidInput);
                    self.cursor += 2;
                }
            }
            return None;
        }

        let starting_line = self.line;
        let mut lexeme = String::from("/");
        loop {
            self.cursor += 1;
            let c = self.chars[self.cursor];
            if self.cursor + 1 < self.chars.len() {
                if c == '*' && self.chars[self.cursor + 1] == '/' {
                    self.cursor += 2;
                    return None;
                }
            } else {
                // Input exhausted inside the comment; the final character
                // is not part of the captured lexeme.
                self.cursor += 1;
                self.errors.log(
                    starting_line,
                    LexicalError::new(comment_preview(&lexeme), LexicalErrorKind::UnclosedComment),
                );
                return None;
            }
            if c == '\n' {
                self.line += 1;
            }
            lexeme.push(c);
        }
    }
}

fn comment_preview(lexeme: &str) -> String {
    if lexeme.chars().count() >= COMMENT_PREVIEW_LEN {
        let preview: String = lexeme.chars().take(COMMENT_PREVIEW_LEN).collect();
        format!("{}...", preview)
    } else {
        lexeme.to_string()
    }
}
