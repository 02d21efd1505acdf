//! Unit tests for the scanner module.
//!
//! These cover tokenization of keywords, identifiers, numerals and symbols,
//! comment handling, and every lexical recovery path: invalid characters,
//! invalid numbers, stray and unclosed comment delimiters.

use crate::errors::errors::{LexicalError, LexicalErrorKind};

use super::scanner::{NextToken, Scanner};
use super::tokens::{Token, TokenKind};

fn drain(source: &str) -> (Vec<Token>, Scanner) {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        match scanner.next_token() {
            NextToken::Token(token) => tokens.push(token),
            NextToken::EndOfInput => break,
        }
    }
    (tokens, scanner)
}

#[test]
fn test_keywords_and_identifiers() {
    let (tokens, scanner) = drain("if endif void x y1");

    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[0], Token::new(1, TokenKind::Keyword, "if"));
    assert_eq!(tokens[1], Token::new(1, TokenKind::Keyword, "endif"));
    assert_eq!(tokens[2], Token::new(1, TokenKind::Keyword, "void"));
    assert_eq!(tokens[3], Token::new(1, TokenKind::Id, "x"));
    assert_eq!(tokens[4], Token::new(1, TokenKind::Id, "y1"));
    assert_eq!(scanner.identifiers(), ["x".to_string(), "y1".to_string()]);
    assert!(scanner.errors().is_empty());
}

#[test]
fn test_numbers_and_symbols() {
    let (tokens, scanner) = drain("x = 12 + 3;");

    let rendered: Vec<String> = tokens.iter().map(Token::to_string).collect();
    assert_eq!(
        rendered,
        vec!["(ID, x)", "(SYMBOL, =)", "(NUM, 12)", "(SYMBOL, +)", "(NUM, 3)", "(SYMBOL, ;)"]
    );
    assert!(scanner.errors().is_empty());
}

#[test]
fn test_compound_equals() {
    let (tokens, _) = drain("a == b");
    assert_eq!(tokens[1], Token::new(1, TokenKind::Symbol, "=="));

    // A trailing `=` at end of input is still a plain token.
    let (tokens, _) = drain("=");
    assert_eq!(tokens, vec![Token::new(1, TokenKind::Symbol, "=")]);
}

#[test]
fn test_invalid_character_is_dropped() {
    let (tokens, scanner) = drain("@");

    assert!(tokens.is_empty());
    assert_eq!(
        scanner.errors().entries(),
        vec![&LexicalError::new("@", LexicalErrorKind::InvalidInput)]
    );
}

#[test]
fn test_invalid_number_uses_maximal_munch() {
    // The digit run absorbs exactly one offending character before it is
    // abandoned, so `123abc;` yields a single error for `123a` and
    // scanning resumes at `b`.
    let (tokens, scanner) = drain("123abc;");

    assert_eq!(
        scanner.errors().entries(),
        vec![&LexicalError::new("123a", LexicalErrorKind::InvalidNumber)]
    );
    assert_eq!(tokens[0], Token::new(1, TokenKind::Id, "bc"));
    assert_eq!(tokens[1], Token::new(1, TokenKind::Symbol, ";"));
}

#[test]
fn test_number_terminated_by_end_of_input() {
    let (tokens, scanner) = drain("42");
    assert_eq!(tokens, vec![Token::new(1, TokenKind::Num, "42")]);
    assert!(scanner.errors().is_empty());
}

#[test]
fn test_identifier_glued_to_invalid_character() {
    let (tokens, scanner) = drain("cde@ f");

    assert_eq!(
        scanner.errors().entries(),
        vec![&LexicalError::new("cde@", LexicalErrorKind::InvalidInput)]
    );
    assert_eq!(tokens, vec![Token::new(1, TokenKind::Id, "f")]);
}

#[test]
fn test_equals_glued_to_invalid_character() {
    let (tokens, scanner) = drain("=@x");

    assert_eq!(
        scanner.errors().entries(),
        vec![&LexicalError::new("=@", LexicalErrorKind::InvalidInput)]
    );
    assert_eq!(tokens, vec![Token::new(1, TokenKind::Id, "x")]);
}

#[test]
fn test_star_glued_to_invalid_character() {
    let (tokens, scanner) = drain("*@");

    assert!(tokens.is_empty());
    assert_eq!(
        scanner.errors().entries(),
        vec![&LexicalError::new("*@", LexicalErrorKind::InvalidInput)]
    );
}

#[test]
fn test_comment_is_transparent() {
    let (tokens, scanner) = drain("/* x */ y");

    assert_eq!(tokens, vec![Token::new(1, TokenKind::Id, "y")]);
    assert!(scanner.errors().is_empty());
}

#[test]
fn test_comment_spanning_lines_advances_line_counter() {
    let (tokens, scanner) = drain("/* a\nb */ y");

    assert_eq!(tokens, vec![Token::new(2, TokenKind::Id, "y")]);
    assert!(scanner.errors().is_empty());
}

#[test]
fn test_unmatched_comment_close() {
    let (tokens, scanner) = drain("*/");

    assert!(tokens.is_empty());
    assert_eq!(
        scanner.errors().entries(),
        vec![&LexicalError::new("*/", LexicalErrorKind::UnmatchedComment)]
    );
}

#[test]
fn test_unclosed_comment_truncates_preview() {
    let (tokens, scanner) = drain("/* this never ends");

    assert!(tokens.is_empty());
    assert_eq!(
        scanner.errors().entries(),
        vec![&LexicalError::new("/* this...", LexicalErrorKind::UnclosedComment)]
    );
}

#[test]
fn test_unclosed_comment_reports_starting_line() {
    let (_, scanner) = drain("x\n/* a\nb");

    let lines: Vec<u32> = scanner.errors().iter().map(|(line, _)| line).collect();
    assert_eq!(lines, vec![2]);
    assert_eq!(
        scanner.errors().entries(),
        vec![&LexicalError::new("/* a\n", LexicalErrorKind::UnclosedComment)]
    );
}

#[test]
fn test_stray_slash_lexemes() {
    // `/` before whitespace, symbols, digits or another `/` is reported
    // alone; before a letter or invalid character the pair is reported.
    let (_, scanner) = drain("/1");
    assert_eq!(
        scanner.errors().entries(),
        vec![&LexicalError::new("/", LexicalErrorKind::InvalidInput)]
    );

    let (tokens, scanner) = drain("/x y");
    assert_eq!(
        scanner.errors().entries(),
        vec![&LexicalError::new("/x", LexicalErrorKind::InvalidInput)]
    );
    assert_eq!(tokens, vec![Token::new(1, TokenKind::Id, "y")]);

    let (_, scanner) = drain("/");
    assert_eq!(
        scanner.errors().entries(),
        vec![&LexicalError::new("/", LexicalErrorKind::InvalidInput)]
    );
}

#[test]
fn test_line_numbers_in_listing() {
    let (_, scanner) = drain("int x;\nint y;");

    let lines: Vec<u32> = scanner.listing().keys().copied().collect();
    assert_eq!(lines, vec![1, 2]);
    assert_eq!(scanner.listing()[&2].len(), 3);
}

#[test]
fn test_identifiers_recorded_once_in_first_seen_order() {
    let (_, scanner) = drain("void main(void){ x = y; x = x; }");

    assert_eq!(
        scanner.identifiers(),
        ["main".to_string(), "x".to_string(), "y".to_string()]
    );
}

#[test]
fn test_end_of_input_is_sticky() {
    let mut scanner = Scanner::new("x");
    assert!(matches!(scanner.next_token(), NextToken::Token(_)));
    assert_eq!(scanner.next_token(), NextToken::EndOfInput);
    assert_eq!(scanner.next_token(), NextToken::EndOfInput);
}
