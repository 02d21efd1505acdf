use crate::scanner::tokens::{Token, TokenKind};

/// Maps a token to the grammar terminal it matches against: identifiers
/// and numerals collapse to their class symbols, everything else matches
/// by literal text.
pub fn terminal_class(token: &Token) -> String {
    match token.kind {
        TokenKind::Id => "ID".to_string(),
        TokenKind::Num => "NUM".to_string(),
        _ => token.literal.clone(),
    }
}

/// Printable form a matched token takes as a parse tree leaf: the literal
/// for symbols and keywords, `(<KIND>, <value>)` for `ID`/`NUM`.
pub fn leaf_text(token: &Token) -> String {
    match token.kind {
        TokenKind::Id | TokenKind::Num => token.to_string(),
        _ => token.literal.clone(),
    }
}
