use std::collections::BTreeMap;

use crate::errors::errors::{ErrorLog, LexicalError, SyntaxError};
use crate::scanner::tokens::{Token, KEYWORDS};

/// Body of the token listing report: one line per source line that
/// produced tokens, `<line>.\t` followed by the space-separated tokens in
/// emission order.
pub fn render_token_listing(listing: &BTreeMap<u32, Vec<Token>>) -> String {
    listing
        .iter()
        .map(|(line, tokens)| {
            let rendered: Vec<String> = tokens.iter().map(Token::to_string).collect();
            format!("{}.\t{}", line, rendered.join(" "))
        })
        .collect::<Vec<String>>()
        .join("\n")
}

/// Body of the symbol table report: the reserved keywords in their fixed
/// order, then every distinct identifier in first-seen order, numbered
/// consecutively from 1.
pub fn render_symbol_table(identifiers: &[String]) -> String {
    KEYWORDS
        .iter()
        .copied()
        .chain(identifiers.iter().map(String::as_str))
        .enumerate()
        .map(|(index, name)| format!("{}.\t{}", index + 1, name))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Body of the lexical error report: either the no-error sentinel, or one
/// newline-terminated line per source line with errors, each entry in its
/// `(<lexeme>, <reason>)` form.
pub fn render_lexical_errors(errors: &ErrorLog<LexicalError>) -> String {
    if errors.is_empty() {
        return "There is no lexical error.".to_string();
    }
    let mut body = String::new();
    for (line, entries) in errors.iter() {
        let rendered: Vec<String> = entries.iter().map(LexicalError::to_string).collect();
        body.push_str(&format!("{}.\t{}\n", line, rendered.join(" ")));
    }
    body
}

/// Body of the syntax error report: either the no-error sentinel, or one
/// `#<line> : syntax error, <message>` line per recorded error, in line
/// order.
pub fn render_syntax_errors(errors: &ErrorLog<SyntaxError>) -> String {
    if errors.is_empty() {
        return "There is no syntax error.".to_string();
    }
    errors
        .iter()
        .flat_map(|(line, entries)| {
            entries
                .iter()
                .map(move |entry| format!("#{} : syntax error, {}", line, entry))
        })
        .collect::<Vec<String>>()
        .join("\n")
}
