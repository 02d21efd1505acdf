//! Lexical analysis module for the compiler front end.
//!
//! This module contains the scanner (tokenizer) that converts source text
//! into a stream of classified tokens on demand. It handles:
//!
//! - Character-by-character tokenization with maximal munch
//! - One-character lookahead for `==` and comment delimiters
//! - Keyword vs. identifier classification
//! - Fine-grained invalid-input recovery: malformed lexemes are dropped
//!   into the lexical error log and scanning resumes

pub mod scanner;
pub mod tokens;

#[cfg(test)]
mod tests;
