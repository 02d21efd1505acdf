#![allow(clippy::module_inception)]

//! A front end for the C-minus language: a character-level lexical
//! scanner and a table-driven LL(1) predictive parser with panic-mode
//! error recovery.
//!
//! One call to [`parser::parser::Parser::parse`] drives the whole
//! pipeline: the parser pulls tokens from the scanner on demand, and the
//! run yields the parse tree, both error logs, the per-line token listing
//! and the identifier table. The [`reports`] module renders those into
//! their textual report bodies.

pub mod errors;
pub mod grammar;
pub mod parser;
pub mod reports;
pub mod scanner;

extern crate regex;
