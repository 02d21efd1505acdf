//! Error types and error logs for the compiler front end.
//!
//! This module defines the two error domains the front end reports on:
//!
//! - Lexical errors, logged by the scanner and recovered locally
//! - Syntax errors, logged by the parser during panic-mode recovery
//!
//! plus the fatal `FrontendError` conditions that abort a run, and the
//! line-indexed `ErrorLog` both domains are collected in.

pub mod errors;
