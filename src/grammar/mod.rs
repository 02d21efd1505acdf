//! Grammar tables for the predictive parser.
//!
//! The production-rule and PREDICT tables are static external data loaded
//! once from the paired resource files (`resource/grammar_rules.txt` and
//! `resource/predict.txt`); the FOLLOW sets are embedded configuration.
//! Nothing is derived from the grammar at runtime.

pub mod follow;
pub mod tables;


/// Marker for a production deriving the empty string.
pub const EPSILON: &str = "ε";

/// End-of-input terminal.
pub const END_MARKER: &str = "$";

/// The grammar's start symbol.
pub const START_SYMBOL: &str = "Program";
