//! Predictive parser module.
//!
//! This module contains the table-driven LL(1) parser that pulls tokens
//! from the scanner on demand and builds the concrete parse tree. It
//! handles:
//!
//! - PREDICT-table-driven expansion of nonterminals
//! - Panic-mode recovery in three tiers: localized missing-terminal
//!   reports, FOLLOW-based synchronization, and discard-and-retry on
//!   illegal lookaheads
//! - The fatal unexpected-EOF condition, which flushes partial results
//!
//! The parse tree is built bottom-up: a nonterminal's node is attached to
//! its parent only once its expansion returns it, so abandoned subtrees
//! are never created-then-detached.

pub mod classify;
pub mod parser;
pub mod tree;
