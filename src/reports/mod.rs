//! Report rendering module.
//!
//! Turns the artifacts collected during a run (token listing, identifier
//! table, lexical and syntax error logs, parse tree) into the textual
//! reports the driver writes out. Each renderer is a pure function from
//! the collected data to the report body.

pub mod reports;
