//! CLI command implementations

pub mod check;
pub mod repl;
pub mod search;
