//! Configuration loading and schema definitions
//!
//! Search limits, catalog location and logging settings, read from TOML.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
