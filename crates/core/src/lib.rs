//! Core utilities for SmartChef tools
//!
//! This crate provides shared functionality used by the command-line front end:
//!
//! - **Error handling**: Errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration for search limits, catalog location and logging
//! - **Validation**: Fluent checks applied to configuration after loading
//!
//! # Example
//!
//! ```rust,no_run
//! use smartchef_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! println!("max results: {}", config.schema.limits.max_results);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod validation;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::validation::{ValidationResult, Validator};
}
