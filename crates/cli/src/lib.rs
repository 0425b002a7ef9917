//! CLI utilities for SmartChef tools
//!
//! Provides shared CLI functionality:
//! - Coloured status messages
//! - Duration and count formatting
//! - Rendering of ranked recipe results

#![warn(missing_docs)]

pub mod output;
