//! CLI module for prfacc
//!
//! This module contains all CLI command handlers and utilities.

mod commands;
mod logging;

pub use commands::{render_score, run_command};
pub use logging::{init_tracing, log, LogLevel};

// Re-export Cli from config for convenience
pub use crate::config::Cli;
