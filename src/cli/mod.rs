// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod handlers;

pub use args::{Cli, Commands};
pub use handlers::{handle_analyze, handle_init, AnalyzeArgs};
