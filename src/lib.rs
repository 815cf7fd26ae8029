// Library interface for promptpilot

pub mod auth;
pub mod bundle;
pub mod cli;
pub mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod runner;

// Re-export commonly used types
pub use config::Config;
pub use error::{PilotError, Result};
pub use prompt::{analyze, optimize, FindingSet, Issue};
