use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::runner::MAX_ITERATIONS;

#[derive(Parser)]
#[command(
    name = "promptpilot",
    about = "Debug and optimize AI prompts, then test them side by side",
    version
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(global = true, long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a prompt and print the optimized version (no API calls)
    Analyze {
        /// Prompt text (read from stdin when omitted)
        prompt: Option<String>,

        /// Show the reasoning behind each finding
        #[arg(long)]
        debug: bool,

        /// Print findings and optimized prompt as JSON
        #[arg(long)]
        json: bool,
    },

    /// Analyze, optimize, and run both prompts against a model
    Compare {
        /// Prompt text (read from stdin when omitted)
        prompt: Option<String>,

        /// Model to test with (see `promptpilot models`)
        #[arg(long, short)]
        model: Option<String>,

        /// Number of test runs per prompt
        #[arg(long, short = 'n', default_value = "1",
              value_parser = clap::value_parser!(u32).range(1..=MAX_ITERATIONS as i64))]
        iterations: u32,

        /// Show the reasoning behind each finding
        #[arg(long)]
        debug: bool,

        /// Save the results bundle to the current directory
        #[arg(long)]
        save: bool,

        /// Save the results bundle to this path
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Skip the API key check that runs before analysis
        #[arg(long)]
        skip_validation: bool,
    },

    /// List the models that can be tested against
    Models,

    /// Show the built-in before/after example prompts
    Examples,

    /// Manage the OpenRouter API key
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },
}

#[derive(Subcommand)]
pub enum AuthCommand {
    /// Store an API key in auth.json
    Login {
        /// Key to store (prompted for when omitted)
        #[arg(long)]
        key: Option<String>,
    },
    /// Remove the stored API key
    Logout,
    /// Show which key is active and where it came from
    Status,
    /// List providers and whether each is configured
    List,
    /// Send a test request to check that the key works
    Test {
        /// Model to test with
        #[arg(long, short)]
        model: Option<String>,
    },
}
