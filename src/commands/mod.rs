pub mod analyze;
pub mod auth;
pub mod catalog;
pub mod compare;

use std::io::Read;

use colored::Colorize;

use crate::error::{PilotError, Result};
use crate::prompt::FindingSet;

/// Take the prompt from the argument, or from stdin when none was given.
pub fn read_prompt(arg: Option<String>) -> Result<String> {
    let raw = match arg {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf.trim_end_matches(['\n', '\r']).to_string()
        }
    };
    if raw.trim().is_empty() {
        return Err(PilotError::EmptyPrompt);
    }
    Ok(raw)
}

/// Single-threaded runtime for the one-shot async work a command does.
pub fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| PilotError::Config(format!("tokio runtime: {}", e)))
}

pub fn print_findings(findings: &FindingSet, debug: bool) {
    let score = format!("{}/100", findings.score);
    let score = match findings.score {
        75..=100 => score.green().bold(),
        50..=74 => score.yellow().bold(),
        _ => score.red().bold(),
    };
    println!("{}", "Analysis Results".green().bold());
    println!("{}", "=".repeat(50));
    println!("  Score: {}", score);

    if findings.issues.is_empty() {
        println!("  {} No issues found.", "✓".green());
    } else {
        println!();
        println!("  {}", "Issues".bold());
        for issue in &findings.issues {
            println!("    {} {}", "✗".red(), issue);
        }
        println!();
        println!("  {}", "Suggestions".bold());
        for suggestion in &findings.suggestions {
            println!("    {} {}", "→".cyan(), suggestion.text);
        }
    }

    if debug && !findings.reasoning_trace.is_empty() {
        println!();
        println!("  {}", "Reasoning".bold());
        for (i, step) in findings.reasoning_trace.iter().enumerate() {
            println!("    {}. {}", i + 1, step.dimmed());
        }
    }
    println!();
}

pub fn print_optimized(optimized: &str) {
    println!("{}", "Optimized Prompt".green().bold());
    println!("{}", "=".repeat(50));
    println!("{}", optimized);
    println!();
}
