use std::path::PathBuf;
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::bundle::{default_file_name, ResultBundle};
use crate::commands::{print_findings, print_optimized, read_prompt, runtime};
use crate::config::Config;
use crate::diff::compute_diff;
use crate::error::Result;
use crate::llm::registry::default_model;
use crate::llm::OpenRouterClient;
use crate::prompt::{analyze, optimize};
use crate::runner::{run_side, Side, SideBySide, SideOutcome};

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn print_side(side: Side, outcome: &SideOutcome) {
    let title = match side {
        Side::Original => "Original Prompt Output",
        Side::Optimized => "Optimized Prompt Output",
    };
    println!("{}", title.cyan().bold());
    println!("{}", "-".repeat(50));
    if outcome.ok {
        println!("{}", outcome.output);
    } else {
        println!("{}", outcome.output.red());
    }
    println!();
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_compare(
    config: &Config,
    prompt: Option<String>,
    model: Option<String>,
    iterations: u32,
    debug: bool,
    save: bool,
    output: Option<PathBuf>,
    skip_validation: bool,
) -> Result<()> {
    // Credential and model problems are reported before any analysis runs
    let model = model.unwrap_or_else(|| default_model().to_string());
    let resolved = config.resolve_model(&model)?;
    let client = OpenRouterClient::new(&resolved, config.timeout);
    let rt = runtime()?;

    if skip_validation {
        tracing::debug!("skipping API key validation");
    } else {
        let pb = spinner("Validating API key...".to_string());
        let checked = rt.block_on(client.validate());
        pb.finish_and_clear();
        checked?;
        tracing::info!(model = %resolved.id, "API key validated");
    }

    let prompt = read_prompt(prompt)?;

    let findings = analyze(&prompt);
    tracing::info!(issues = ?findings.issues, "prompt analysis completed");
    let optimized = optimize(&prompt, &findings);
    tracing::info!("prompt optimization completed");

    print_findings(&findings, debug);
    print_optimized(&optimized);

    println!("{}", "Changes".green().bold());
    println!("{}", "=".repeat(50));
    println!("{}", compute_diff(&prompt, &optimized));
    println!();

    println!(
        "{} {} ({} iteration{})",
        "Side-by-Side Testing with".green().bold(),
        resolved.id.cyan(),
        iterations,
        if iterations == 1 { "" } else { "s" }
    );
    println!("{}", "=".repeat(50));

    let mut results = SideBySide::default();

    for (side, text) in [(Side::Original, &prompt), (Side::Optimized, &optimized)] {
        let pb = spinner(format!("Running {} prompt...", side.label()));
        let outcome = rt.block_on(run_side(&client, side, text, iterations));
        pb.finish_and_clear();
        print_side(side, &outcome);
        match side {
            Side::Original => results.original = outcome,
            Side::Optimized => results.optimized = outcome,
        }
    }

    let target = match (output, save) {
        (Some(path), _) => Some(path),
        (None, true) => Some(default_file_name(chrono::Local::now())),
        (None, false) => None,
    };
    if let Some(path) = target {
        let bundle = ResultBundle::new(chrono::Local::now(), &prompt, &findings, &optimized, &results);
        bundle.save(&path)?;
        println!(
            "{} Saved results to {}",
            "Done!".green().bold(),
            path.display()
        );
    }

    Ok(())
}
