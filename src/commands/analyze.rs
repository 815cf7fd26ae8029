use crate::commands::{print_findings, print_optimized, read_prompt};
use crate::error::Result;
use crate::prompt::{analyze, optimize, FindingSet};

#[derive(serde::Serialize)]
struct AnalyzeOutput<'a> {
    analysis: &'a FindingSet,
    optimized_prompt: &'a str,
}

pub fn cmd_analyze(prompt: Option<String>, debug: bool, json: bool) -> Result<()> {
    let prompt = read_prompt(prompt)?;

    let findings = analyze(&prompt);
    tracing::info!(issues = ?findings.issues, "prompt analysis completed");
    let optimized = optimize(&prompt, &findings);
    tracing::info!("prompt optimization completed");

    if json {
        let out = AnalyzeOutput {
            analysis: &findings,
            optimized_prompt: &optimized,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print_findings(&findings, debug);
    print_optimized(&optimized);
    Ok(())
}
