use colored::Colorize;

use crate::error::Result;
use crate::llm::registry::{default_model, ModelRegistry};
use crate::prompt::EXEMPLARS;

pub fn cmd_models(registry: &ModelRegistry) -> Result<()> {
    println!("{}", "Available Models".green().bold());
    println!("{}", "=".repeat(50));

    for spec in registry.models() {
        let default_marker = if spec.id == default_model() {
            " (default)"
        } else {
            ""
        };
        println!("  {}{}", spec.id.cyan().bold(), default_marker);
        println!("    Provider:    {}", spec.provider.display_name());
        println!("    Endpoint:    {}", registry.endpoint_override().unwrap_or(spec.endpoint));
        println!("    Max tokens:  {}", spec.max_tokens);
    }

    Ok(())
}

pub fn cmd_examples() -> Result<()> {
    println!("{}", "Example Prompts".green().bold());
    println!("{}", "=".repeat(50));

    for (i, exemplar) in EXEMPLARS.iter().enumerate() {
        println!("{} {}", format!("{}.", i + 1).bold(), exemplar.flawed.red());
        println!("   Issues:   {}", exemplar.issues.join(", ").dimmed());
        println!("   Improved: {}", exemplar.improved.green());
        println!();
    }

    Ok(())
}
