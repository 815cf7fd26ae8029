use crate::error::{PilotError, Result};
use crate::llm::Completion;

/// Output recorded for a side that never produced anything.
pub const API_FAILURE_PLACEHOLDER: &str = "Failed to generate output due to API error.";

/// Upper bound on iterations per run, to stay within free-tier rate limits.
pub const MAX_ITERATIONS: u32 = 3;

/// Which prompt a test run belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Original,
    Optimized,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::Original => "original",
            Side::Optimized => "optimized",
        }
    }
}

/// Result of testing one side: the text to show/export and whether it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideOutcome {
    pub output: String,
    pub ok: bool,
}

impl Default for SideOutcome {
    fn default() -> Self {
        Self {
            output: API_FAILURE_PLACEHOLDER.to_string(),
            ok: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideBySide {
    pub original: SideOutcome,
    pub optimized: SideOutcome,
}

/// Label each completion with its 1-based iteration number, one per line.
pub fn format_iterations(outputs: &[String]) -> String {
    outputs
        .iter()
        .enumerate()
        .map(|(i, out)| format!("Iteration {}: {}", i + 1, out))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run `prompt` through `client` `iterations` times, sequentially.
/// The first failure aborts the batch.
pub async fn run_iterations<C: Completion>(
    client: &C,
    prompt: &str,
    iterations: u32,
) -> Result<String> {
    if iterations == 0 {
        return Err(PilotError::InvalidIterations(iterations));
    }
    tracing::info!("testing prompt for {} iteration(s)", iterations);

    let mut outputs = Vec::with_capacity(iterations as usize);
    for i in 1..=iterations {
        let response = client.complete(prompt).await.inspect_err(|e| {
            tracing::error!("iteration {} failed: {}", i, e);
        })?;
        outputs.push(response);
    }

    let result = format_iterations(&outputs);
    tracing::debug!("test completed: {}", result);
    Ok(result)
}

/// Test one side, turning a failure into a visible `Error: ...` output.
pub async fn run_side<C: Completion>(
    client: &C,
    side: Side,
    prompt: &str,
    iterations: u32,
) -> SideOutcome {
    match run_iterations(client, prompt, iterations).await {
        Ok(output) => SideOutcome { output, ok: true },
        Err(e) => {
            tracing::error!("Error testing {} prompt: {}", side.label(), e);
            SideOutcome {
                output: format!("Error: {}", e),
                ok: false,
            }
        }
    }
}

/// Test both prompts, original first. A failure on one side never affects the other.
pub async fn compare<C: Completion>(
    client: &C,
    original: &str,
    optimized: &str,
    iterations: u32,
) -> SideBySide {
    SideBySide {
        original: run_side(client, Side::Original, original, iterations).await,
        optimized: run_side(client, Side::Optimized, optimized, iterations).await,
    }
}
