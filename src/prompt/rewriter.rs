use super::analyzer::{FindingSet, SuggestionKind};
use super::exemplars::{self, Exemplar, EXEMPLARS};

/// Role framing prepended when the task itself is unclear.
pub const ROLE_PROMPT: &str = "You are an expert AI prompt engineer tasked with improving prompts for clarity, specificity, and effectiveness.";
pub const AUDIENCE_CLAUSE: &str = " For a general audience, assuming no prior knowledge.";
pub const DETAILS_CLAUSE: &str = " Aim for 200-500 words in a clear, professional tone.";
pub const EXAMPLE_CLAUSE: &str = " For example, include key details like [example detail].";

/// Apply the transformations implied by `findings` to `prompt`.
///
/// Suggestions are applied in order against the running text, so the result is
/// cumulative. Afterwards every exemplar overlapping `findings.issues` contributes a
/// `(Similar to: ...)` tail. `table` must be the one the findings came from.
pub fn optimize_with(prompt: &str, findings: &FindingSet, table: &[Exemplar]) -> String {
    let mut optimized = prompt.to_string();

    for suggestion in &findings.suggestions {
        match suggestion.kind {
            SuggestionKind::SpecifyTask => {
                optimized = format!("{} {}.", ROLE_PROMPT, optimized.trim());
            }
            SuggestionKind::ProvideContext => optimized.push_str(AUDIENCE_CLAUSE),
            SuggestionKind::IncludeDetails => optimized.push_str(DETAILS_CLAUSE),
            SuggestionKind::AddExamples => optimized.push_str(EXAMPLE_CLAUSE),
            // Exemplars are folded in below, once per match.
            SuggestionKind::ModelAfter(_) => {}
        }
    }

    for (_, exemplar) in exemplars::matching(table, &findings.issues) {
        optimized.push_str(&format!(" (Similar to: {})", exemplar.improved));
    }

    optimized
}

/// Rewrite `prompt` using the built-in exemplar table.
pub fn optimize(prompt: &str, findings: &FindingSet) -> String {
    optimize_with(prompt, findings, EXEMPLARS)
}
