use std::sync::OnceLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use super::exemplars::{self, Exemplar, EXEMPLARS};

/// Verbs that mark a prompt as asking for a concrete task. Matched as substrings.
pub const TASK_KEYWORDS: &[&str] = &["write", "summarize", "generate", "explain"];
/// Prompts with fewer whitespace-separated words than this are considered vague.
pub const MIN_TASK_WORDS: usize = 5;
/// Points deducted per detected issue.
pub const ISSUE_PENALTY: u32 = 25;

/// A structural defect detected in a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Issue {
    #[serde(rename = "Vague or unclear task")]
    VagueTask,
    #[serde(rename = "Missing context")]
    MissingContext,
    #[serde(rename = "Lacks specificity")]
    LacksSpecificity,
    #[serde(rename = "No examples or constraints")]
    NoExamples,
}

impl Issue {
    /// Detection order.
    pub fn all() -> &'static [Issue] {
        &[
            Issue::VagueTask,
            Issue::MissingContext,
            Issue::LacksSpecificity,
            Issue::NoExamples,
        ]
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Issue::VagueTask => "Vague or unclear task",
            Issue::MissingContext => "Missing context",
            Issue::LacksSpecificity => "Lacks specificity",
            Issue::NoExamples => "No examples or constraints",
        }
    }

    pub fn suggestion(&self) -> &'static str {
        match self {
            Issue::VagueTask => "Specify the task explicitly (e.g., 'write', 'summarize').",
            Issue::MissingContext => "Provide context such as audience, purpose, or background.",
            Issue::LacksSpecificity => "Include details like word count, tone, or format.",
            Issue::NoExamples => "Add examples or constraints to guide the model.",
        }
    }

    pub fn reasoning(&self) -> &'static str {
        match self {
            Issue::VagueTask => "Prompt is too vague or lacks a clear task.",
            Issue::MissingContext => "Prompt lacks context or background information.",
            Issue::LacksSpecificity => "Prompt lacks specific requirements like length or style.",
            Issue::NoExamples => "Prompt could benefit from examples or constraints.",
        }
    }

    fn kind(&self) -> SuggestionKind {
        match self {
            Issue::VagueTask => SuggestionKind::SpecifyTask,
            Issue::MissingContext => SuggestionKind::ProvideContext,
            Issue::LacksSpecificity => SuggestionKind::IncludeDetails,
            Issue::NoExamples => SuggestionKind::AddExamples,
        }
    }

    /// Whether this check fires for an already lower-cased prompt.
    fn detect(&self, lowered: &str) -> bool {
        match self {
            // Either condition alone is enough.
            Issue::VagueTask => {
                lowered.split_whitespace().count() < MIN_TASK_WORDS
                    || !TASK_KEYWORDS.iter().any(|k| lowered.contains(k))
            }
            Issue::MissingContext => !context_re().is_match(lowered),
            Issue::LacksSpecificity => !specificity_re().is_match(lowered),
            Issue::NoExamples => !constraint_re().is_match(lowered),
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

fn context_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(context|background|setting)\b").expect("static regex"))
}

fn specificity_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(length|word count|style|tone|format)\b").expect("static regex")
    })
}

fn constraint_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(example|sample|constraint|limit)\b").expect("static regex")
    })
}

/// What a suggestion asks the rewriter to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionKind {
    SpecifyTask,
    ProvideContext,
    IncludeDetails,
    AddExamples,
    /// Index into the exemplar table the findings were produced with.
    ModelAfter(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub text: String,
}

// Exported results carry the human-readable text only.
impl Serialize for Suggestion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// Everything the analyzer found out about one prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindingSet {
    pub issues: Vec<Issue>,
    pub suggestions: Vec<Suggestion>,
    pub score: u32,
    #[serde(rename = "reasoning_steps")]
    pub reasoning_trace: Vec<String>,
}

impl FindingSet {
    pub fn has(&self, issue: Issue) -> bool {
        self.issues.contains(&issue)
    }
}

/// Score for a given number of issues: 100 minus the penalty per issue, floored at 0.
pub fn score_for(issue_count: usize) -> u32 {
    let penalty = ISSUE_PENALTY.saturating_mul(u32::try_from(issue_count).unwrap_or(u32::MAX));
    100u32.saturating_sub(penalty)
}

/// Rule-based prompt analyzer over a read-only exemplar table.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'a> {
    exemplars: &'a [Exemplar],
}

impl Default for Analyzer<'static> {
    fn default() -> Self {
        Self {
            exemplars: EXEMPLARS,
        }
    }
}

impl<'a> Analyzer<'a> {
    pub fn with_exemplars(exemplars: &'a [Exemplar]) -> Self {
        Self { exemplars }
    }

    /// Run the four checks, then exemplar matching. Never fails; an empty prompt
    /// trips every check.
    pub fn analyze(&self, prompt: &str) -> FindingSet {
        let lowered = prompt.to_lowercase();

        let mut issues = Vec::new();
        let mut suggestions = Vec::new();
        let mut reasoning_trace = Vec::new();

        for issue in Issue::all() {
            if issue.detect(&lowered) {
                reasoning_trace.push(issue.reasoning().to_string());
                issues.push(*issue);
                suggestions.push(Suggestion {
                    kind: issue.kind(),
                    text: issue.suggestion().to_string(),
                });
            }
        }

        for (index, exemplar) in exemplars::matching(self.exemplars, &issues) {
            reasoning_trace.push(format!(
                "Similar to bad prompt: '{}'. Suggest: '{}'",
                exemplar.flawed, exemplar.improved
            ));
            suggestions.push(Suggestion {
                kind: SuggestionKind::ModelAfter(index),
                text: format!("Model after: '{}'", exemplar.improved),
            });
        }

        let score = score_for(issues.len());

        FindingSet {
            issues,
            suggestions,
            score,
            reasoning_trace,
        }
    }
}

/// Analyze `prompt` against the built-in exemplar table.
pub fn analyze(prompt: &str) -> FindingSet {
    Analyzer::default().analyze(prompt)
}
