use super::analyzer::Issue;

/// A hand-written flawed prompt, the issue labels it was annotated with, and its
/// improved counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exemplar {
    pub flawed: &'static str,
    pub issues: &'static [&'static str],
    pub improved: &'static str,
}

/// Built-in few-shot table, in match order.
///
/// The labels are free text written alongside each example. An exemplar only
/// participates when one of its labels is exactly the tag of a detected issue.
pub const EXEMPLARS: &[Exemplar] = &[
    Exemplar {
        flawed: "Write a story",
        issues: &["Vague task", "Lacks context", "No specificity"],
        improved: "Write a 500-word fantasy story about a young mage discovering their powers in a medieval village, including vivid descriptions of the setting and a key conflict.",
    },
    Exemplar {
        flawed: "Summarize this text",
        issues: &[
            "Missing text input",
            "Unclear length or style",
            "No audience specified",
        ],
        improved: "Summarize the following 1000-word article into 200 words, focusing on key points for a general audience: [text].",
    },
];

impl Exemplar {
    /// True when any of this exemplar's labels names one of `issues`.
    pub fn matches(&self, issues: &[Issue]) -> bool {
        self.issues
            .iter()
            .any(|label| issues.iter().any(|issue| issue.tag() == *label))
    }
}

/// Exemplars from `table` that overlap `issues`, with their table index, in table order.
pub fn matching<'a>(
    table: &'a [Exemplar],
    issues: &'a [Issue],
) -> impl Iterator<Item = (usize, &'a Exemplar)> + 'a {
    table
        .iter()
        .enumerate()
        .filter(move |(_, exemplar)| exemplar.matches(issues))
}
