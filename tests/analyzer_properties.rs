//! Behavioural checks for the analyzer and rewriter through the public API.
//!
//! Every combination of the four checks is driven with synthetic prompts, plus the
//! documented end-to-end scenarios.

use promptpilot::prompt::rewriter::{AUDIENCE_CLAUSE, DETAILS_CLAUSE, EXAMPLE_CLAUSE, ROLE_PROMPT};
use promptpilot::prompt::{analyze, optimize, FindingSet, Issue, Suggestion, SuggestionKind};

/// Prompt fragments that satisfy (index 0) or trip (index 1) each check.
const TASK: [&str; 2] = [
    "please write something nice today",
    "please do something nice today",
];
const CONTEXT: [&str; 2] = ["with context", ""];
const SPECIFICITY: [&str; 2] = ["in a calm tone", ""];
const CONSTRAINTS: [&str; 2] = ["like this example", ""];

fn prompt_for(mask: u8) -> String {
    let bit = |i: u8| usize::from(mask & (1 << i) != 0);
    [
        TASK[bit(0)],
        CONTEXT[bit(1)],
        SPECIFICITY[bit(2)],
        CONSTRAINTS[bit(3)],
    ]
    .iter()
    .filter(|part| !part.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(" ")
}

#[test]
fn every_subset_of_checks_scores_by_count() {
    for mask in 0u8..16 {
        let prompt = prompt_for(mask);
        let findings = analyze(&prompt);

        let expected: Vec<Issue> = Issue::all()
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, issue)| *issue)
            .collect();

        assert_eq!(findings.issues, expected, "prompt {:?}", prompt);
        assert_eq!(
            findings.score,
            100u32.saturating_sub(25 * expected.len() as u32),
            "prompt {:?}",
            prompt
        );
        assert_eq!(findings.suggestions.len(), expected.len());
        assert_eq!(findings.reasoning_trace.len(), expected.len());
    }
}

#[test]
fn five_words_with_a_task_keyword_is_never_vague() {
    for prompt in [
        "Write me a short poem",
        "Could you summarize the attached report",
        "GENERATE five ideas for dinner tonight",
        "please explain how tides really work",
        "I want you to rewrite my cover letter",
    ] {
        assert!(!analyze(prompt).has(Issue::VagueTask), "{:?}", prompt);
    }
}

#[test]
fn whole_word_context_always_clears_missing_context() {
    for prompt in [
        "context",
        "Some context: the reader is ten",
        "no task here, just (context) in brackets",
        "CONTEXT!",
    ] {
        assert!(!analyze(prompt).has(Issue::MissingContext), "{:?}", prompt);
    }
}

#[test]
fn analysis_is_deterministic() {
    for prompt in ["", "Write a story", "Summarize this text in a formal tone"] {
        assert_eq!(analyze(prompt), analyze(prompt));
    }
}

#[test]
fn rewrite_never_shortens_unpadded_prompts() {
    for mask in 0u8..16 {
        let prompt = prompt_for(mask);
        let optimized = optimize(&prompt, &analyze(&prompt));
        assert!(optimized.chars().count() >= prompt.chars().count());
    }
}

/// Role framing trims the prompt, so whitespace padding longer than the role
/// sentence is the one way the rewrite comes out shorter.
#[test]
fn rewrite_shrinks_only_heavily_padded_prompts() {
    let prompt = format!("{}hi{}", " ".repeat(150), " ".repeat(150));
    let optimized = optimize(&prompt, &analyze(&prompt));
    assert!(optimized.chars().count() < prompt.chars().count());
    assert_eq!(
        optimized.trim(),
        format!("{} hi.{}{}{}", ROLE_PROMPT, AUDIENCE_CLAUSE, DETAILS_CLAUSE, EXAMPLE_CLAUSE)
    );

    let light = format!("{}hi{}", " ".repeat(20), " ".repeat(20));
    let optimized = optimize(&light, &analyze(&light));
    assert!(optimized.chars().count() >= light.chars().count());
}

#[test]
fn bare_write_a_story_trips_everything() {
    let findings = analyze("Write a story");
    assert_eq!(
        findings.issues,
        vec![
            Issue::VagueTask,
            Issue::MissingContext,
            Issue::LacksSpecificity,
            Issue::NoExamples
        ]
    );
    assert_eq!(findings.score, 0);
}

#[test]
fn well_formed_prompt_passes_untouched() {
    let prompt = "Write a 600 word story with context about a dragon, in a formal tone, for example include a battle scene";
    let findings = analyze(prompt);
    assert!(findings.issues.is_empty());
    assert_eq!(findings.score, 100);
    assert_eq!(optimize(prompt, &findings), prompt);
}

#[test]
fn task_framing_and_example_clause_bracket_the_rewrite() {
    let findings = FindingSet {
        issues: vec![Issue::VagueTask, Issue::NoExamples],
        suggestions: vec![
            Suggestion {
                kind: SuggestionKind::SpecifyTask,
                text: "Specify the task explicitly (e.g., 'write', 'summarize').".into(),
            },
            Suggestion {
                kind: SuggestionKind::AddExamples,
                text: "Add examples or constraints to guide the model.".into(),
            },
        ],
        score: 50,
        reasoning_trace: Vec::new(),
    };
    let optimized = optimize("Tell me about owls", &findings);
    assert!(optimized.starts_with(ROLE_PROMPT));
    assert!(optimized.ends_with(EXAMPLE_CLAUSE));
    assert!(optimized.contains("Tell me about owls."));
}
