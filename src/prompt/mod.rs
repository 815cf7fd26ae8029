pub mod analyzer;
pub mod exemplars;
pub mod rewriter;

pub use analyzer::{analyze, Analyzer, FindingSet, Issue, Suggestion, SuggestionKind};
pub use exemplars::{Exemplar, EXEMPLARS};
pub use rewriter::{optimize, optimize_with};
