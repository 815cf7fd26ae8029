use similar::{ChangeTag, TextDiff};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Kept,
    Added,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

/// Word-level difference between an original prompt and its rewrite.
#[derive(Debug, Clone)]
pub struct PromptDiff {
    pub segments: Vec<Segment>,
    pub additions: usize,
    pub deletions: usize,
}

impl PromptDiff {
    pub fn is_empty(&self) -> bool {
        self.additions == 0 && self.deletions == 0
    }

    pub fn summary(&self) -> String {
        if self.is_empty() {
            "No changes".to_string()
        } else {
            format!("+{} -{} words", self.additions, self.deletions)
        }
    }
}

pub fn compute_diff(original: &str, optimized: &str) -> PromptDiff {
    let diff = TextDiff::from_words(original, optimized);

    let mut segments: Vec<Segment> = Vec::new();
    let mut additions = 0;
    let mut deletions = 0;

    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Equal => SegmentKind::Kept,
            ChangeTag::Insert => SegmentKind::Added,
            ChangeTag::Delete => SegmentKind::Removed,
        };
        let text = change.value();
        if !text.trim().is_empty() {
            match kind {
                SegmentKind::Added => additions += 1,
                SegmentKind::Removed => deletions += 1,
                SegmentKind::Kept => {}
            }
        }

        // Merge runs of the same kind so output stays readable
        match segments.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(text),
            _ => segments.push(Segment {
                kind,
                text: text.to_string(),
            }),
        }
    }

    PromptDiff {
        segments,
        additions,
        deletions,
    }
}

impl fmt::Display for PromptDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use colored::Colorize;

        for segment in &self.segments {
            match segment.kind {
                SegmentKind::Kept => write!(f, "{}", segment.text)?,
                SegmentKind::Added => write!(f, "{}", segment.text.green())?,
                SegmentKind::Removed => write!(f, "{}", segment.text.red().strikethrough())?,
            }
        }
        writeln!(f)?;
        write!(f, "{}", self.summary().dimmed())
    }
}
