use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::Result;
use crate::prompt::FindingSet;
use crate::runner::SideBySide;

/// Exportable record of one analyze-optimize-test run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ResultBundle {
    pub timestamp: String,
    pub original_prompt: String,
    pub analysis: FindingSet,
    pub optimized_prompt: String,
    pub original_output: String,
    pub optimized_output: String,
}

impl ResultBundle {
    pub fn new(
        at: DateTime<Local>,
        original_prompt: &str,
        analysis: &FindingSet,
        optimized_prompt: &str,
        outputs: &SideBySide,
    ) -> Self {
        Self {
            timestamp: at.to_rfc3339(),
            original_prompt: original_prompt.to_string(),
            analysis: analysis.clone(),
            optimized_prompt: optimized_prompt.to_string(),
            original_output: outputs.original.output.clone(),
            optimized_output: outputs.optimized.output.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// `promptpilot_results_YYYYmmdd_HHMMSS.json`
pub fn default_file_name(at: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!(
        "promptpilot_results_{}.json",
        at.format("%Y%m%d_%H%M%S")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{analyze, optimize};
    use crate::runner::SideOutcome;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 9, 14, 5, 7).unwrap()
    }

    fn bundle() -> ResultBundle {
        let prompt = "Write a story";
        let findings = analyze(prompt);
        let optimized = optimize(prompt, &findings);
        let outputs = SideBySide {
            original: SideOutcome {
                output: "Iteration 1: A dragon slept.".into(),
                ok: true,
            },
            optimized: SideOutcome::default(),
        };
        ResultBundle::new(fixed_time(), prompt, &findings, &optimized, &outputs)
    }

    #[test]
    fn file_name_uses_compact_timestamp() {
        assert_eq!(
            default_file_name(fixed_time()),
            PathBuf::from("promptpilot_results_20250309_140507.json")
        );
    }

    #[test]
    fn json_has_the_exported_keys() {
        let value: serde_json::Value = serde_json::from_str(&bundle().to_json().unwrap()).unwrap();
        for key in [
            "timestamp",
            "original_prompt",
            "analysis",
            "optimized_prompt",
            "original_output",
            "optimized_output",
        ] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(value["analysis"]["score"], 0);
        assert_eq!(value["optimized_output"], crate::runner::API_FAILURE_PLACEHOLDER);
        assert!(value["timestamp"].as_str().unwrap().starts_with("2025-03-09T14:05:07"));
    }

    #[test]
    fn save_creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("runs").join("out.json");
        bundle().save(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"original_prompt\": \"Write a story\""));
    }
}
