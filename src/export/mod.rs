//! Turning recorded steps into files: tables, scripts and LLM prompts.

pub mod prompt;
pub mod script;
pub mod text;

use crate::core::Config;
use crate::errors::{RecorderError, Result};
use crate::types::StepRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use prompt::{build_page_prompt, build_prompt, ChatCompletionRequest, ChatMessage, PromptKind};
pub use script::PlaywrightScript;
pub use text::{describe_step, to_csv, to_json, to_txt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Txt,
    Json,
    Script,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Txt => "txt",
            ExportFormat::Json => "json",
            ExportFormat::Script => "spec.ts",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Txt => "txt",
            ExportFormat::Json => "json",
            ExportFormat::Script => "script",
        };
        f.write_str(name)
    }
}

impl FromStr for ExportFormat {
    type Err = RecorderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "txt" | "text" => Ok(ExportFormat::Txt),
            "json" => Ok(ExportFormat::Json),
            "script" | "playwright" => Ok(ExportFormat::Script),
            other => Err(RecorderError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Renders steps in the requested format.
pub fn export(steps: &[StepRecord], format: ExportFormat, config: &Config) -> Result<String> {
    match format {
        ExportFormat::Csv => to_csv(steps),
        ExportFormat::Txt => Ok(to_txt(steps)),
        ExportFormat::Json => to_json(steps),
        ExportFormat::Script => Ok(PlaywrightScript::from_steps(steps, &config.script).render()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestHelper;

    #[test]
    fn test_format_parse() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("playwright".parse::<ExportFormat>().unwrap(), ExportFormat::Script);
        assert!(matches!(
            "xlsx".parse::<ExportFormat>(),
            Err(RecorderError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_export_dispatch() {
        let steps = vec![TestHelper::sample_step(1)];
        let config = Config::default();

        let csv = export(&steps, ExportFormat::Csv, &config).unwrap();
        assert!(csv.starts_with("step,event,tag"));

        let script = export(&steps, ExportFormat::Script, &config).unwrap();
        assert!(script.contains("@playwright/test"));

        let json = export(&steps, ExportFormat::Json, &config).unwrap();
        let parsed: Vec<StepRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, steps);
    }
}
