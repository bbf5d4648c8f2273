use crate::dom::element::DEFAULT_MAX_TEXT_LENGTH;
use crate::errors::{RecorderError, Result};
use crate::export::ExportFormat;
use crate::types::EventKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub capture: CaptureConfig,
    pub export: ExportConfig,
    pub script: ScriptConfig,
    pub prompt: PromptConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    pub max_text_length: usize,
    pub tracked_events: Vec<EventKind>,
    pub coalesce_input: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub format: ExportFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    pub test_name: String,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub model: String,
    pub temperature: f32,
    pub system_prompt: String,
}

impl Config {
    /// Loads a JSON config file. Missing sections take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.capture.max_text_length == 0 {
            return Err(RecorderError::ConfigurationError(
                "capture.max_text_length must be greater than zero".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.prompt.temperature) {
            return Err(RecorderError::ConfigurationError(format!(
                "prompt.temperature must be within 0..=2, got {}",
                self.prompt.temperature
            )));
        }

        if let Some(base_url) = &self.script.base_url {
            url::Url::parse(base_url).map_err(|e| {
                RecorderError::ConfigurationError(format!(
                    "script.base_url '{}' is not a valid URL: {}",
                    base_url, e
                ))
            })?;
        }

        Ok(())
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
            tracked_events: vec![EventKind::Click, EventKind::Input, EventKind::Change],
            coalesce_input: true,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
        }
    }
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            test_name: "recorded flow".to_string(),
            base_url: None,
        }
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.2,
            system_prompt: "You are a senior QA engineer who writes precise, reproducible tests."
                .to_string(),
        }
    }
}
