use crate::errors::{RecorderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Locators generated for one element, each computed by its own priority chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedLocators {
    pub playwright: String,
    pub css: String,
    pub xpath: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Click,
    Input,
    Change,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Input => "input",
            EventKind::Change => "change",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = RecorderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "click" => Ok(EventKind::Click),
            "input" => Ok(EventKind::Input),
            "change" => Ok(EventKind::Change),
            other => Err(RecorderError::UnsupportedEvent(other.to_string())),
        }
    }
}

/// One captured user interaction, as forwarded over the step channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRecord {
    pub index: usize,
    pub event: EventKind,
    pub locators: GeneratedLocators,
    pub value: Option<String>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub tag_name: String,
    /// `type` attribute when the element is an `<input>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    pub text: Option<String>,
}

impl StepRecord {
    /// Checkbox or radio input, toggled rather than filled.
    pub fn is_toggle(&self) -> bool {
        self.tag_name == "input" && matches!(self.input_type.as_deref(), Some("checkbox" | "radio"))
    }
}
