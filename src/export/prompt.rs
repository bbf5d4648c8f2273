//! Prompt templates for turning recordings or page content into tests.
//!
//! Only the request body is built here; sending it to a provider is up to the
//! caller.

use super::text::describe_step;
use crate::core::config::PromptConfig;
use crate::dom::element::truncate_chars;
use crate::types::StepRecord;
use serde::{Deserialize, Serialize};

/// Page text beyond this many characters is cut before prompting.
pub const MAX_PAGE_CONTENT_CHARS: usize = 8000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
    ManualTestCases,
    AutomationScript,
}

impl PromptKind {
    fn instructions(&self) -> &'static str {
        match self {
            PromptKind::ManualTestCases => {
                "Write manual test cases for this flow. For each test case give an ID, a title, \
preconditions, numbered steps and the expected result. Include negative and edge cases \
where the flow suggests them."
            }
            PromptKind::AutomationScript => {
                "Write a Playwright test in TypeScript using @playwright/test. Use the provided \
locators as-is, add an expect() assertion after each meaningful action, and output only \
the code without markdown fences."
            }
        }
    }
}

/// Prompt describing recorded steps with their locators.
pub fn build_prompt(kind: PromptKind, steps: &[StepRecord]) -> String {
    let step_lines: Vec<String> = steps
        .iter()
        .map(|step| {
            format!(
                "{}. {}\n   playwright: {}\n   css: {}\n   xpath: {}",
                step.index,
                describe_step(step),
                step.locators.playwright,
                step.locators.css,
                step.locators.xpath
            )
        })
        .collect();

    format!(
        r#"The following user interactions were recorded in a web browser.

RECORDED STEPS:
{steps}

TASK:
{instructions}"#,
        steps = step_lines.join("\n"),
        instructions = kind.instructions()
    )
}

/// Prompt built from raw page content instead of a recording.
pub fn build_page_prompt(kind: PromptKind, page_text: &str) -> String {
    let content = truncate_chars(page_text.trim(), MAX_PAGE_CONTENT_CHARS);
    format!(
        r#"Below is the visible content of a web page.

PAGE CONTENT:
{content}

TASK:
{instructions}"#,
        content = content,
        instructions = kind.instructions()
    )
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// OpenAI-style chat completion request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

impl ChatCompletionRequest {
    pub fn new(config: &PromptConfig, prompt: impl Into<String>) -> Self {
        Self {
            model: config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: config.system_prompt.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.into(),
                },
            ],
            temperature: config.temperature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestHelper;

    #[test]
    fn test_step_prompt_lists_locators() {
        let prompt = build_prompt(
            PromptKind::AutomationScript,
            &[TestHelper::sample_step(1), TestHelper::sample_step(2)],
        );
        assert!(prompt.contains("1. Click button \"Sign in\""));
        assert!(prompt.contains("   playwright: page.getByTestId('login-submit')"));
        assert!(prompt.contains("2. Click"));
        assert!(prompt.contains("@playwright/test"));
    }

    #[test]
    fn test_page_prompt_truncates_content() {
        let page = "a".repeat(MAX_PAGE_CONTENT_CHARS + 100);
        let prompt = build_page_prompt(PromptKind::ManualTestCases, &page);
        assert!(prompt.contains(&"a".repeat(MAX_PAGE_CONTENT_CHARS)));
        assert!(!prompt.contains(&"a".repeat(MAX_PAGE_CONTENT_CHARS + 1)));
        assert!(prompt.contains("expected result"));
    }

    #[test]
    fn test_request_body_shape() {
        let request = ChatCompletionRequest::new(&PromptConfig::default(), "hello");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "hello");
    }
}
