use crate::core::config::ScriptConfig;
use crate::locator::escape;
use crate::types::{EventKind, StepRecord};

/// A `@playwright/test` TypeScript test replaying recorded steps.
#[derive(Debug, Clone)]
pub struct PlaywrightScript {
    test_name: String,
    base_url: Option<String>,
    statements: Vec<String>,
}

impl PlaywrightScript {
    pub fn from_steps(steps: &[StepRecord], config: &ScriptConfig) -> Self {
        Self {
            test_name: config.test_name.clone(),
            base_url: config.base_url.clone(),
            statements: steps.iter().map(statement_for).collect(),
        }
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("import { test, expect } from '@playwright/test';\n\n");
        out.push_str(&format!(
            "test('{}', async ({{ page }}) => {{\n",
            escape(&self.test_name)
        ));
        if let Some(url) = &self.base_url {
            out.push_str(&format!("  await page.goto('{}');\n", escape(url)));
        }
        for statement in &self.statements {
            out.push_str("  ");
            out.push_str(statement);
            out.push('\n');
        }
        out.push_str("});\n");
        out
    }
}

/// Playwright locator expression for a step. Tag fallbacks are plain CSS and
/// get wrapped in `page.locator`.
fn locator_expression(step: &StepRecord) -> String {
    if step.locators.playwright.starts_with("page.") {
        step.locators.playwright.clone()
    } else {
        format!("page.locator('{}')", escape(&step.locators.css))
    }
}

fn statement_for(step: &StepRecord) -> String {
    let locator = locator_expression(step);
    let value = step.value.as_deref().map(escape);

    match (step.event, value) {
        (EventKind::Click, _) => format!("await {}.click();", locator),
        (EventKind::Change, _) if step.is_toggle() => format!("await {}.check();", locator),
        (EventKind::Input, value) => {
            format!("await {}.fill('{}');", locator, value.unwrap_or_default())
        }
        (EventKind::Change, Some(value)) if step.tag_name == "select" => {
            format!("await {}.selectOption('{}');", locator, value)
        }
        (EventKind::Change, Some(value)) => format!("await {}.fill('{}');", locator, value),
        (EventKind::Change, None) => format!("await {}.check();", locator),
    }
}
