use crate::core::config::CaptureConfig;
use crate::dom::element::DEFAULT_MAX_TEXT_LENGTH;
use crate::dom::label::label_text;
use crate::dom::{ElementDescriptor, LocatedElement, PageState};
use crate::errors::{RecorderError, Result};
use crate::locator::generate_locators;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;
use tracing::debug;

/// Elements a user can plausibly interact with, as one selector group so that
/// matches come back once each and in document order.
const INTERACTIVE_SELECTOR: &str = "a, button, input, select, textarea, summary, \
     [role], [onclick], [tabindex], [data-testid], [data-test-id], [contenteditable='true']";

/// Parsed HTML page from which element descriptors are captured.
pub struct PageSnapshot {
    document: Html,
    max_text_length: usize,
}

impl PageSnapshot {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
        }
    }

    pub fn parse_with_config(html: &str, config: &CaptureConfig) -> Self {
        Self {
            document: Html::parse_document(html),
            max_text_length: config.max_text_length,
        }
    }

    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.document
            .select(&selector)
            .next()
            .map(|title| normalize_text(&title.text().collect::<String>()))
            .filter(|title| !title.is_empty())
    }

    /// Descriptor for the first element matching `css_selector`.
    pub fn capture(&self, css_selector: &str) -> Result<ElementDescriptor> {
        let selector = parse_selector(css_selector)?;
        let element = self
            .document
            .select(&selector)
            .next()
            .ok_or_else(|| RecorderError::ElementNotFound(css_selector.to_string()))?;

        let descriptor = self.describe(&element);
        debug!(
            selector = css_selector,
            tag = %descriptor.tag_name,
            "captured element"
        );
        Ok(descriptor)
    }

    pub fn capture_all(&self, css_selector: &str) -> Result<Vec<ElementDescriptor>> {
        let selector = parse_selector(css_selector)?;
        Ok(self
            .document
            .select(&selector)
            .map(|element| self.describe(&element))
            .collect())
    }

    /// Every interactive element on the page with its generated locators.
    pub fn scan(&self) -> Result<PageState> {
        let selector = parse_selector(INTERACTIVE_SELECTOR)?;
        let mut state = PageState::new(self.title());

        for element in self.document.select(&selector) {
            if is_hidden_input(&element) {
                continue;
            }
            let descriptor = self.describe(&element);
            let locators = generate_locators(&descriptor);
            state.add_element(LocatedElement {
                descriptor,
                locators,
            });
        }

        debug!(count = state.elements.len(), "scanned interactive elements");
        Ok(state)
    }

    /// Converts a live element into a descriptor, resolving its label.
    pub fn describe(&self, element: &ElementRef) -> ElementDescriptor {
        let el = element.value();
        let attr = |name: &str| el.attr(name).unwrap_or_default();

        let text = normalize_text(&element.text().collect::<String>());
        let mut descriptor = ElementDescriptor::new(el.name())
            .with_id(attr("id"))
            .with_name(attr("name"))
            .with_class_attr(attr("class"))
            .with_placeholder(attr("placeholder"))
            .with_title(attr("title"))
            .with_value(attr("value"))
            .with_role(attr("role"))
            .with_aria_label(attr("aria-label"))
            .with_data_testid(attr("data-testid"))
            .with_data_test_id(attr("data-test-id"))
            .with_text_limited(&text, self.max_text_length);

        if descriptor.tag_name == "input" {
            descriptor = descriptor.with_input_type(attr("type"));
        }
        if let Some(label) = label_text(&self.document, element) {
            descriptor = descriptor.with_label_text(label);
        }

        descriptor
    }
}

fn parse_selector(css_selector: &str) -> Result<Selector> {
    Selector::parse(css_selector)
        .map_err(|e| RecorderError::InvalidSelector(format!("{}: {:?}", css_selector, e)))
}

fn is_hidden_input(element: &ElementRef) -> bool {
    let el = element.value();
    el.name() == "input"
        && el
            .attr("type")
            .map(|t| t.eq_ignore_ascii_case("hidden"))
            .unwrap_or(false)
}

fn whitespace_pattern() -> &'static Regex {
    static SPACES: OnceLock<Regex> = OnceLock::new();
    SPACES.get_or_init(|| Regex::new(r"[^\S\n]+").expect("whitespace pattern is valid"))
}

fn line_break_pattern() -> &'static Regex {
    static BREAKS: OnceLock<Regex> = OnceLock::new();
    BREAKS.get_or_init(|| Regex::new(r" ?\n[\s]*").expect("line break pattern is valid"))
}

/// Approximates rendered text: runs of spaces collapse, line breaks survive
/// once.
fn normalize_text(raw: &str) -> String {
    let spaced = whitespace_pattern().replace_all(raw, " ");
    line_break_pattern()
        .replace_all(&spaced, "\n")
        .trim()
        .to_string()
}
