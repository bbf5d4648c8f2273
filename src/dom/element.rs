use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_TEXT_LENGTH: usize = 50;

/// Tag used when none is known, so tag based fallbacks are never empty.
const ANY_TAG: &str = "*";

/// Read-only snapshot of a DOM element at the moment of an interaction.
///
/// Only `tag_name` is required. The `with_*` builders store empty attribute
/// values as `None`; descriptors built any other way (struct literal, serde)
/// go through [`ElementDescriptor::normalized`] before locators are generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementDescriptor {
    pub tag_name: String,
    pub input_type: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub class_list: Vec<String>,
    pub placeholder: Option<String>,
    pub title: Option<String>,
    pub value: Option<String>,
    pub role: Option<String>,
    pub aria_label: Option<String>,
    /// `data-testid` attribute.
    pub data_testid: Option<String>,
    /// `data-test-id` attribute.
    pub data_test_id: Option<String>,
    pub text: Option<String>,
    pub label_text: Option<String>,
}

impl Default for ElementDescriptor {
    fn default() -> Self {
        Self {
            tag_name: ANY_TAG.to_string(),
            input_type: None,
            id: None,
            name: None,
            class_list: Vec::new(),
            placeholder: None,
            title: None,
            value: None,
            role: None,
            aria_label: None,
            data_testid: None,
            data_test_id: None,
            text: None,
            label_text: None,
        }
    }
}

impl ElementDescriptor {
    pub fn new(tag_name: impl AsRef<str>) -> Self {
        Self {
            tag_name: normalize_tag(tag_name.as_ref()),
            ..Default::default()
        }
    }

    /// Copy with the builder rules applied: lowercase non-empty tag, blank
    /// attributes dropped, class tokens split, text and label trimmed.
    pub fn normalized(&self) -> Self {
        let keep = |value: &Option<String>| value.clone().and_then(non_empty);
        let trimmed = |value: &Option<String>| {
            value
                .as_deref()
                .and_then(|v| non_empty(v.trim().to_string()))
        };

        Self {
            tag_name: normalize_tag(&self.tag_name),
            input_type: keep(&self.input_type).map(|t| t.to_ascii_lowercase()),
            id: keep(&self.id),
            name: keep(&self.name),
            class_list: self
                .class_list
                .iter()
                .flat_map(|c| c.split_whitespace())
                .map(str::to_string)
                .collect(),
            placeholder: keep(&self.placeholder),
            title: keep(&self.title),
            value: keep(&self.value),
            role: keep(&self.role),
            aria_label: keep(&self.aria_label),
            data_testid: keep(&self.data_testid),
            data_test_id: keep(&self.data_test_id),
            text: trimmed(&self.text),
            label_text: trimmed(&self.label_text),
        }
    }

    pub fn with_input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = non_empty(input_type.into()).map(|t| t.to_ascii_lowercase());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = non_empty(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = non_empty(name.into());
        self
    }

    /// Sets the class list from a `class` attribute value, keeping token order.
    pub fn with_class_attr(mut self, class: &str) -> Self {
        self.class_list = class.split_whitespace().map(str::to_string).collect();
        self
    }

    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class_list = classes
            .into_iter()
            .filter_map(|c| non_empty(c.into()))
            .collect();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = non_empty(placeholder.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = non_empty(title.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = non_empty(value.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = non_empty(role.into());
        self
    }

    pub fn with_aria_label(mut self, aria_label: impl Into<String>) -> Self {
        self.aria_label = non_empty(aria_label.into());
        self
    }

    pub fn with_data_testid(mut self, test_id: impl Into<String>) -> Self {
        self.data_testid = non_empty(test_id.into());
        self
    }

    pub fn with_data_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.data_test_id = non_empty(test_id.into());
        self
    }

    /// Sets visible text, trimmed and cut to the default maximum length.
    pub fn with_text(self, text: impl AsRef<str>) -> Self {
        self.with_text_limited(text, DEFAULT_MAX_TEXT_LENGTH)
    }

    pub fn with_text_limited(mut self, text: impl AsRef<str>, max_chars: usize) -> Self {
        self.text = non_empty(truncate_chars(text.as_ref().trim(), max_chars));
        self
    }

    pub fn with_label_text(mut self, label: impl AsRef<str>) -> Self {
        self.label_text = non_empty(label.as_ref().trim().to_string());
        self
    }

    /// Test id from `data-testid`, falling back to `data-test-id`.
    pub fn test_id(&self) -> Option<&str> {
        self.data_testid
            .as_deref()
            .or(self.data_test_id.as_deref())
    }

    pub fn is_form_control(&self) -> bool {
        matches!(self.tag_name.as_str(), "input" | "textarea" | "select")
    }

    /// `aria-label`, then associated label text, then visible text.
    pub fn accessible_name(&self) -> Option<&str> {
        self.aria_label
            .as_deref()
            .or(self.label_text.as_deref())
            .or(self.text.as_deref())
    }
}

fn normalize_tag(tag_name: &str) -> String {
    let tag_name = tag_name.trim().to_ascii_lowercase();
    if tag_name.is_empty() {
        ANY_TAG.to_string()
    } else {
        tag_name
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
