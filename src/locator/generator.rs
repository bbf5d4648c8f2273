use super::role::infer_role;
use crate::dom::ElementDescriptor;
use crate::types::GeneratedLocators;
use regex::Regex;
use std::sync::OnceLock;

fn newline_pattern() -> &'static Regex {
    static NEWLINES: OnceLock<Regex> = OnceLock::new();
    NEWLINES.get_or_init(|| Regex::new(r"\r?\n").expect("newline pattern is valid"))
}

/// Prepares text for embedding in a single-quoted selector literal.
pub fn escape(text: &str) -> String {
    let quoted = text.replace('\'', "\\'");
    newline_pattern()
        .replace_all(&quoted, " ")
        .trim()
        .to_string()
}

/// Builds all three locators for an element. Never fails: every chain ends in
/// a tag based fallback. Blank attributes are treated as absent however the
/// descriptor was built.
pub fn generate_locators(element: &ElementDescriptor) -> GeneratedLocators {
    let element = element.normalized();
    GeneratedLocators {
        playwright: playwright_chain(&element),
        css: css_chain(&element),
        xpath: xpath_chain(&element),
    }
}

/// Explicit `role` attribute, or the role implied by the tag.
pub fn effective_role(element: &ElementDescriptor) -> Option<&str> {
    element
        .role
        .as_deref()
        .filter(|role| !role.trim().is_empty())
        .or_else(|| infer_role(element.tag_name.trim(), element.input_type.as_deref()))
}

pub fn playwright_locator(element: &ElementDescriptor) -> String {
    playwright_chain(&element.normalized())
}

/// CSS chain. Attribute values are used raw, so values containing quotes
/// yield selectors a browser will reject.
pub fn css_locator(element: &ElementDescriptor) -> String {
    css_chain(&element.normalized())
}

pub fn xpath_locator(element: &ElementDescriptor) -> String {
    xpath_chain(&element.normalized())
}

fn playwright_chain(element: &ElementDescriptor) -> String {
    if let Some(test_id) = element.test_id() {
        return format!("page.getByTestId('{}')", escape(test_id));
    }

    if let (Some(role), Some(name)) = (effective_role(element), element.accessible_name()) {
        let name = escape(name);
        if !name.is_empty() {
            return format!("page.getByRole('{}', {{ name: '{}' }})", escape(role), name);
        }
    }

    if element.is_form_control() {
        if let Some(label) = &element.label_text {
            return format!("page.getByLabel('{}')", escape(label));
        }
    }

    if let Some(placeholder) = &element.placeholder {
        return format!("page.getByPlaceholder('{}')", escape(placeholder));
    }

    if let Some(id) = &element.id {
        return format!("page.locator('#{}')", escape(id));
    }

    if let Some(text) = element.text.as_deref().map(escape) {
        if !text.is_empty() {
            return format!("page.getByText('{}')", text);
        }
    }

    tag_with_classes(element)
}

fn css_chain(element: &ElementDescriptor) -> String {
    if let Some(id) = &element.id {
        return format!("#{}", id);
    }
    if let Some(test_id) = element.test_id() {
        return format!("[data-testid=\"{}\"]", test_id);
    }
    // Unreachable while test_id() falls back to data-test-id.
    if let Some(test_id) = &element.data_test_id {
        return format!("[data-test-id=\"{}\"]", test_id);
    }
    if let Some(name) = &element.name {
        return format!("{}[name=\"{}\"]", element.tag_name, name);
    }
    if let Some(placeholder) = &element.placeholder {
        return format!("{}[placeholder=\"{}\"]", element.tag_name, placeholder);
    }
    tag_with_classes(element)
}

fn xpath_chain(element: &ElementDescriptor) -> String {
    let tag = &element.tag_name;

    if let Some(id) = &element.id {
        return format!("//*[@id='{}']", escape(id));
    }
    if let Some(test_id) = element.test_id() {
        return format!("//*[@data-testid='{}']", escape(test_id));
    }
    // Unreachable while test_id() falls back to data-test-id.
    if let Some(test_id) = &element.data_test_id {
        return format!("//*[@data-test-id='{}']", escape(test_id));
    }
    if let Some(text) = element.text.as_deref().map(escape) {
        if !text.is_empty() {
            return format!("//{}[contains(text(), '{}')]", tag, text);
        }
    }
    if let Some(placeholder) = &element.placeholder {
        return format!("//{}[@placeholder='{}']", tag, escape(placeholder));
    }
    if let Some(name) = &element.name {
        return format!("//{}[@name='{}']", tag, escape(name));
    }
    if !element.class_list.is_empty() {
        return format!(
            "//{}[@class='{}']",
            tag,
            escape(&element.class_list.join(" "))
        );
    }

    format!("//{}", tag)
}

fn tag_with_classes(element: &ElementDescriptor) -> String {
    if element.class_list.is_empty() {
        element.tag_name.clone()
    } else {
        format!("{}.{}", element.tag_name, element.class_list.join("."))
    }
}
