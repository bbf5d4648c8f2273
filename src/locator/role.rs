//! Implicit ARIA role lookup for common HTML elements.

/// Role implied by a tag name, and for `input` by its `type` attribute.
///
/// `input` elements with an unknown or missing type are treated as text boxes.
pub fn infer_role(tag_name: &str, input_type: Option<&str>) -> Option<&'static str> {
    match tag_name {
        "button" => Some("button"),
        "a" => Some("link"),
        "img" => Some("img"),
        "select" => Some("combobox"),
        "textarea" => Some("textbox"),
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Some("heading"),
        "input" => Some(input_role(input_type.unwrap_or("text"))),
        _ => None,
    }
}

fn input_role(input_type: &str) -> &'static str {
    match input_type {
        "button" | "submit" => "button",
        "checkbox" => "checkbox",
        "radio" => "radio",
        "search" => "searchbox",
        "number" => "spinbutton",
        // text, email, password and anything unmapped
        _ => "textbox",
    }
}
