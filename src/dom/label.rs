use scraper::{ElementRef, Html, Selector};

/// Text of the `<label>` associated with `element`.
///
/// A `<label for="...">` matching the element id wins; otherwise the nearest
/// enclosing `<label>` is used. Blank label text counts as no label.
pub fn label_text(document: &Html, element: &ElementRef) -> Option<String> {
    if let Some(id) = element.value().attr("id").filter(|id| !id.is_empty()) {
        if let Ok(selector) = Selector::parse("label[for]") {
            let for_label = document
                .select(&selector)
                .find(|label| label.value().attr("for") == Some(id));
            if let Some(label) = for_label {
                return element_text(&label);
            }
        }
    }

    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().name() == "label")
        .and_then(|label| element_text(&label))
}

fn element_text(element: &ElementRef) -> Option<String> {
    let text = element.text().collect::<String>();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first<'a>(document: &'a Html, css: &str) -> ElementRef<'a> {
        let selector = Selector::parse(css).unwrap();
        document.select(&selector).next().unwrap()
    }

    #[test]
    fn test_label_for_id() {
        let document = Html::parse_document(
            r#"<label for="email"> Email address </label><input id="email">"#,
        );
        let input = first(&document, "#email");
        assert_eq!(label_text(&document, &input).as_deref(), Some("Email address"));
    }

    #[test]
    fn test_enclosing_label() {
        let document =
            Html::parse_document(r#"<label>Remember me <input type="checkbox"></label>"#);
        let input = first(&document, "input");
        assert_eq!(label_text(&document, &input).as_deref(), Some("Remember me"));
    }

    #[test]
    fn test_id_without_for_label_falls_back_to_ancestor() {
        let document = Html::parse_document(r#"<label>Nickname <input id="nick"></label>"#);
        let input = first(&document, "#nick");
        assert_eq!(label_text(&document, &input).as_deref(), Some("Nickname"));
    }

    #[test]
    fn test_no_label() {
        let document = Html::parse_document(r#"<div><input name="q"></div>"#);
        let input = first(&document, "input");
        assert_eq!(label_text(&document, &input), None);
    }
}
