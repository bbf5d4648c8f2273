use crate::dom::ElementDescriptor;
use crate::types::GeneratedLocators;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocatedElement {
    pub descriptor: ElementDescriptor,
    pub locators: GeneratedLocators,
}

/// Interactive elements found on a page, in document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageState {
    pub title: Option<String>,
    pub elements: Vec<LocatedElement>,
}

impl PageState {
    pub fn new(title: Option<String>) -> Self {
        Self {
            title,
            elements: Vec::new(),
        }
    }

    pub fn add_element(&mut self, element: LocatedElement) {
        self.elements.push(element);
    }

    pub fn find_by_tag(&self, tag_name: &str) -> Vec<&LocatedElement> {
        self.elements
            .iter()
            .filter(|e| e.descriptor.tag_name == tag_name)
            .collect()
    }

    /// Case-insensitive match against visible text and `aria-label`.
    pub fn find_by_text(&self, text: &str) -> Vec<&LocatedElement> {
        let needle = text.to_lowercase();
        self.elements
            .iter()
            .filter(|e| {
                e.descriptor
                    .text
                    .iter()
                    .chain(e.descriptor.aria_label.iter())
                    .any(|t| t.to_lowercase().contains(&needle))
            })
            .collect()
    }
}
