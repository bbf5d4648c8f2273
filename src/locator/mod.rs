//! Locator generation for recorded elements.
//!
//! Each element gets three independent locators: a Playwright call expression
//! (test id, role, label, placeholder, id, text), a CSS selector and an XPath
//! expression. CSS and XPath check `id` first, Playwright checks the test id
//! first.

pub mod generator;
pub mod role;

pub use generator::{
    css_locator, effective_role, escape, generate_locators, playwright_locator, xpath_locator,
};
pub use role::infer_role;
