use crate::dom::{LocatedElement, PageState};
use crate::types::{EventKind, GeneratedLocators, StepRecord};

pub struct TestHelper;

impl TestHelper {
    /// Small login form: labelled inputs, a hidden token, a test-id button and
    /// a plain link.
    pub fn login_page() -> &'static str {
        r#"<!DOCTYPE html>
<html>
  <head><title>Sign in</title></head>
  <body>
    <form id="login" class="auth-form">
      <input type="hidden" name="csrf" value="token">
      <label for="email">Email</label>
      <input id="email" name="email" type="email" placeholder="you@example.com">
      <label>Password <input name="password" type="password"></label>
      <label><input type="checkbox" name="remember"> Remember me</label>
      <button type="submit" data-testid="login-submit" class="btn primary">Sign in</button>
    </form>
    <a href="/reset" class="link muted">Forgot password?</a>
    <div class="card active"></div>
  </body>
</html>"#
    }

    /// A click on the login page submit button.
    pub fn sample_step(index: usize) -> StepRecord {
        StepRecord {
            index,
            event: EventKind::Click,
            locators: GeneratedLocators {
                playwright: "page.getByTestId('login-submit')".to_string(),
                css: "[data-testid=\"login-submit\"]".to_string(),
                xpath: "//*[@data-testid='login-submit']".to_string(),
            },
            value: None,
            timestamp: 1_700_000_000_000 + index as i64,
            tag_name: "button".to_string(),
            input_type: None,
            text: Some("Sign in".to_string()),
        }
    }

    pub fn count_elements_by_tag(state: &PageState, tag_name: &str) -> usize {
        state.find_by_tag(tag_name).len()
    }

    pub fn find_by_css<'a>(state: &'a PageState, css: &str) -> Option<&'a LocatedElement> {
        state.elements.iter().find(|e| e.locators.css == css)
    }

    pub fn get_page_stats(state: &PageState) -> PageStats {
        PageStats {
            total_elements: state.elements.len(),
            inputs: Self::count_elements_by_tag(state, "input"),
            buttons: Self::count_elements_by_tag(state, "button"),
            links: Self::count_elements_by_tag(state, "a"),
            with_test_id: state
                .elements
                .iter()
                .filter(|e| e.descriptor.test_id().is_some())
                .count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStats {
    pub total_elements: usize,
    pub inputs: usize,
    pub buttons: usize,
    pub links: usize,
    pub with_test_id: usize,
}
