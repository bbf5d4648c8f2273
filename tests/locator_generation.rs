use step_recorder::locator::{escape, playwright_locator};
use step_recorder::testing::TestHelper;
use step_recorder::{generate_locators, infer_role, ElementDescriptor, PageSnapshot};

#[test]
fn every_field_absent_still_yields_locators() {
    for tag in ["div", "span", "input", "section", ""] {
        let locators = generate_locators(&ElementDescriptor::new(tag));
        assert!(!locators.playwright.is_empty());
        assert!(!locators.css.is_empty());
        assert!(!locators.xpath.is_empty());
    }
}

#[test]
fn id_wins_css_while_test_id_wins_playwright() {
    let element = ElementDescriptor::new("button")
        .with_id("checkout")
        .with_data_testid("checkout-button");
    let locators = generate_locators(&element);

    assert_eq!(locators.css, "#checkout");
    assert_eq!(locators.xpath, "//*[@id='checkout']");
    assert_eq!(locators.playwright, "page.getByTestId('checkout-button')");
}

#[test]
fn quotes_and_newlines_are_escaped_in_text_locators() {
    let element = ElementDescriptor::new("td").with_text("O'Brien\nRow2");
    assert_eq!(
        playwright_locator(&element),
        "page.getByText('O\\'Brien Row2')"
    );
    assert_eq!(escape(" O'Brien\nRow2 "), "O\\'Brien Row2");
}

#[test]
fn role_table() {
    assert_eq!(infer_role("input", Some("checkbox")), Some("checkbox"));
    assert_eq!(infer_role("input", Some("unknown-type")), Some("textbox"));
    assert_eq!(infer_role("div", None), None);
}

#[test]
fn class_fallback_reaches_end_of_every_chain() {
    let element = ElementDescriptor::new("div").with_class_attr("card active");
    let locators = generate_locators(&element);

    assert_eq!(locators.css, "div.card.active");
    assert_eq!(locators.playwright, "div.card.active");
    assert_eq!(locators.xpath, "//div[@class='card active']");
}

#[test]
fn name_only_changes_css_when_playwright_is_settled() {
    let base = ElementDescriptor::new("input").with_data_test_id("qty");
    let named = base.clone().with_name("quantity");

    let before = generate_locators(&base);
    let after = generate_locators(&named);
    assert_eq!(before.playwright, after.playwright);
    assert_eq!(before.css, after.css);

    let labelled = ElementDescriptor::new("input").with_label_text("Quantity");
    let labelled_named = labelled.clone().with_name("quantity");
    let before = generate_locators(&labelled);
    let after = generate_locators(&labelled_named);
    assert_eq!(before.playwright, after.playwright);
    assert_eq!(before.css, "input");
    assert_eq!(after.css, "input[name=\"quantity\"]");
}

#[test]
fn generation_is_deterministic() {
    let element = ElementDescriptor::new("a")
        .with_class_attr("nav-link active")
        .with_text("Pricing");
    assert_eq!(generate_locators(&element), generate_locators(&element));
}

#[test]
fn login_page_locators() {
    let page = PageSnapshot::parse(TestHelper::login_page());

    let email = generate_locators(&page.capture("#email").unwrap());
    assert_eq!(email.playwright, "page.getByRole('textbox', { name: 'Email' })");
    assert_eq!(email.css, "#email");
    assert_eq!(email.xpath, "//*[@id='email']");

    let password = generate_locators(&page.capture("input[type=password]").unwrap());
    assert_eq!(
        password.playwright,
        "page.getByRole('textbox', { name: 'Password' })"
    );
    assert_eq!(password.css, "input[name=\"password\"]");
    assert_eq!(password.xpath, "//input[@name='password']");

    let remember = generate_locators(&page.capture("input[type=checkbox]").unwrap());
    assert_eq!(
        remember.playwright,
        "page.getByRole('checkbox', { name: 'Remember me' })"
    );

    let link = generate_locators(&page.capture("a").unwrap());
    assert_eq!(
        link.playwright,
        "page.getByRole('link', { name: 'Forgot password?' })"
    );
    assert_eq!(link.css, "a.link.muted");
    assert_eq!(link.xpath, "//a[contains(text(), 'Forgot password?')]");

    let card = generate_locators(&page.capture("div.card").unwrap());
    assert_eq!(card.css, "div.card.active");
    assert_eq!(card.xpath, "//div[@class='card active']");
}

#[test]
fn scan_reports_page_stats() {
    let state = PageSnapshot::parse(TestHelper::login_page()).scan().unwrap();
    let stats = TestHelper::get_page_stats(&state);

    assert_eq!(stats.total_elements, 5);
    assert_eq!(stats.inputs, 3);
    assert_eq!(stats.buttons, 1);
    assert_eq!(stats.links, 1);
    assert_eq!(stats.with_test_id, 1);
    assert!(TestHelper::find_by_css(&state, "#email").is_some());
}
