//! Cucumber BDD suite for demoqa.com
//!
//! Runs the Gherkin feature files under `tests/features/` against the live
//! site. Like the component tests, the suite needs Chrome and network access,
//! so it only runs when `DEMOQA_LIVE=1` is set:
//!
//!   DEMOQA_LIVE=1 cargo test --test cucumber

use std::sync::Arc;

use cucumber::{given, then, when, World};

use demoqa_automation::actions::{LandingPageActions, TextBoxActions};
use demoqa_automation::browser::BrowserSession;
use demoqa_automation::pages::Card;
use demoqa_automation::SuiteConfig;

#[derive(Debug, Default, World)]
pub struct DemoqaWorld {
    session: Option<Arc<BrowserSession>>,
}

impl DemoqaWorld {
    /// Launch the browser session on first use within a scenario
    async fn ensure_session(&mut self) -> Arc<BrowserSession> {
        if self.session.is_none() {
            let session = BrowserSession::from_suite_config(SuiteConfig::get())
                .await
                .expect("launch browser session");
            self.session = Some(Arc::new(session));
        }
        self.session.as_ref().expect("session just created").clone()
    }

    fn landing(&self) -> LandingPageActions {
        LandingPageActions::new(self.session.clone().expect("scenario has no session yet"))
    }

    fn text_box(&self) -> TextBoxActions {
        TextBoxActions::new(self.session.clone().expect("scenario has no session yet"))
    }
}

// -------------------- Landing page steps --------------------

#[given("I am on the landing page")]
async fn on_landing_page(world: &mut DemoqaWorld) {
    let session = world.ensure_session().await;
    let actions = LandingPageActions::new(session);
    actions
        .navigate_to(&SuiteConfig::get().base_url)
        .await
        .expect("navigate to landing page");
}

#[then(expr = "the {string} card should be visible")]
async fn card_should_be_visible(world: &mut DemoqaWorld, card_name: String) {
    let card = Card::from_name(&card_name)
        .unwrap_or_else(|| panic!("Unknown card: {}", card_name));
    assert!(
        world.landing().is_card_visible(card).await,
        "{} card should be visible",
        card_name
    );
}

#[when("I click the Elements card")]
async fn click_elements_card(world: &mut DemoqaWorld) {
    world
        .landing()
        .click_card(Card::Elements)
        .await
        .expect("click Elements card");
}

#[then("the Elements page should be loaded")]
async fn elements_page_loaded(world: &mut DemoqaWorld) {
    let url = world.landing().current_url().await.expect("current url");
    assert_eq!(url.trim_end_matches('/'), SuiteConfig::get().page_url("elements"));
}

#[when("I click the Forms card")]
async fn click_forms_card(world: &mut DemoqaWorld) {
    world
        .landing()
        .click_card(Card::Forms)
        .await
        .expect("click Forms card");
}

#[then("the Forms page should be loaded")]
async fn forms_page_loaded(world: &mut DemoqaWorld) {
    let url = world.landing().current_url().await.expect("current url");
    assert_eq!(url.trim_end_matches('/'), SuiteConfig::get().page_url("forms"));
}

// -------------------- Text box steps --------------------

#[given("I am on the text box page")]
async fn on_text_box_page(world: &mut DemoqaWorld) {
    let session = world.ensure_session().await;
    let actions = TextBoxActions::new(session);
    actions
        .navigate_to(&SuiteConfig::get().page_url("text-box"))
        .await
        .expect("navigate to text box page");
}

#[then("the page title should be visible")]
async fn page_title_visible(world: &mut DemoqaWorld) {
    assert!(world.text_box().is_page_title_visible().await);
}

#[then(expr = "the page title should be {string}")]
async fn page_title_should_be(world: &mut DemoqaWorld, expected: String) {
    let title = world.text_box().page_title_text().await.expect("title text");
    assert_eq!(title, expected);
}

#[then(expr = "the {string} field should be visible")]
async fn field_should_be_visible(world: &mut DemoqaWorld, field: String) {
    let actions = world.text_box();
    let visible = match field.as_str() {
        "Full Name" => actions.is_full_name_field_visible().await,
        "Email" => actions.is_email_field_visible().await,
        "Current Address" => actions.is_current_address_field_visible().await,
        "Permanent Address" => actions.is_permanent_address_field_visible().await,
        other => panic!("Unknown field: {}", other),
    };
    assert!(visible, "{} field should be visible", field);
}

#[then(expr = "the {string} label should be {string}")]
async fn label_should_be(world: &mut DemoqaWorld, field: String, expected: String) {
    let actions = world.text_box();
    let label = match field.as_str() {
        "Full Name" => actions.full_name_label_text().await,
        "Email" => actions.email_label_text().await,
        "Current Address" => actions.current_address_label_text().await,
        "Permanent Address" => actions.permanent_address_label_text().await,
        other => panic!("Unknown field: {}", other),
    }
    .expect("label text");
    assert_eq!(label, expected);
}

#[then(expr = "the {string} placeholder should be {string}")]
async fn placeholder_should_be(world: &mut DemoqaWorld, field: String, expected: String) {
    let actions = world.text_box();
    let placeholder = match field.as_str() {
        "Full Name" => actions.full_name_placeholder().await,
        "Email" => actions.email_placeholder().await,
        "Current Address" => actions.current_address_placeholder().await,
        other => panic!("Unknown field: {}", other),
    }
    .expect("placeholder");
    assert_eq!(placeholder, expected);
}

#[then("the Submit button should be visible")]
async fn submit_button_visible(world: &mut DemoqaWorld) {
    assert!(world.text_box().is_submit_button_visible().await);
}

#[when(expr = "I fill the form with name {string}, email {string}, current address {string}, permanent address {string}")]
async fn fill_form(
    world: &mut DemoqaWorld,
    name: String,
    email: String,
    current_address: String,
    permanent_address: String,
) {
    world
        .text_box()
        .fill_form(&name, &email, &current_address, &permanent_address)
        .await
        .expect("fill and submit form");
}

#[when("I click the submit button")]
async fn click_submit_button(world: &mut DemoqaWorld) {
    world.text_box().click_submit().await.expect("click submit");
}

#[then(expr = "the output should contain name {string}, email {string}, current address {string}, permanent address {string}")]
async fn output_should_contain(
    world: &mut DemoqaWorld,
    name: String,
    email: String,
    current_address: String,
    permanent_address: String,
) {
    let actions = world.text_box();
    assert!(actions.submitted_name_output().await.expect("output name").contains(&name));
    assert!(actions.submitted_email_output().await.expect("output email").contains(&email));
    assert!(actions
        .submitted_current_address_output()
        .await
        .expect("output current address")
        .contains(&current_address));
    assert!(actions
        .submitted_permanent_address_output()
        .await
        .expect("output permanent address")
        .contains(&permanent_address));
}

#[when("I reload the page")]
async fn reload_the_page(world: &mut DemoqaWorld) {
    world.text_box().refresh_page().await.expect("reload page");
}

#[then("all fields and output should be empty")]
async fn all_fields_and_output_empty(world: &mut DemoqaWorld) {
    let actions = world.text_box();
    assert!(actions.is_full_name_empty().await.expect("full name state"));
    assert!(actions.is_email_empty().await.expect("email state"));
    assert!(actions.is_current_address_empty().await.expect("current address state"));
    assert!(actions.is_permanent_address_empty().await.expect("permanent address state"));
    assert!(actions.is_output_empty().await.expect("output state"));
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if std::env::var("DEMOQA_LIVE").is_err() {
        eprintln!("skipping cucumber suite: set DEMOQA_LIVE=1 to run against the live site");
        return;
    }

    let _guard = demoqa_automation::init_logging();

    DemoqaWorld::cucumber()
        .fail_on_skipped()
        .max_concurrent_scenarios(1)
        .after(|_feature, _rule, _scenario, _event, world| {
            Box::pin(async move {
                if let Some(world) = world {
                    if let Some(session) = world.session.take() {
                        let _ = session.close().await;
                    }
                }
            })
        })
        .run("tests/features")
        .await;
}
