//! Page object for the Text Box form

use std::sync::Arc;

use tracing::warn;

use crate::browser::{recovery, waits, BrowserError, BrowserSession, Locator};

use super::PageBase;

mod selectors {
    pub const PAGE_TITLE: &str =
        "//h1[contains(@class,'text-center') and text()='Text Box']";
    pub const FULL_NAME_LABEL: &str =
        "//div[@id='userName-wrapper']//label[@id='userName-label']";
    pub const FULL_NAME_INPUT: &str = "//div[@id='userName-wrapper']//input[@id='userName']";
    pub const EMAIL_LABEL: &str = "//div[@id='userEmail-wrapper']//label[@id='userEmail-label']";
    pub const EMAIL_INPUT: &str = "//div[@id='userEmail-wrapper']//input[@id='userEmail']";
    pub const CURRENT_ADDRESS_LABEL: &str =
        "//div[@id='currentAddress-wrapper']//label[@id='currentAddress-label']";
    pub const CURRENT_ADDRESS_INPUT: &str =
        "//div[@id='currentAddress-wrapper']//textarea[@id='currentAddress']";
    pub const PERMANENT_ADDRESS_LABEL: &str =
        "//div[@id='permanentAddress-wrapper']//label[@id='permanentAddress-label']";
    pub const PERMANENT_ADDRESS_INPUT: &str =
        "//div[@id='permanentAddress-wrapper']//textarea[@id='permanentAddress']";
    pub const SUBMIT_BUTTON: &str = "//form[@id='userForm']//button[@id='submit']";

    // Output block rendered below the form after submit
    pub const OUTPUT_NAME: &str = "//p[@id='name']";
    pub const OUTPUT_EMAIL: &str = "//p[@id='email']";
    pub const OUTPUT_CURRENT_ADDRESS: &str = "//p[@id='currentAddress']";
    pub const OUTPUT_PERMANENT_ADDRESS: &str = "//p[@id='permanentAddress']";
}

/// Page object for the Text Box page
#[derive(Debug, Clone)]
pub struct TextBoxPage {
    base: PageBase,
}

impl TextBoxPage {
    pub fn new(session: Arc<BrowserSession>) -> Self {
        Self {
            base: PageBase::new(session),
        }
    }

    pub fn base(&self) -> &PageBase {
        &self.base
    }

    fn session(&self) -> &Arc<BrowserSession> {
        self.base.session()
    }

    async fn visible(&self, selector: &str) -> bool {
        waits::wait_for_visible(self.session(), &Locator::xpath(selector)).await
    }

    async fn text(&self, selector: &str) -> Result<String, BrowserError> {
        self.session().text_of(&Locator::xpath(selector)).await
    }

    async fn placeholder(&self, selector: &str) -> Result<String, BrowserError> {
        self.session()
            .attribute_of(&Locator::xpath(selector), "placeholder")
            .await
    }

    async fn field_is_empty(&self, selector: &str) -> Result<bool, BrowserError> {
        Ok(self.session().value_of(&Locator::xpath(selector)).await?.is_empty())
    }

    // Page title
    pub async fn is_page_title_visible(&self) -> bool {
        self.visible(selectors::PAGE_TITLE).await
    }
    pub async fn page_title_text(&self) -> Result<String, BrowserError> {
        self.text(selectors::PAGE_TITLE).await
    }

    // Full Name
    pub async fn is_full_name_label_visible(&self) -> bool {
        self.visible(selectors::FULL_NAME_LABEL).await
    }
    pub async fn full_name_label_text(&self) -> Result<String, BrowserError> {
        self.text(selectors::FULL_NAME_LABEL).await
    }
    pub async fn is_full_name_visible(&self) -> bool {
        self.visible(selectors::FULL_NAME_INPUT).await
    }
    pub async fn full_name_placeholder(&self) -> Result<String, BrowserError> {
        self.placeholder(selectors::FULL_NAME_INPUT).await
    }
    pub async fn set_full_name(&self, name: &str) -> Result<(), BrowserError> {
        self.session()
            .type_text(&Locator::xpath(selectors::FULL_NAME_INPUT), name)
            .await
    }

    // Email
    pub async fn is_email_label_visible(&self) -> bool {
        self.visible(selectors::EMAIL_LABEL).await
    }
    pub async fn email_label_text(&self) -> Result<String, BrowserError> {
        self.text(selectors::EMAIL_LABEL).await
    }
    pub async fn is_email_visible(&self) -> bool {
        self.visible(selectors::EMAIL_INPUT).await
    }
    pub async fn email_placeholder(&self) -> Result<String, BrowserError> {
        self.placeholder(selectors::EMAIL_INPUT).await
    }
    pub async fn set_email(&self, email: &str) -> Result<(), BrowserError> {
        self.session()
            .type_text(&Locator::xpath(selectors::EMAIL_INPUT), email)
            .await
    }

    // Current Address
    pub async fn is_current_address_label_visible(&self) -> bool {
        self.visible(selectors::CURRENT_ADDRESS_LABEL).await
    }
    pub async fn current_address_label_text(&self) -> Result<String, BrowserError> {
        self.text(selectors::CURRENT_ADDRESS_LABEL).await
    }
    pub async fn is_current_address_visible(&self) -> bool {
        self.visible(selectors::CURRENT_ADDRESS_INPUT).await
    }
    pub async fn current_address_placeholder(&self) -> Result<String, BrowserError> {
        self.placeholder(selectors::CURRENT_ADDRESS_INPUT).await
    }
    pub async fn set_current_address(&self, address: &str) -> Result<(), BrowserError> {
        self.session()
            .type_text(&Locator::xpath(selectors::CURRENT_ADDRESS_INPUT), address)
            .await
    }

    // Permanent Address
    pub async fn is_permanent_address_label_visible(&self) -> bool {
        self.visible(selectors::PERMANENT_ADDRESS_LABEL).await
    }
    pub async fn permanent_address_label_text(&self) -> Result<String, BrowserError> {
        self.text(selectors::PERMANENT_ADDRESS_LABEL).await
    }
    pub async fn is_permanent_address_visible(&self) -> bool {
        self.visible(selectors::PERMANENT_ADDRESS_INPUT).await
    }
    pub async fn permanent_address_placeholder(&self) -> Result<String, BrowserError> {
        self.placeholder(selectors::PERMANENT_ADDRESS_INPUT).await
    }
    pub async fn set_permanent_address(&self, address: &str) -> Result<(), BrowserError> {
        self.session()
            .type_text(&Locator::xpath(selectors::PERMANENT_ADDRESS_INPUT), address)
            .await
    }

    // Submit
    pub async fn is_submit_button_visible(&self) -> bool {
        self.visible(selectors::SUBMIT_BUTTON).await
    }

    /// Click submit with full interception recovery; if native clicks stay
    /// blocked, fall back to a DOM-level click.
    pub async fn click_submit(&self) -> Result<(), BrowserError> {
        let locator = Locator::xpath(selectors::SUBMIT_BUTTON);
        match recovery::click_with_recovery(self.session(), &locator).await {
            Ok(()) => Ok(()),
            Err(BrowserError::ClickIntercepted { .. }) => {
                warn!(
                    "Session {} submit stayed intercepted, falling back to JS click",
                    self.session().id
                );
                recovery::js_click(self.session(), &locator).await
            }
            Err(e) => Err(e),
        }
    }

    // Output getters
    pub async fn submitted_name_output(&self) -> Result<String, BrowserError> {
        self.text(selectors::OUTPUT_NAME).await
    }
    pub async fn submitted_email_output(&self) -> Result<String, BrowserError> {
        self.text(selectors::OUTPUT_EMAIL).await
    }
    pub async fn submitted_current_address_output(&self) -> Result<String, BrowserError> {
        self.text(selectors::OUTPUT_CURRENT_ADDRESS).await
    }
    pub async fn submitted_permanent_address_output(&self) -> Result<String, BrowserError> {
        self.text(selectors::OUTPUT_PERMANENT_ADDRESS).await
    }

    // Empty checks
    pub async fn is_full_name_empty(&self) -> Result<bool, BrowserError> {
        self.field_is_empty(selectors::FULL_NAME_INPUT).await
    }
    pub async fn is_email_empty(&self) -> Result<bool, BrowserError> {
        self.field_is_empty(selectors::EMAIL_INPUT).await
    }
    pub async fn is_current_address_empty(&self) -> Result<bool, BrowserError> {
        self.field_is_empty(selectors::CURRENT_ADDRESS_INPUT).await
    }
    pub async fn is_permanent_address_empty(&self) -> Result<bool, BrowserError> {
        self.field_is_empty(selectors::PERMANENT_ADDRESS_INPUT).await
    }

    /// Output is empty when none of the output paragraphs carry text
    pub async fn is_output_empty(&self) -> Result<bool, BrowserError> {
        Ok(self.text(selectors::OUTPUT_NAME).await?.is_empty()
            && self.text(selectors::OUTPUT_EMAIL).await?.is_empty()
            && self.text(selectors::OUTPUT_CURRENT_ADDRESS).await?.is_empty()
            && self.text(selectors::OUTPUT_PERMANENT_ADDRESS).await?.is_empty())
    }
}
