//! Actions for the Text Box page

use std::sync::Arc;

use tracing::info;

use crate::browser::{BrowserError, BrowserSession};
use crate::pages::TextBoxPage;

pub struct TextBoxActions {
    page: TextBoxPage,
}

impl TextBoxActions {
    pub fn new(session: Arc<BrowserSession>) -> Self {
        Self {
            page: TextBoxPage::new(session),
        }
    }

    // ----------------------
    // Navigation
    // ----------------------
    pub async fn current_url(&self) -> Result<String, BrowserError> {
        self.page.base().current_url().await
    }
    pub async fn refresh_page(&self) -> Result<(), BrowserError> {
        self.page.base().refresh_page().await
    }
    pub async fn navigate_to(&self, url: &str) -> Result<(), BrowserError> {
        self.page.base().navigate_to(url).await
    }

    // ----------------------
    // Input
    // ----------------------
    pub async fn enter_full_name(&self, name: &str) -> Result<(), BrowserError> {
        info!("Entering Full Name: {}", name);
        self.page.set_full_name(name).await
    }
    pub async fn enter_email(&self, email: &str) -> Result<(), BrowserError> {
        info!("Entering Email: {}", email);
        self.page.set_email(email).await
    }
    pub async fn enter_current_address(&self, address: &str) -> Result<(), BrowserError> {
        info!("Entering Current Address: {}", address);
        self.page.set_current_address(address).await
    }
    pub async fn enter_permanent_address(&self, address: &str) -> Result<(), BrowserError> {
        info!("Entering Permanent Address: {}", address);
        self.page.set_permanent_address(address).await
    }

    // ----------------------
    // Clicks and composites
    // ----------------------
    pub async fn click_submit(&self) -> Result<(), BrowserError> {
        info!("Clicking Submit button");
        self.page.click_submit().await
    }

    pub async fn fill_form(
        &self,
        name: &str,
        email: &str,
        current_address: &str,
        permanent_address: &str,
    ) -> Result<(), BrowserError> {
        info!(
            "Filling form with: Name={}, Email={}, CurrentAddress={}, PermanentAddress={}",
            name, email, current_address, permanent_address
        );
        self.enter_full_name(name).await?;
        self.enter_email(email).await?;
        self.enter_current_address(current_address).await?;
        self.enter_permanent_address(permanent_address).await?;
        self.click_submit().await
    }

    // ----------------------
    // Output retrieval
    // ----------------------
    pub async fn submitted_name_output(&self) -> Result<String, BrowserError> {
        let value = self.page.submitted_name_output().await?;
        info!("Output Name after submit: {}", value);
        Ok(value)
    }
    pub async fn submitted_email_output(&self) -> Result<String, BrowserError> {
        let value = self.page.submitted_email_output().await?;
        info!("Output Email after submit: {}", value);
        Ok(value)
    }
    pub async fn submitted_current_address_output(&self) -> Result<String, BrowserError> {
        let value = self.page.submitted_current_address_output().await?;
        info!("Output Current Address after submit: {}", value);
        Ok(value)
    }
    pub async fn submitted_permanent_address_output(&self) -> Result<String, BrowserError> {
        let value = self.page.submitted_permanent_address_output().await?;
        info!("Output Permanent Address after submit: {}", value);
        Ok(value)
    }

    // ----------------------
    // Visibility, label, placeholder and empty checks
    // ----------------------
    pub async fn is_page_title_visible(&self) -> bool {
        self.page.is_page_title_visible().await
    }
    pub async fn page_title_text(&self) -> Result<String, BrowserError> {
        self.page.page_title_text().await
    }
    pub async fn is_full_name_label_visible(&self) -> bool {
        self.page.is_full_name_label_visible().await
    }
    pub async fn full_name_label_text(&self) -> Result<String, BrowserError> {
        self.page.full_name_label_text().await
    }
    pub async fn is_full_name_field_visible(&self) -> bool {
        self.page.is_full_name_visible().await
    }
    pub async fn full_name_placeholder(&self) -> Result<String, BrowserError> {
        self.page.full_name_placeholder().await
    }
    pub async fn is_email_label_visible(&self) -> bool {
        self.page.is_email_label_visible().await
    }
    pub async fn email_label_text(&self) -> Result<String, BrowserError> {
        self.page.email_label_text().await
    }
    pub async fn is_email_field_visible(&self) -> bool {
        self.page.is_email_visible().await
    }
    pub async fn email_placeholder(&self) -> Result<String, BrowserError> {
        self.page.email_placeholder().await
    }
    pub async fn is_current_address_label_visible(&self) -> bool {
        self.page.is_current_address_label_visible().await
    }
    pub async fn current_address_label_text(&self) -> Result<String, BrowserError> {
        self.page.current_address_label_text().await
    }
    pub async fn is_current_address_field_visible(&self) -> bool {
        self.page.is_current_address_visible().await
    }
    pub async fn current_address_placeholder(&self) -> Result<String, BrowserError> {
        self.page.current_address_placeholder().await
    }
    pub async fn is_permanent_address_label_visible(&self) -> bool {
        self.page.is_permanent_address_label_visible().await
    }
    pub async fn permanent_address_label_text(&self) -> Result<String, BrowserError> {
        self.page.permanent_address_label_text().await
    }
    pub async fn is_permanent_address_field_visible(&self) -> bool {
        self.page.is_permanent_address_visible().await
    }
    pub async fn is_submit_button_visible(&self) -> bool {
        self.page.is_submit_button_visible().await
    }
    pub async fn is_full_name_empty(&self) -> Result<bool, BrowserError> {
        self.page.is_full_name_empty().await
    }
    pub async fn is_email_empty(&self) -> Result<bool, BrowserError> {
        self.page.is_email_empty().await
    }
    pub async fn is_current_address_empty(&self) -> Result<bool, BrowserError> {
        self.page.is_current_address_empty().await
    }
    pub async fn is_permanent_address_empty(&self) -> Result<bool, BrowserError> {
        self.page.is_permanent_address_empty().await
    }
    pub async fn is_output_empty(&self) -> Result<bool, BrowserError> {
        self.page.is_output_empty().await
    }
}
