//! Actions for the Practice Form page

use std::sync::Arc;

use tracing::info;

use crate::browser::{BrowserError, BrowserSession};
use crate::pages::{FormsPage, PracticeFormPage};

pub struct PracticeFormActions {
    forms_page: FormsPage,
    practice_form: PracticeFormPage,
}

impl PracticeFormActions {
    pub fn new(session: Arc<BrowserSession>) -> Self {
        Self {
            forms_page: FormsPage::new(session.clone()),
            practice_form: PracticeFormPage::new(session),
        }
    }

    pub async fn current_url(&self) -> Result<String, BrowserError> {
        self.practice_form.base().current_url().await
    }
    pub async fn navigate_to(&self, url: &str) -> Result<(), BrowserError> {
        self.practice_form.base().navigate_to(url).await
    }

    pub async fn go_to_practice_form(&self) -> Result<(), BrowserError> {
        info!("Opening Practice Form from the Forms menu");
        self.forms_page.go_to_practice_form().await
    }

    pub async fn fill_form(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<(), BrowserError> {
        info!(
            "Filling practice form with: FirstName={}, LastName={}, Email={}",
            first_name, last_name, email
        );
        self.practice_form.fill_form(first_name, last_name, email).await
    }

    pub async fn submit_form(&self) -> Result<(), BrowserError> {
        info!("Submitting practice form");
        self.practice_form.submit_form().await
    }
}
