//! Page objects for the Forms section

use std::sync::Arc;

use crate::browser::{recovery, BrowserError, BrowserSession, Locator};

use super::PageBase;

/// Page object for the Forms section menu
#[derive(Debug, Clone)]
pub struct FormsPage {
    base: PageBase,
}

impl FormsPage {
    pub fn new(session: Arc<BrowserSession>) -> Self {
        Self {
            base: PageBase::new(session),
        }
    }

    pub fn base(&self) -> &PageBase {
        &self.base
    }

    /// Open the Practice Form entry in the section menu
    pub async fn go_to_practice_form(&self) -> Result<(), BrowserError> {
        recovery::click_with_recovery(self.base.session(), &Locator::css("#item-0")).await
    }
}

mod selectors {
    pub const FIRST_NAME_INPUT: &str = "#firstName";
    pub const LAST_NAME_INPUT: &str = "#lastName";
    pub const EMAIL_INPUT: &str = "#userEmail";
    pub const SUBMIT_BUTTON: &str = "#submit";
}

/// Page object for the Practice Form page
#[derive(Debug, Clone)]
pub struct PracticeFormPage {
    base: PageBase,
}

impl PracticeFormPage {
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

    pub async fn fill_form(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<(), BrowserError> {
        self.session()
            .type_text(&Locator::css(selectors::FIRST_NAME_INPUT), first_name)
            .await?;
        self.session()
            .type_text(&Locator::css(selectors::LAST_NAME_INPUT), last_name)
            .await?;
        self.session()
            .type_text(&Locator::css(selectors::EMAIL_INPUT), email)
            .await?;
        Ok(())
    }

    pub async fn submit_form(&self) -> Result<(), BrowserError> {
        recovery::click_with_recovery(self.session(), &Locator::css(selectors::SUBMIT_BUTTON))
            .await
    }
}
