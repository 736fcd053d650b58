//! Shared browser-level page operations

use std::sync::Arc;

use crate::browser::{waits, BrowserError, BrowserSession};

/// Browser-level operations shared by every page object
#[derive(Debug, Clone)]
pub struct PageBase {
    session: Arc<BrowserSession>,
}

impl PageBase {
    pub fn new(session: Arc<BrowserSession>) -> Self {
        Self { session }
    }

    /// The underlying browser session
    pub fn session(&self) -> &Arc<BrowserSession> {
        &self.session
    }

    /// Returns the current URL of the browser
    pub async fn current_url(&self) -> Result<String, BrowserError> {
        self.session.current_url().await
    }

    /// Navigates the browser back to the previous page
    pub async fn go_back(&self) -> Result<(), BrowserError> {
        self.session.go_back().await?;
        waits::wait_for_page_load(&self.session).await;
        Ok(())
    }

    /// Refreshes the current browser page
    pub async fn refresh_page(&self) -> Result<(), BrowserError> {
        self.session.reload().await?;
        waits::wait_for_page_load(&self.session).await;
        Ok(())
    }

    /// Navigates the browser to the given URL
    pub async fn navigate_to(&self, url: &str) -> Result<(), BrowserError> {
        self.session.navigate(url).await?;
        waits::wait_for_page_load(&self.session).await;
        Ok(())
    }
}
