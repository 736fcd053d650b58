//! Actions for the Elements page

use std::sync::Arc;

use tracing::info;

use crate::browser::{BrowserError, BrowserSession};
use crate::pages::ElementsPage;

pub struct ElementsPageActions {
    page: ElementsPage,
}

impl ElementsPageActions {
    pub fn new(session: Arc<BrowserSession>) -> Self {
        Self {
            page: ElementsPage::new(session),
        }
    }

    pub async fn current_url(&self) -> Result<String, BrowserError> {
        self.page.base().current_url().await
    }
    pub async fn go_back(&self) -> Result<(), BrowserError> {
        self.page.base().go_back().await
    }
    pub async fn navigate_to(&self, url: &str) -> Result<(), BrowserError> {
        self.page.base().navigate_to(url).await
    }

    pub async fn is_menu_item_visible(&self, text: &str) -> bool {
        info!("Checking if menu item '{}' is visible", text);
        self.page.is_menu_item_visible(text).await
    }

    pub async fn click_menu_item(&self, text: &str) -> Result<(), BrowserError> {
        info!("Clicking menu item '{}'", text);
        self.page.click_menu_item(text).await
    }

    pub async fn click_menu_item_with_ad_handling(&self, text: &str) -> Result<(), BrowserError> {
        info!("Clicking menu item '{}' with ad handling", text);
        self.page.click_menu_item_with_ad_handling(text).await
    }

    pub async fn click_menu_item_with_ad_and_scroll_handling(
        &self,
        text: &str,
    ) -> Result<(), BrowserError> {
        info!("Clicking menu item '{}' with ad and scroll handling", text);
        self.page
            .click_menu_item_with_ad_and_scroll_handling(text)
            .await
    }
}
