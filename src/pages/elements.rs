//! Page object for the Elements section and its left-hand menu

use std::sync::Arc;

use crate::browser::{recovery, waits, BrowserError, BrowserSession, Locator};

use super::PageBase;

/// Left menu item locator by visible text
fn menu_item_by_text(text: &str) -> Locator {
    Locator::xpath(format!(
        "//li[contains(@class,'btn') and .//span[contains(@class,'text') and contains(text(), '{}')]]",
        text
    ))
}

/// Page object for the Elements page left menu
#[derive(Debug, Clone)]
pub struct ElementsPage {
    base: PageBase,
}

impl ElementsPage {
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

    pub async fn is_menu_item_visible(&self, text: &str) -> bool {
        waits::wait_for_visible(self.session(), &menu_item_by_text(text)).await
    }

    /// Hide the fixed footer banner that overlaps low menu items
    pub async fn hide_fixed_banner(&self) {
        recovery::hide_fixed_banner(self.session()).await;
    }

    /// Click a menu item after hiding the fixed banner and closing known
    /// popups. For the simple case where overlays may block the click but
    /// scrolling is not needed.
    pub async fn click_menu_item(&self, text: &str) -> Result<(), BrowserError> {
        let locator = menu_item_by_text(text);
        self.hide_fixed_banner().await;
        recovery::close_known_popups(self.session()).await;
        waits::wait_for_clickable(self.session(), &locator).await;
        recovery::try_click(self.session(), &locator).await
    }

    /// Click a menu item; if the click is intercepted by the vignette ad
    /// redirect, close the popup, wait for the URL to clear and retry once.
    pub async fn click_menu_item_with_ad_handling(&self, text: &str) -> Result<(), BrowserError> {
        let locator = menu_item_by_text(text);
        match recovery::try_click(self.session(), &locator).await {
            Ok(()) => Ok(()),
            Err(BrowserError::ClickIntercepted { .. }) => {
                let url = self.session().current_url().await.unwrap_or_default();
                if recovery::url_has_ad_marker(&url) {
                    recovery::close_known_popups(self.session()).await;
                    waits::wait_for_url_not_containing(
                        self.session(),
                        recovery::AD_REDIRECT_MARKER,
                        recovery::VIGNETTE_CLEAR_WAIT_SECS,
                    )
                    .await;
                }
                recovery::try_click(self.session(), &locator).await
            }
            Err(e) => Err(e),
        }
    }

    /// The most robust variant: scroll the menu item into view before each
    /// click, dismissing the banner and popups between blocked attempts.
    /// Bounded retries; the final failure propagates.
    pub async fn click_menu_item_with_ad_and_scroll_handling(
        &self,
        text: &str,
    ) -> Result<(), BrowserError> {
        let locator = menu_item_by_text(text);
        for _ in 1..recovery::MAX_CLICK_ATTEMPTS {
            let _ = recovery::scroll_into_view(self.session(), &locator).await;
            match recovery::try_click(self.session(), &locator).await {
                Ok(()) => return Ok(()),
                Err(BrowserError::ClickIntercepted { .. }) => {
                    self.hide_fixed_banner().await;
                    recovery::close_known_popups(self.session()).await;
                    waits::wait_seconds(1).await;
                }
                Err(e) => return Err(e),
            }
        }
        // Final attempt, let the error propagate if it fails
        recovery::try_click(self.session(), &locator).await
    }
}
