//! Actions for the landing page

use std::sync::Arc;

use tracing::info;

use crate::browser::{BrowserError, BrowserSession};
use crate::pages::{Card, LandingPage};

pub struct LandingPageActions {
    page: LandingPage,
}

impl LandingPageActions {
    pub fn new(session: Arc<BrowserSession>) -> Self {
        Self {
            page: LandingPage::new(session),
        }
    }

    // Navigation, shared across all actions types
    pub async fn current_url(&self) -> Result<String, BrowserError> {
        self.page.base().current_url().await
    }
    pub async fn go_back(&self) -> Result<(), BrowserError> {
        self.page.base().go_back().await
    }
    pub async fn refresh_page(&self) -> Result<(), BrowserError> {
        self.page.base().refresh_page().await
    }
    pub async fn navigate_to(&self, url: &str) -> Result<(), BrowserError> {
        self.page.base().navigate_to(url).await
    }

    pub async fn all_main_cards_visible(&self) -> bool {
        info!("Checking visibility of all main cards on the landing page");
        for card in Card::ALL {
            if !self.page.is_card_visible(card).await {
                return false;
            }
        }
        true
    }

    pub async fn is_card_visible(&self, card: Card) -> bool {
        info!("Checking if {} card is visible", card.title());
        self.page.is_card_visible(card).await
    }

    pub async fn is_banner_visible(&self) -> bool {
        info!("Checking if banner is visible");
        self.page.is_banner_visible().await
    }

    pub async fn is_join_now_link_present(&self) -> bool {
        info!("Checking if Join Now link is present");
        self.page.is_join_now_link_present().await
    }

    pub async fn click_join_now_link(&self) -> Result<(), BrowserError> {
        info!("Clicking Join Now link");
        self.page.click_join_now_link().await
    }

    pub async fn is_logo_visible(&self) -> bool {
        info!("Checking if logo is visible");
        self.page.is_logo_visible().await
    }

    pub async fn is_footer_ad_visible(&self) -> bool {
        info!("Checking if footer ad is visible");
        self.page.is_footer_ad_visible().await
    }

    pub async fn click_card(&self, card: Card) -> Result<(), BrowserError> {
        info!("Clicking {} card", card.title());
        self.page.click_card(card).await
    }
}
