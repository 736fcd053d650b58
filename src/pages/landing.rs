//! Page object for the demoqa.com landing page

use std::sync::Arc;

use crate::browser::{recovery, waits, BrowserError, BrowserSession, Locator};

use super::PageBase;

/// The six category cards on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Card {
    Elements,
    Forms,
    AlertsFrameWindows,
    Widgets,
    Interactions,
    BookStore,
}

impl Card {
    pub const ALL: [Card; 6] = [
        Card::Elements,
        Card::Forms,
        Card::AlertsFrameWindows,
        Card::Widgets,
        Card::Interactions,
        Card::BookStore,
    ];

    /// The card heading as rendered on the page
    pub fn title(self) -> &'static str {
        match self {
            Card::Elements => "Elements",
            Card::Forms => "Forms",
            Card::AlertsFrameWindows => "Alerts, Frame & Windows",
            Card::Widgets => "Widgets",
            Card::Interactions => "Interactions",
            Card::BookStore => "Book Store Application",
        }
    }

    /// URL path segment the card navigates to
    pub fn path(self) -> &'static str {
        match self {
            Card::Elements => "elements",
            Card::Forms => "forms",
            Card::AlertsFrameWindows => "alertsWindows",
            Card::Widgets => "widgets",
            Card::Interactions => "interaction",
            Card::BookStore => "books",
        }
    }

    /// Look a card up by the names used in feature files
    pub fn from_name(name: &str) -> Option<Card> {
        match name {
            "Elements" => Some(Card::Elements),
            "Forms" => Some(Card::Forms),
            "Alerts" | "Alerts, Frame & Windows" => Some(Card::AlertsFrameWindows),
            "Widgets" => Some(Card::Widgets),
            "Interactions" => Some(Card::Interactions),
            "Book Store" | "Book Store Application" => Some(Card::BookStore),
            _ => None,
        }
    }
}

mod selectors {
    pub const BANNER: &str = "//img[@class='banner-image' and @alt='Selenium Online Training']";
    pub const JOIN_NOW_LINK: &str =
        "//a[@href='https://www.toolsqa.com/selenium-training/']//img[@class='banner-image']";
    pub const LOGO: &str = "//header//a[@href='https://demoqa.com']//img[contains(@src,'Toolsq')]";
    pub const FOOTER_AD: &str = "//div[contains(@class,'swiper-slide')]//img";
}

fn card_locator(card: Card) -> Locator {
    Locator::xpath(format!(
        "//div[contains(@class,'card mt-4 top-card')]//h5[text()='{}']/ancestor::div[contains(@class,'card mt-4 top-card')]",
        card.title()
    ))
}

/// Page object for the landing page: category cards, banner, logo, ads
#[derive(Debug, Clone)]
pub struct LandingPage {
    base: PageBase,
}

impl LandingPage {
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

    pub async fn is_card_visible(&self, card: Card) -> bool {
        waits::wait_for_visible(self.session(), &card_locator(card)).await
    }

    pub async fn is_banner_visible(&self) -> bool {
        waits::wait_for_visible(self.session(), &Locator::xpath(selectors::BANNER)).await
    }

    pub async fn is_join_now_link_present(&self) -> bool {
        waits::wait_for_visible(self.session(), &Locator::xpath(selectors::JOIN_NOW_LINK)).await
    }

    pub async fn click_join_now_link(&self) -> Result<(), BrowserError> {
        recovery::click_with_recovery(self.session(), &Locator::xpath(selectors::JOIN_NOW_LINK))
            .await
    }

    pub async fn is_logo_visible(&self) -> bool {
        waits::wait_for_visible(self.session(), &Locator::xpath(selectors::LOGO)).await
    }

    /// The footer ad slot is not always filled; a short wait is enough.
    pub async fn is_footer_ad_visible(&self) -> bool {
        waits::wait_for_visible_within(self.session(), &Locator::xpath(selectors::FOOTER_AD), 3)
            .await
    }

    pub async fn is_page_loaded(&self) -> bool {
        self.is_banner_visible().await
    }

    /// Click a category card and give the target page a moment to settle
    /// (the card pages load ad slots that shift layout on arrival).
    pub async fn click_card(&self, card: Card) -> Result<(), BrowserError> {
        recovery::click_with_recovery(self.session(), &card_locator(card)).await?;
        waits::wait_seconds(3).await;
        Ok(())
    }
}
