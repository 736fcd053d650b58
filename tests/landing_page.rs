//! Component tests for the demoqa.com landing page
//!
//! Live-site tests: they drive a real Chrome against demoqa.com, so they are
//! ignored by default. Run with `DEMOQA_LIVE=1 cargo test -- --ignored`.

mod common;

use anyhow::ensure;
use demoqa_automation::actions::LandingPageActions;
use demoqa_automation::pages::Card;

#[tokio::test]
#[ignore = "requires Chrome and network access to demoqa.com"]
async fn landing_page_loads() {
    let harness = common::launch("landing_page_loads").await;
    let actions = LandingPageActions::new(harness.session.clone());

    let result = async {
        ensure!(
            actions.is_banner_visible().await,
            "Landing page should be loaded (banner visible)"
        );
        Ok(())
    }
    .await;

    harness.finish("landing_page_loads", result).await;
}

#[tokio::test]
#[ignore = "requires Chrome and network access to demoqa.com"]
async fn all_main_cards_visible() {
    let harness = common::launch("all_main_cards_visible").await;
    let actions = LandingPageActions::new(harness.session.clone());

    let result = async {
        ensure!(
            actions.all_main_cards_visible().await,
            "All main cards should be visible"
        );
        Ok(())
    }
    .await;

    harness.finish("all_main_cards_visible", result).await;
}

#[tokio::test]
#[ignore = "requires Chrome and network access to demoqa.com"]
async fn banner_and_logo_visible() {
    let harness = common::launch("banner_and_logo_visible").await;
    let actions = LandingPageActions::new(harness.session.clone());

    let result = async {
        ensure!(actions.is_banner_visible().await, "Banner should be visible");
        ensure!(
            actions.is_join_now_link_present().await,
            "JOIN NOW link should be present"
        );
        ensure!(actions.is_logo_visible().await, "ToolsQA logo should be visible");
        Ok(())
    }
    .await;

    harness.finish("banner_and_logo_visible", result).await;
}

#[tokio::test]
#[ignore = "requires Chrome and network access to demoqa.com"]
async fn footer_ad_presence_is_reported() {
    let harness = common::launch("footer_ad_presence_is_reported").await;
    let actions = LandingPageActions::new(harness.session.clone());

    let result = async {
        // The ad slot is not always filled; either answer is acceptable,
        // the check just must not hang or error.
        let visible = actions.is_footer_ad_visible().await;
        if !visible {
            common::STATS.record_skip("footer_ad_presence_is_reported");
        }
        Ok(())
    }
    .await;

    harness.finish("footer_ad_presence_is_reported", result).await;
}

#[tokio::test]
#[ignore = "requires Chrome and network access to demoqa.com"]
async fn every_card_navigates_and_back_returns_home() {
    let harness = common::launch("every_card_navigates_and_back_returns_home").await;
    let actions = LandingPageActions::new(harness.session.clone());

    let result = async {
        for card in Card::ALL {
            actions.click_card(card).await?;
            let url = actions.current_url().await?;
            ensure!(
                url.trim_end_matches('/').ends_with(card.path()),
                "{} card should navigate to a URL ending with /{}, got {}",
                card.title(),
                card.path(),
                url
            );
            actions.go_back().await?;
            ensure!(
                actions.is_banner_visible().await,
                "Should return to landing page after visiting {}",
                card.title()
            );
        }
        Ok(())
    }
    .await;

    harness
        .finish("every_card_navigates_and_back_returns_home", result)
        .await;
}
