//! Component test for the Practice Form flow
//!
//! Live-site test; run with `DEMOQA_LIVE=1 cargo test -- --ignored`.

mod common;

use anyhow::ensure;
use demoqa_automation::actions::PracticeFormActions;

#[tokio::test]
#[ignore = "requires Chrome and network access to demoqa.com"]
async fn practice_form_accepts_basic_details() {
    let harness = common::launch_at("practice_form_accepts_basic_details", "forms").await;
    let actions = PracticeFormActions::new(harness.session.clone());

    let result = async {
        actions.go_to_practice_form().await?;
        let url = actions.current_url().await?;
        ensure!(
            url.contains("automation-practice-form"),
            "Practice Form page should be open, got {}",
            url
        );

        actions
            .fill_form("John", "Doe", "john.doe@example.com")
            .await?;
        actions.submit_form().await?;
        Ok(())
    }
    .await;

    harness
        .finish("practice_form_accepts_basic_details", result)
        .await;
}
