//! Component tests for the Check Box page
//!
//! Live-site tests; run with `DEMOQA_LIVE=1 cargo test -- --ignored`.

mod common;

use anyhow::ensure;
use demoqa_automation::actions::CheckBoxActions;

#[tokio::test]
#[ignore = "requires Chrome and network access to demoqa.com"]
async fn page_title_is_check_box() {
    let harness = common::launch_at("page_title_is_check_box", "checkbox").await;
    let actions = CheckBoxActions::new(harness.session.clone());

    let result = async {
        ensure!(
            actions.is_page_title_visible().await,
            "Check Box page title (h1) should be visible"
        );
        let title = actions.page_title_text().await?;
        ensure!(title == "Check Box", "Page title text should be 'Check Box', got {:?}", title);
        Ok(())
    }
    .await;

    harness.finish("page_title_is_check_box", result).await;
}

#[tokio::test]
#[ignore = "requires Chrome and network access to demoqa.com"]
async fn home_node_controls_visible() {
    let harness = common::launch_at("home_node_controls_visible", "checkbox").await;
    let actions = CheckBoxActions::new(harness.session.clone());

    let result = async {
        ensure!(
            actions.is_home_expand_icon_visible().await,
            "> icon (expand/collapse) for Home should be visible"
        );
        ensure!(
            actions.is_home_checkbox_visible().await,
            "Home checkbox should be visible"
        );
        ensure!(
            actions.is_home_folder_icon_visible().await,
            "Home folder icon should be visible"
        );
        ensure!(
            actions.is_home_checkbox_unchecked().await?,
            "Home checkbox should start unchecked"
        );
        Ok(())
    }
    .await;

    harness.finish("home_node_controls_visible", result).await;
}

#[tokio::test]
#[ignore = "requires Chrome and network access to demoqa.com"]
async fn expand_and_collapse_buttons_visible() {
    let harness = common::launch_at("expand_and_collapse_buttons_visible", "checkbox").await;
    let actions = CheckBoxActions::new(harness.session.clone());

    let result = async {
        ensure!(
            actions.is_expand_all_button_visible().await,
            "Expand All button should be visible"
        );
        ensure!(
            actions.is_collapse_all_button_visible().await,
            "Collapse All button should be visible"
        );
        Ok(())
    }
    .await;

    harness
        .finish("expand_and_collapse_buttons_visible", result)
        .await;
}

#[tokio::test]
#[ignore = "requires Chrome and network access to demoqa.com"]
async fn checking_home_checks_the_whole_tree() {
    let harness = common::launch_at("checking_home_checks_the_whole_tree", "checkbox").await;
    let actions = CheckBoxActions::new(harness.session.clone());

    let result = async {
        actions.click_checkbox("Home").await?;
        ensure!(
            actions.is_checkbox_checked("Home").await?,
            "Home checkbox should be checked after clicking"
        );

        actions.click_expand_all().await?;
        ensure!(
            actions.is_subfolder_visible("Desktop").await,
            "Desktop subfolder should be visible after Expand All"
        );

        let checked = actions.checked_folder_names().await?;
        ensure!(
            checked.iter().any(|name| name == "Desktop"),
            "Desktop should be checked when Home is checked, got {:?}",
            checked
        );
        Ok(())
    }
    .await;

    harness
        .finish("checking_home_checks_the_whole_tree", result)
        .await;
}
