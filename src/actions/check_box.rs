//! Actions for the Check Box page
//!
//! Encapsulates user workflows for interacting with the checkbox tree:
//! folders, tri-state checkboxes and the expand/collapse controls.

use std::sync::Arc;

use tracing::info;

use crate::browser::{BrowserError, BrowserSession};
use crate::pages::CheckBoxPage;

pub struct CheckBoxActions {
    page: CheckBoxPage,
}

impl CheckBoxActions {
    pub fn new(session: Arc<BrowserSession>) -> Self {
        Self {
            page: CheckBoxPage::new(session),
        }
    }

    pub async fn current_url(&self) -> Result<String, BrowserError> {
        self.page.base().current_url().await
    }
    pub async fn navigate_to(&self, url: &str) -> Result<(), BrowserError> {
        self.page.base().navigate_to(url).await
    }

    // -------------------- Page title --------------------
    pub async fn is_page_title_visible(&self) -> bool {
        info!("Verifying Check Box page title is visible");
        self.page.is_page_title_visible().await
    }
    pub async fn page_title_text(&self) -> Result<String, BrowserError> {
        info!("Getting Check Box page title text");
        self.page.page_title_text().await
    }

    // -------------------- Expand/collapse --------------------
    pub async fn click_expand_all(&self) -> Result<(), BrowserError> {
        info!("Clicking Expand All button");
        self.page.click_expand_all().await
    }
    pub async fn click_collapse_all(&self) -> Result<(), BrowserError> {
        info!("Clicking Collapse All button");
        self.page.click_collapse_all().await
    }
    pub async fn expand_folder(&self, folder_name: &str) -> Result<(), BrowserError> {
        info!("Expanding folder: {}", folder_name);
        self.page.expand_folder(folder_name).await
    }

    // -------------------- Checkboxes --------------------
    pub async fn click_checkbox(&self, name: &str) -> Result<(), BrowserError> {
        info!("Clicking checkbox: {}", name);
        self.page.click_checkbox(name).await
    }
    pub async fn is_checkbox_checked(&self, name: &str) -> Result<bool, BrowserError> {
        info!("Checking if checkbox '{}' is checked", name);
        self.page.is_checkbox_checked(name).await
    }
    pub async fn is_checkbox_partially_checked(&self, name: &str) -> Result<bool, BrowserError> {
        info!("Checking if checkbox '{}' is partially checked", name);
        self.page.is_checkbox_partially_checked(name).await
    }
    pub async fn is_checkbox_visible(&self, name: &str) -> bool {
        info!("Checking if checkbox '{}' is visible", name);
        self.page.is_checkbox_visible(name).await
    }
    pub async fn checked_folder_names(&self) -> Result<Vec<String>, BrowserError> {
        info!("Getting all checked checkbox names");
        self.page.checked_folder_names().await
    }

    // -------------------- Button visibility --------------------
    pub async fn is_expand_all_button_visible(&self) -> bool {
        self.page.is_expand_all_button_visible().await
    }
    pub async fn is_collapse_all_button_visible(&self) -> bool {
        self.page.is_collapse_all_button_visible().await
    }

    // -------------------- Home node --------------------
    pub async fn is_home_node_expanded(&self) -> Result<bool, BrowserError> {
        self.page.is_home_node_expanded().await
    }
    pub async fn is_home_node_collapsed(&self) -> Result<bool, BrowserError> {
        self.page.is_home_node_collapsed().await
    }
    pub async fn is_home_checkbox_unchecked(&self) -> Result<bool, BrowserError> {
        self.page.is_home_checkbox_unchecked().await
    }
    pub async fn click_home_expand_icon(&self) -> Result<(), BrowserError> {
        self.page.click_home_expand_icon().await
    }
    pub async fn is_subfolder_visible(&self, name: &str) -> bool {
        self.page.is_subfolder_visible(name).await
    }
    pub async fn is_home_expand_icon_visible(&self) -> bool {
        self.page.is_home_expand_icon_visible().await
    }
    pub async fn is_home_checkbox_visible(&self) -> bool {
        self.page.is_home_checkbox_visible().await
    }
    pub async fn is_home_folder_icon_visible(&self) -> bool {
        self.page.is_home_folder_icon_visible().await
    }
}
