//! Page object for the Check Box tree page

use std::sync::Arc;

use crate::browser::{recovery, waits, BrowserError, BrowserSession, Locator};

use super::PageBase;

mod selectors {
    pub const PAGE_TITLE: &str =
        "//h1[contains(@class,'text-center') and text()='Check Box']";
    pub const EXPAND_ALL_BUTTON: &str = "//button[contains(@class,'rct-option-expand-all')]";
    pub const COLLAPSE_ALL_BUTTON: &str = "//button[contains(@class,'rct-option-collapse-all')]";
    pub const HOME_NODE_LI: &str =
        "//span[@class='rct-title' and text()='Home']/ancestor::li[contains(@class,'rct-node-parent')]";
    pub const HOME_CHECKBOX_ICON: &str =
        "//label[span[@class='rct-title' and text()='Home']]/span[@class='rct-checkbox']//*[name()='svg']";
    pub const HOME_EXPAND_BUTTON: &str =
        "//span[@class='rct-title' and text()='Home']/ancestor::li//button[@aria-label='Toggle']";
    pub const HOME_FOLDER_ICON: &str =
        "//label[span[@class='rct-title' and text()='Home']]/span[@class='rct-node-icon']";
    pub const HOME_CHECKBOX: &str =
        "//label[span[@class='rct-title' and text()='Home']]/span[@class='rct-checkbox']";
}

fn folder_by_name(name: &str) -> Locator {
    Locator::xpath(format!(
        "//span[@class='rct-title' and text()='{}']",
        name
    ))
}

fn checkbox_by_name(name: &str) -> Locator {
    Locator::xpath(format!(
        "//span[@class='rct-title' and text()='{}']/preceding-sibling::span[@class='rct-checkbox']",
        name
    ))
}

fn checkbox_icon_by_name(name: &str) -> Locator {
    Locator::xpath(format!(
        "//span[@class='rct-title' and text()='{}']/preceding-sibling::span[@class='rct-checkbox']//*[name()='svg']",
        name
    ))
}

fn expand_icon_by_name(name: &str) -> Locator {
    Locator::xpath(format!(
        "//span[@class='rct-title' and text()='{}']/preceding-sibling::span[contains(@class,'rct-node-icon')]",
        name
    ))
}

/// Page object for the Check Box page: a react-checkbox-tree with
/// expandable folders and tri-state checkboxes.
#[derive(Debug, Clone)]
pub struct CheckBoxPage {
    base: PageBase,
}

impl CheckBoxPage {
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

    // -------------------- Page title --------------------
    pub async fn is_page_title_visible(&self) -> bool {
        waits::wait_for_visible(self.session(), &Locator::xpath(selectors::PAGE_TITLE)).await
    }
    pub async fn page_title_text(&self) -> Result<String, BrowserError> {
        self.session()
            .text_of(&Locator::xpath(selectors::PAGE_TITLE))
            .await
    }

    // -------------------- Expand/collapse --------------------
    pub async fn click_expand_all(&self) -> Result<(), BrowserError> {
        recovery::click_with_recovery(
            self.session(),
            &Locator::xpath(selectors::EXPAND_ALL_BUTTON),
        )
        .await
    }
    pub async fn click_collapse_all(&self) -> Result<(), BrowserError> {
        recovery::click_with_recovery(
            self.session(),
            &Locator::xpath(selectors::COLLAPSE_ALL_BUTTON),
        )
        .await
    }
    pub async fn expand_folder(&self, folder_name: &str) -> Result<(), BrowserError> {
        recovery::click_with_recovery(self.session(), &expand_icon_by_name(folder_name)).await
    }
    pub async fn is_expand_all_button_visible(&self) -> bool {
        waits::wait_for_visible(self.session(), &Locator::xpath(selectors::EXPAND_ALL_BUTTON))
            .await
    }
    pub async fn is_collapse_all_button_visible(&self) -> bool {
        waits::wait_for_visible(
            self.session(),
            &Locator::xpath(selectors::COLLAPSE_ALL_BUTTON),
        )
        .await
    }

    // -------------------- Checkboxes --------------------
    pub async fn click_checkbox(&self, name: &str) -> Result<(), BrowserError> {
        recovery::click_with_recovery(self.session(), &checkbox_by_name(name)).await
    }
    pub async fn is_checkbox_visible(&self, name: &str) -> bool {
        waits::wait_for_visible(self.session(), &checkbox_by_name(name)).await
    }
    pub async fn is_checkbox_checked(&self, name: &str) -> Result<bool, BrowserError> {
        let class = self
            .session()
            .attribute_of(&checkbox_icon_by_name(name), "class")
            .await?;
        Ok(class.contains("rct-icon-check") && !class.contains("rct-icon-half-check"))
    }
    pub async fn is_checkbox_partially_checked(&self, name: &str) -> Result<bool, BrowserError> {
        let class = self
            .session()
            .attribute_of(&checkbox_icon_by_name(name), "class")
            .await?;
        Ok(class.contains("rct-icon-half-check"))
    }

    /// Titles of every folder whose checkbox is fully checked
    pub async fn checked_folder_names(&self) -> Result<Vec<String>, BrowserError> {
        let value = self
            .session()
            .execute_js(
                r#"(function() {
                    const names = [];
                    for (const label of document.querySelectorAll('label')) {
                        const icon = label.querySelector('.rct-checkbox svg');
                        const title = label.querySelector('.rct-title');
                        if (!icon || !title) continue;
                        const cls = icon.getAttribute('class') || '';
                        if (cls.includes('rct-icon-check') && !cls.includes('rct-icon-half-check')) {
                            names.push(title.textContent.trim());
                        }
                    }
                    return names;
                })()"#,
            )
            .await?;
        Ok(value
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default())
    }

    // -------------------- Home node --------------------
    pub async fn is_home_node_expanded(&self) -> Result<bool, BrowserError> {
        let class = self
            .session()
            .attribute_of(&Locator::xpath(selectors::HOME_NODE_LI), "class")
            .await?;
        Ok(class.contains("rct-node-expanded"))
    }
    pub async fn is_home_node_collapsed(&self) -> Result<bool, BrowserError> {
        let class = self
            .session()
            .attribute_of(&Locator::xpath(selectors::HOME_NODE_LI), "class")
            .await?;
        Ok(class.contains("rct-node-collapsed"))
    }
    pub async fn is_home_checkbox_unchecked(&self) -> Result<bool, BrowserError> {
        let class = self
            .session()
            .attribute_of(&Locator::xpath(selectors::HOME_CHECKBOX_ICON), "class")
            .await?;
        Ok(class.contains("rct-icon-uncheck"))
    }
    pub async fn click_home_expand_icon(&self) -> Result<(), BrowserError> {
        recovery::click_with_recovery(
            self.session(),
            &Locator::xpath(selectors::HOME_EXPAND_BUTTON),
        )
        .await
    }
    pub async fn is_home_expand_icon_visible(&self) -> bool {
        waits::wait_for_visible(
            self.session(),
            &Locator::xpath(selectors::HOME_EXPAND_BUTTON),
        )
        .await
    }
    pub async fn is_home_checkbox_visible(&self) -> bool {
        waits::wait_for_visible(self.session(), &Locator::xpath(selectors::HOME_CHECKBOX)).await
    }
    pub async fn is_home_folder_icon_visible(&self) -> bool {
        waits::wait_for_visible(self.session(), &Locator::xpath(selectors::HOME_FOLDER_ICON))
            .await
    }
    pub async fn is_subfolder_visible(&self, name: &str) -> bool {
        waits::wait_for_visible(self.session(), &folder_by_name(name)).await
    }
}
