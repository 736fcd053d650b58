//! Locator expressions for DOM elements
//!
//! A locator is either a CSS selector or an XPath expression. Element lookups
//! run inside the page via evaluated JavaScript, so every locator renders to a
//! JS expression resolving to the element (or null). Selector strings are
//! JSON-encoded on the way in, so quotes in folder names or menu labels cannot
//! break the generated script.

/// A selector expression identifying a DOM element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    Css(String),
    XPath(String),
}

impl Locator {
    /// CSS selector locator
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// XPath locator
    pub fn xpath(expression: impl Into<String>) -> Self {
        Self::XPath(expression.into())
    }

    /// The raw selector string
    pub fn selector(&self) -> &str {
        match self {
            Self::Css(s) | Self::XPath(s) => s,
        }
    }

    /// JS expression evaluating to the first matching element, or null
    pub fn js_expression(&self) -> String {
        match self {
            Self::Css(selector) => {
                format!("document.querySelector({})", js_string(selector))
            }
            Self::XPath(expression) => format!(
                "document.evaluate({}, document, null, XPathResult.FIRST_ORDERED_NODE_TYPE, null).singleNodeValue",
                js_string(expression)
            ),
        }
    }

    /// Short description for logs and error messages
    pub fn describe(&self) -> String {
        match self {
            Self::Css(s) => format!("css={}", s),
            Self::XPath(s) => format!("xpath={}", s),
        }
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

/// JSON-encode a string for safe embedding in generated JavaScript
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}
