//! Bounded polling waits
//!
//! Every wait polls the page at a fixed interval and gives up after a fixed
//! timeout. Timeouts are logged and reported as `false`; callers decide
//! whether a missing element fails the test. Nothing here can hang.

use std::time::Duration;

use tracing::warn;

use super::{BrowserSession, Locator};

/// Default wait for element conditions, in seconds
pub const DEFAULT_WAIT_SECS: u64 = 10;

/// Poll interval between condition checks
const POLL_INTERVAL_MS: u64 = 250;

/// JS visibility condition: attached, has layout, not display:none
fn visible_condition(locator: &Locator) -> String {
    format!(
        "(function() {{ const el = {}; if (!el) return false; return el.offsetParent !== null || el.getClientRects().length > 0; }})()",
        locator.js_expression()
    )
}

/// Poll a JS boolean expression until it returns true or the timeout expires
async fn poll_js_true(session: &BrowserSession, js: &str, timeout_secs: u64) -> bool {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(timeout_secs);
    loop {
        if let Ok(value) = session.execute_js(js).await {
            if value.as_bool() == Some(true) {
                return true;
            }
        }
        if tokio::time::Instant::now() >= deadline {
            return false;
        }
        tokio::time::sleep(Duration::from_millis(POLL_INTERVAL_MS)).await;
    }
}

/// Wait for an element to be visible (default timeout)
pub async fn wait_for_visible(session: &BrowserSession, locator: &Locator) -> bool {
    wait_for_visible_within(session, locator, DEFAULT_WAIT_SECS).await
}

/// Wait for an element to be visible within the given timeout
pub async fn wait_for_visible_within(
    session: &BrowserSession,
    locator: &Locator,
    timeout_secs: u64,
) -> bool {
    let visible = poll_js_true(session, &visible_condition(locator), timeout_secs).await;
    if !visible {
        warn!(
            "Session {} element not visible after {}s: {}",
            session.id, timeout_secs, locator
        );
    }
    visible
}

/// Wait for an element to be visible and enabled
pub async fn wait_for_clickable(session: &BrowserSession, locator: &Locator) -> bool {
    let js = format!(
        "(function() {{ const el = {}; if (!el) return false; const visible = el.offsetParent !== null || el.getClientRects().length > 0; return visible && !el.disabled; }})()",
        locator.js_expression()
    );
    let clickable = poll_js_true(session, &js, DEFAULT_WAIT_SECS).await;
    if !clickable {
        warn!(
            "Session {} element not clickable after {}s: {}",
            session.id, DEFAULT_WAIT_SECS, locator
        );
    }
    clickable
}

/// Wait for an element to disappear from the page
pub async fn wait_for_invisible(session: &BrowserSession, locator: &Locator) -> bool {
    let js = format!("!({})", visible_condition(locator));
    poll_js_true(session, &js, DEFAULT_WAIT_SECS).await
}

/// Wait for the page to finish loading (document.readyState == "complete")
pub async fn wait_for_page_load(session: &BrowserSession) -> bool {
    let loaded = poll_js_true(
        session,
        "document.readyState === 'complete'",
        DEFAULT_WAIT_SECS,
    )
    .await;
    if !loaded {
        warn!(
            "Session {} page did not finish loading within {}s",
            session.id, DEFAULT_WAIT_SECS
        );
    }
    loaded
}

/// Wait until the current URL no longer contains the given fragment.
/// Returns false if the fragment is still present after the timeout.
pub async fn wait_for_url_not_containing(
    session: &BrowserSession,
    fragment: &str,
    timeout_secs: u64,
) -> bool {
    let js = format!(
        "!window.location.href.includes({})",
        serde_json::to_string(fragment).unwrap_or_else(|_| "''".to_string())
    );
    let cleared = poll_js_true(session, &js, timeout_secs).await;
    if !cleared {
        warn!(
            "Session {} URL still contains {:?} after {}s",
            session.id, fragment, timeout_secs
        );
    }
    cleared
}

/// Fixed sleep. Not recommended for real waits; kept for the few flows that
/// need to let animations or ad slots settle.
pub async fn wait_seconds(seconds: u64) {
    tokio::time::sleep(Duration::from_secs(seconds)).await;
}
