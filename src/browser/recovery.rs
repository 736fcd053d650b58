//! Click recovery for popup/ad interception
//!
//! demoqa.com serves interstitial ads that cover click targets: a Google
//! vignette that rewrites the URL fragment, modal popups with assorted close
//! buttons, and a fixed footer banner. Every click that matters goes through
//! [`click_with_recovery`], which detects interception, dismisses what it can
//! and retries a bounded number of times before giving up.

use tracing::{debug, info, warn};

use super::{waits, BrowserError, BrowserSession, Locator};

/// URL fragment appended by the Google vignette ad redirect
pub const AD_REDIRECT_MARKER: &str = "#google_vignette";

/// Total click attempts before the interception error propagates
pub const MAX_CLICK_ATTEMPTS: usize = 3;

/// How long to wait for the ad redirect marker to clear from the URL
pub const VIGNETTE_CLEAR_WAIT_SECS: u64 = 5;

/// Whether a URL carries the ad redirect marker
pub fn url_has_ad_marker(url: &str) -> bool {
    url.contains(AD_REDIRECT_MARKER)
}

/// Known popup/ad dismiss buttons, tried in order. The first visible match
/// gets clicked.
pub fn popup_close_selectors() -> Vec<Locator> {
    vec![
        Locator::xpath("//button[normalize-space()='Close']"),
        Locator::xpath("//button[contains(@class,'close')]"),
        Locator::xpath(
            "//div[contains(@class,'close') or contains(@class,'Close') or contains(@class,'modal-close') or contains(@class,'popup-close')]",
        ),
        Locator::css(".close, .close-btn, .close-button, .modal-close, .popup-close"),
        Locator::xpath("//span[text()='\u{d7}']"),
        Locator::xpath("//button[@aria-label='Close']"),
    ]
}

/// Attempt a single click on the locator.
///
/// The element's click point is hit-tested first; if another element covers
/// it, the click is not dispatched and `ClickIntercepted` is returned so the
/// caller can recover. Off-screen targets are scrolled into view before the
/// hit test, mirroring what a driver-level click would do.
pub async fn try_click(session: &BrowserSession, locator: &Locator) -> Result<(), BrowserError> {
    let js = format!(
        r#"(function() {{
            const el = {};
            if (!el) return {{ found: false }};
            let rect = el.getBoundingClientRect();
            if (rect.width === 0 && rect.height === 0) return {{ found: true, interactable: false }};
            let x = rect.left + rect.width / 2;
            let y = rect.top + rect.height / 2;
            if (x < 0 || y < 0 || x > window.innerWidth || y > window.innerHeight) {{
                el.scrollIntoView({{ block: 'center' }});
                rect = el.getBoundingClientRect();
                x = rect.left + rect.width / 2;
                y = rect.top + rect.height / 2;
            }}
            const hit = document.elementFromPoint(x, y);
            const intercepted = hit !== null && hit !== el && !el.contains(hit) && !hit.contains(el);
            let coveredBy = null;
            if (intercepted) {{
                coveredBy = hit.tagName.toLowerCase();
                if (hit.id) coveredBy += '#' + hit.id;
                else if (typeof hit.className === 'string' && hit.className.trim()) {{
                    coveredBy += '.' + hit.className.trim().split(/\s+/).join('.');
                }}
            }}
            return {{ found: true, interactable: true, x: x, y: y, intercepted: intercepted, coveredBy: coveredBy }};
        }})()"#,
        locator.js_expression()
    );

    let probe = session.execute_js(&js).await?;

    if probe.get("found").and_then(|v| v.as_bool()) != Some(true) {
        return Err(BrowserError::ElementNotFound(locator.describe()));
    }
    if probe.get("interactable").and_then(|v| v.as_bool()) != Some(true) {
        return Err(BrowserError::ElementNotFound(format!(
            "{} has no size",
            locator.describe()
        )));
    }
    if probe.get("intercepted").and_then(|v| v.as_bool()) == Some(true) {
        let covered_by = probe
            .get("coveredBy")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown element")
            .to_string();
        return Err(BrowserError::ClickIntercepted {
            target: locator.describe(),
            covered_by,
        });
    }

    let x = probe.get("x").and_then(|v| v.as_f64()).unwrap_or_default();
    let y = probe.get("y").and_then(|v| v.as_f64()).unwrap_or_default();
    session.click_at(x, y).await
}

/// Click with interception recovery.
///
/// On interception: check the URL for the ad redirect marker, close known
/// popups, wait for the marker to clear, and retry; on a second interception
/// scroll the target into view and retry once more. At most
/// [`MAX_CLICK_ATTEMPTS`] clicks are attempted; the final failure propagates.
pub async fn click_with_recovery(
    session: &BrowserSession,
    locator: &Locator,
) -> Result<(), BrowserError> {
    for attempt in 1..MAX_CLICK_ATTEMPTS {
        match try_click(session, locator).await {
            Ok(()) => {
                if attempt > 1 {
                    info!(
                        "Session {} click on {} recovered on attempt {}",
                        session.id, locator, attempt
                    );
                }
                return Ok(());
            }
            Err(err @ BrowserError::ClickIntercepted { .. }) => {
                warn!(
                    "Session {} click attempt {}/{} blocked: {}",
                    session.id, attempt, MAX_CLICK_ATTEMPTS, err
                );
                if attempt == 1 {
                    let url = session.current_url().await.unwrap_or_default();
                    if url_has_ad_marker(&url) {
                        close_known_popups(session).await;
                        waits::wait_for_url_not_containing(
                            session,
                            AD_REDIRECT_MARKER,
                            VIGNETTE_CLEAR_WAIT_SECS,
                        )
                        .await;
                    } else {
                        close_known_popups(session).await;
                    }
                } else {
                    let _ = scroll_into_view(session, locator).await;
                }
            }
            Err(other) => return Err(other),
        }
    }

    // Final attempt; failure propagates to the caller
    try_click(session, locator).await
}

/// Try to close any known pop-ups or ads. Walks the fixed selector list and
/// clicks the first visible match. Returns whether anything was dismissed.
pub async fn close_known_popups(session: &BrowserSession) -> bool {
    for locator in popup_close_selectors() {
        if is_visible_now(session, &locator).await {
            match js_click(session, &locator).await {
                Ok(()) => {
                    info!("Session {} closed pop-up/ad using: {}", session.id, locator);
                    return true;
                }
                Err(e) => {
                    debug!(
                        "Session {} pop-up close via {} failed: {}",
                        session.id, locator, e
                    );
                }
            }
        }
    }
    false
}

/// Hide demoqa's fixed footer banner, which overlaps targets near the bottom
/// of the viewport. Missing banner is fine.
pub async fn hide_fixed_banner(session: &BrowserSession) {
    let _ = session
        .execute_js("var el = document.getElementById('fixedban'); if (el) el.style.display = 'none';")
        .await;
}

/// Scroll an element to the vertical center of the viewport
pub async fn scroll_into_view(
    session: &BrowserSession,
    locator: &Locator,
) -> Result<(), BrowserError> {
    let js = format!(
        "(function() {{ const el = {}; if (!el) return false; el.scrollIntoView({{ block: 'center' }}); return true; }})()",
        locator.js_expression()
    );
    let value = session.execute_js(&js).await?;
    if value.as_bool() == Some(true) {
        Ok(())
    } else {
        Err(BrowserError::ElementNotFound(locator.describe()))
    }
}

/// Fallback click through the DOM API, bypassing hit testing. Used as a last
/// resort when native clicks keep getting intercepted.
pub async fn js_click(session: &BrowserSession, locator: &Locator) -> Result<(), BrowserError> {
    let js = format!(
        "(function() {{ const el = {}; if (!el) return false; el.click(); return true; }})()",
        locator.js_expression()
    );
    let value = session.execute_js(&js).await?;
    if value.as_bool() == Some(true) {
        Ok(())
    } else {
        Err(BrowserError::ElementNotFound(locator.describe()))
    }
}

/// Whether the element is visible right now, without waiting
async fn is_visible_now(session: &BrowserSession, locator: &Locator) -> bool {
    let js = format!(
        "(function() {{ const el = {}; return !!el && (el.offsetParent !== null || el.getClientRects().length > 0); }})()",
        locator.js_expression()
    );
    matches!(session.execute_js(&js).await, Ok(v) if v.as_bool() == Some(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_ad_marker_in_url() {
        assert!(url_has_ad_marker(
            "https://demoqa.com/elements#google_vignette"
        ));
        assert!(!url_has_ad_marker("https://demoqa.com/elements"));
        assert!(!url_has_ad_marker(""));
    }

    #[test]
    fn popup_selector_list_is_fixed_and_ordered() {
        let selectors = popup_close_selectors();
        // close_known_popups terminates after at most this many probes
        assert_eq!(selectors.len(), 6);
        assert_eq!(
            selectors[0],
            Locator::xpath("//button[normalize-space()='Close']")
        );
        assert_eq!(
            selectors[5],
            Locator::xpath("//button[@aria-label='Close']")
        );
    }

    #[test]
    fn click_attempts_are_bounded() {
        assert_eq!(MAX_CLICK_ATTEMPTS, 3);
        assert!(VIGNETTE_CLEAR_WAIT_SECS <= waits::DEFAULT_WAIT_SECS);
    }
}
