//! Shared harness for live component tests
//!
//! Mirrors the per-test lifecycle: launch a fresh browser session, navigate,
//! run the test body, capture a screenshot if it failed, close the session.

#![allow(dead_code)]

use std::sync::Arc;

use once_cell::sync::Lazy;

use demoqa_automation::browser::{waits, BrowserSession};
use demoqa_automation::reporting::{self, SuiteStats};
use demoqa_automation::SuiteConfig;

/// Run-wide pass/fail counters
pub static STATS: Lazy<SuiteStats> = Lazy::new(SuiteStats::new);

/// Initialize logging once per test binary. The appender guard must outlive
/// the process, so it is intentionally leaked.
pub fn init() {
    static LOGGING: std::sync::Once = std::sync::Once::new();
    LOGGING.call_once(|| {
        let guard = demoqa_automation::init_logging();
        std::mem::forget(guard);
    });
}

pub struct TestHarness {
    pub session: Arc<BrowserSession>,
    pub config: SuiteConfig,
}

/// Launch a session and open the landing page
pub async fn launch(test_name: &str) -> TestHarness {
    launch_at(test_name, "").await
}

/// Launch a session and open the given page path under the base URL
pub async fn launch_at(test_name: &str, path: &str) -> TestHarness {
    init();
    STATS.record_start(test_name);

    let config = SuiteConfig::get().clone();
    let session = Arc::new(
        BrowserSession::from_suite_config(&config)
            .await
            .expect("launch browser session"),
    );

    let url = if path.is_empty() {
        config.base_url.clone()
    } else {
        config.page_url(path)
    };
    session.navigate(&url).await.expect("navigate to page under test");
    waits::wait_for_page_load(&session).await;

    TestHarness { session, config }
}

impl TestHarness {
    /// Record the outcome, capture a screenshot on failure, close the
    /// session, then propagate the failure to the test runner.
    pub async fn finish(&self, test_name: &str, result: anyhow::Result<()>) {
        match &result {
            Ok(()) => STATS.record_pass(test_name),
            Err(_) => {
                STATS.record_failure(test_name);
                reporting::capture_failure_screenshot(&self.session, &self.config).await;
            }
        }

        let _ = self.session.close().await;

        if let Err(e) = result {
            panic!("{} failed: {:#}", test_name, e);
        }
    }
}
