//! Suite statistics and screenshot capture on failure

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use tracing::{error, info, warn};

use crate::browser::BrowserSession;
use crate::SuiteConfig;

/// Lock-free counters for a test run
#[derive(Debug, Default)]
pub struct SuiteStats {
    total: AtomicU32,
    passed: AtomicU32,
    failed: AtomicU32,
    skipped: AtomicU32,
}

impl SuiteStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_start(&self, name: &str) {
        info!("Test Case Started: {}", name);
        self.total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_pass(&self, name: &str) {
        info!("Test Case Passed: {}", name);
        self.passed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self, name: &str) {
        error!("Test Case Failed: {}", name);
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_skip(&self, name: &str) {
        warn!("Test Case Skipped: {}", name);
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn total(&self) -> u32 {
        self.total.load(Ordering::Relaxed)
    }
    pub fn passed(&self) -> u32 {
        self.passed.load(Ordering::Relaxed)
    }
    pub fn failed(&self) -> u32 {
        self.failed.load(Ordering::Relaxed)
    }
    pub fn skipped(&self) -> u32 {
        self.skipped.load(Ordering::Relaxed)
    }

    /// Log the end-of-run summary
    pub fn log_summary(&self) {
        info!(
            "Test Execution Summary - Total: {}, Passed: {}, Failed: {}, Skipped: {}",
            self.total(),
            self.passed(),
            self.failed(),
            self.skipped()
        );
    }
}

/// Generate a timestamped screenshot file name
pub fn screenshot_name() -> String {
    format!(
        "screenshot_{}",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    )
}

/// Capture a screenshot into the configured screenshot directory. Capture
/// failures are logged, never fatal; returns the path on success.
pub async fn capture_failure_screenshot(
    session: &BrowserSession,
    config: &SuiteConfig,
) -> Option<PathBuf> {
    let path = PathBuf::from(&config.screenshot_dir).join(format!("{}.png", screenshot_name()));
    match session.save_screenshot(&path).await {
        Ok(()) => {
            info!("Screenshot captured: {}", path.display());
            Some(path)
        }
        Err(e) => {
            warn!("Could not capture screenshot: {}", e);
            None
        }
    }
}
