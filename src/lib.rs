//! DemoQA UI Automation
//!
//! A page-object browser automation suite for demoqa.com with
//! popup/ad-interception recovery around every click that matters.

pub mod actions;
pub mod browser;
pub mod pages;
pub mod reporting;

use std::path::PathBuf;

use once_cell::sync::Lazy;
use tracing::{info, warn};

/// Suite configuration
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuiteConfig {
    /// Base URL of the site under test
    pub base_url: String,
    /// Run the browser in headless mode
    pub headless: bool,
    /// Explicit Chrome/Chromium executable path (None = auto-detect)
    pub chrome_path: Option<String>,
    /// Directory for failure screenshots
    pub screenshot_dir: String,
    /// Browser window width
    pub window_width: u32,
    /// Browser window height
    pub window_height: u32,
    /// Navigation timeout in seconds
    pub nav_timeout_secs: u64,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://demoqa.com/".to_string(),
            headless: true,
            chrome_path: None,
            screenshot_dir: "target/screenshots".to_string(),
            window_width: 1920,
            window_height: 1080,
            nav_timeout_secs: 30,
        }
    }
}

/// Cached process-wide configuration
static CONFIG: Lazy<SuiteConfig> = Lazy::new(SuiteConfig::load);

impl SuiteConfig {
    /// Config file path: `DEMOQA_CONFIG` env var or `demoqa-automation.json`
    /// in the working directory.
    fn config_path() -> PathBuf {
        std::env::var("DEMOQA_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("demoqa-automation.json"))
    }

    /// Load config from file, then apply environment overrides.
    /// A missing or unparsable file falls back to defaults.
    pub fn load() -> Self {
        let mut config = Self::load_from(&Self::config_path());

        if let Ok(base_url) = std::env::var("DEMOQA_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(headless) = std::env::var("DEMOQA_HEADLESS") {
            config.headless = headless.eq_ignore_ascii_case("true") || headless == "1";
        }

        config
    }

    /// Load config from a specific file path, defaulting on any failure.
    pub fn load_from(path: &std::path::Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => {
                        info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        warn!("Failed to parse config file {:?}: {}", path, e);
                    }
                },
                Err(e) => {
                    warn!("Failed to read config file {:?}: {}", path, e);
                }
            }
        }
        Self::default()
    }

    /// Shared cached instance
    pub fn get() -> &'static Self {
        &CONFIG
    }

    /// Resolve a page path against the base URL, e.g. `"text-box"` ->
    /// `"https://demoqa.com/text-box"`.
    pub fn page_url(&self, path: &str) -> String {
        match url::Url::parse(&self.base_url).and_then(|base| base.join(path)) {
            Ok(joined) => joined.to_string(),
            Err(e) => {
                warn!("Could not join {:?} onto base URL {:?}: {}", path, self.base_url, e);
                format!("{}/{}", self.base_url.trim_end_matches('/'), path)
            }
        }
    }
}

/// Get log directory path (shared across modules)
pub fn log_dir() -> PathBuf {
    PathBuf::from("logs")
}

/// Initialize logging: console plus a daily rolling file under `logs/`.
/// Returns the appender guard; keep it alive for the duration of the run.
pub fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false);

    let log_dir = log_dir();
    if std::fs::create_dir_all(&log_dir).is_ok() {
        let file_appender = tracing_appender::rolling::daily(&log_dir, "demoqa-automation.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_writer(non_blocking);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .init();

        Some(guard)
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .init();

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_points_at_demoqa() {
        let config = SuiteConfig::default();
        assert_eq!(config.base_url, "https://demoqa.com/");
        assert!(config.headless);
        assert_eq!(config.window_width, 1920);
        assert_eq!(config.window_height, 1080);
    }

    #[test]
    fn load_from_missing_file_falls_back_to_defaults() {
        let config = SuiteConfig::load_from(std::path::Path::new("does-not-exist.json"));
        assert_eq!(config.base_url, SuiteConfig::default().base_url);
    }

    #[test]
    fn load_from_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"baseUrl": "http://localhost:8080/", "headless": false}}"#
        )
        .expect("write config");

        let config = SuiteConfig::load_from(file.path());
        assert_eq!(config.base_url, "http://localhost:8080/");
        assert!(!config.headless);
        // Unspecified keys keep their defaults
        assert_eq!(config.screenshot_dir, "target/screenshots");
    }

    #[test]
    fn load_from_garbage_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not json at all").expect("write config");

        let config = SuiteConfig::load_from(file.path());
        assert_eq!(config.base_url, SuiteConfig::default().base_url);
    }

    #[test]
    fn page_url_joins_paths() {
        let config = SuiteConfig::default();
        assert_eq!(config.page_url("text-box"), "https://demoqa.com/text-box");
        assert_eq!(config.page_url("checkbox"), "https://demoqa.com/checkbox");
    }

    #[test]
    fn page_url_survives_unparsable_base() {
        let config = SuiteConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert_eq!(config.page_url("elements"), "not a url/elements");
    }
}
