//! Browser session management
//!
//! Handles launching and controlling a single Chrome browser instance over
//! the DevTools Protocol. Each test owns its own session, so parallel test
//! runners stay isolated from each other.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::input::{
    DispatchMouseEventParams, DispatchMouseEventType, MouseButton,
};
use chromiumoxide::cdp::browser_protocol::page::{
    CaptureScreenshotFormat, CaptureScreenshotParams,
};
use chromiumoxide::page::Page;
use futures::StreamExt;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::{BrowserError, Locator};
use crate::SuiteConfig;

/// Global counter for sequential session naming (session-1, session-2, ...)
static SESSION_COUNTER: AtomicU32 = AtomicU32::new(1);

/// Find Chrome/Chromium executable on the system
fn find_chrome() -> Option<std::path::PathBuf> {
    let candidates: Vec<std::path::PathBuf> = if cfg!(target_os = "windows") {
        let mut paths = vec![
            std::path::PathBuf::from(r"C:\Program Files\Google\Chrome\Application\chrome.exe"),
            std::path::PathBuf::from(
                r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
            ),
        ];
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            paths.push(std::path::PathBuf::from(format!(
                r"{}\Google\Chrome\Application\chrome.exe",
                local
            )));
        }
        paths
    } else if cfg!(target_os = "macos") {
        vec![std::path::PathBuf::from(
            "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
        )]
    } else {
        vec![
            std::path::PathBuf::from("/usr/bin/google-chrome"),
            std::path::PathBuf::from("/usr/bin/google-chrome-stable"),
            std::path::PathBuf::from("/usr/bin/chromium"),
            std::path::PathBuf::from("/usr/bin/chromium-browser"),
        ]
    };

    candidates.into_iter().find(|p| p.exists())
}

/// Configuration for a browser session
#[derive(Debug, Clone)]
pub struct BrowserSessionConfig {
    /// Path to Chrome/Chromium executable
    pub chrome_path: Option<String>,
    /// Run in headless mode
    pub headless: bool,
    /// User data directory
    pub user_data_dir: Option<String>,
    /// Navigation/JS timeout in seconds
    pub timeout_secs: u64,
    /// Window width
    pub window_width: u32,
    /// Window height
    pub window_height: u32,
}

impl Default for BrowserSessionConfig {
    fn default() -> Self {
        Self {
            chrome_path: None,
            headless: true,
            user_data_dir: None,
            timeout_secs: 30,
            window_width: 1920,
            window_height: 1080,
        }
    }
}

impl BrowserSessionConfig {
    /// Create a session config from the suite config, with a unique
    /// user data directory under the system temp dir.
    pub fn from_suite(config: &SuiteConfig) -> Self {
        let user_data_dir = std::env::temp_dir()
            .join("demoqa-automation")
            .join("browser_data")
            .join(uuid::Uuid::new_v4().to_string())
            .to_string_lossy()
            .to_string();

        Self {
            chrome_path: config.chrome_path.clone(),
            headless: config.headless,
            user_data_dir: Some(user_data_dir),
            timeout_secs: config.nav_timeout_secs,
            window_width: config.window_width,
            window_height: config.window_height,
        }
    }
}

/// A browser session for automation
#[derive(Debug)]
pub struct BrowserSession {
    /// Unique session ID (display name, e.g. "session-1")
    pub id: String,
    /// The browser instance
    browser: Arc<RwLock<Option<Browser>>>,
    /// Current active page
    page: Arc<RwLock<Option<Page>>>,
    /// Session configuration
    config: BrowserSessionConfig,
    /// Whether session is alive
    alive: Arc<AtomicBool>,
}

impl BrowserSession {
    /// Launch a new browser session with the given config
    pub async fn new(config: BrowserSessionConfig) -> Result<Self, BrowserError> {
        let session_id = format!("session-{}", SESSION_COUNTER.fetch_add(1, Ordering::Relaxed));

        info!(
            "Launching browser session {} (headless: {})",
            session_id, config.headless
        );

        // Check if Chrome is available before attempting launch
        if config.chrome_path.is_none() && find_chrome().is_none() {
            return Err(BrowserError::LaunchFailed(
                "Chrome/Chromium not found. Install Chrome or set chromePath in the suite config."
                    .to_string(),
            ));
        }

        let mut builder = BrowserConfig::builder();

        // The builder defaults to headless; opt out for headed runs
        if !config.headless {
            builder = builder.with_head();
        }

        // Required when running as root (e.g., in Docker or CI)
        builder = builder.no_sandbox();

        if let Some(ref path) = config.chrome_path {
            builder = builder.chrome_executable(path);
        } else if let Some(chrome_path) = find_chrome() {
            info!("Auto-detected Chrome at: {}", chrome_path.display());
            builder = builder.chrome_executable(chrome_path);
        }

        if let Some(ref dir) = config.user_data_dir {
            let _ = std::fs::create_dir_all(dir);
            builder = builder.user_data_dir(dir);
        }

        builder = builder
            .window_size(config.window_width, config.window_height)
            .args(vec![
                "--disable-gpu",
                "--disable-dev-shm-usage",
                "--disable-extensions",
                "--disable-notifications",
                "--no-first-run",
                "--no-default-browser-check",
            ]);

        let browser_config = builder
            .build()
            .map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;

        // Spawn handler in background; when the handler ends, Chrome has
        // disconnected or crashed.
        let session_id_clone = session_id.clone();
        let alive_flag = Arc::new(AtomicBool::new(true));
        let alive_for_handler = alive_flag.clone();
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
            warn!(
                "Session {} Chrome disconnected (event handler ended)",
                session_id_clone
            );
            alive_for_handler.store(false, Ordering::Relaxed);
        });

        // Chrome opens with a blank tab: take it as the main page and close
        // any extras.
        let page = {
            let mut pages = browser
                .pages()
                .await
                .map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;

            let main_page = if !pages.is_empty() {
                pages.remove(0)
            } else {
                browser
                    .new_page("about:blank")
                    .await
                    .map_err(|e| BrowserError::LaunchFailed(e.to_string()))?
            };

            for extra_page in pages {
                debug!("Closing extra blank tab");
                let _ = extra_page.close().await;
            }

            main_page
        };

        info!("Browser session {} created", session_id);

        Ok(Self {
            id: session_id,
            browser: Arc::new(RwLock::new(Some(browser))),
            page: Arc::new(RwLock::new(Some(page))),
            config,
            alive: alive_flag,
        })
    }

    /// Launch a session configured from the shared suite config
    pub async fn from_suite_config(config: &SuiteConfig) -> Result<Self, BrowserError> {
        Self::new(BrowserSessionConfig::from_suite(config)).await
    }

    /// Get session ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Check if the session is alive
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Navigate to a URL
    pub async fn navigate(&self, url: &str) -> Result<(), BrowserError> {
        let page = self.page.read().await;
        let page = page
            .as_ref()
            .ok_or(BrowserError::ConnectionLost("No active page".into()))?;

        debug!("Session {} navigating to: {}", self.id, url);
        page.goto(url)
            .await
            .map_err(|e| BrowserError::NavigationFailed(e.to_string()))?;

        Ok(())
    }

    /// Wait for navigation to complete, bounded by the session timeout
    pub async fn wait_for_navigation(&self) -> Result<(), BrowserError> {
        let page = self.page.read().await;
        let page = page
            .as_ref()
            .ok_or(BrowserError::ConnectionLost("No active page".into()))?;

        tokio::time::timeout(
            Duration::from_secs(self.config.timeout_secs),
            page.wait_for_navigation(),
        )
        .await
        .map_err(|_| BrowserError::Timeout("Navigation timeout".into()))?
        .map_err(|e| BrowserError::NavigationFailed(e.to_string()))?;

        Ok(())
    }

    /// Execute JavaScript on the page with the session's default timeout
    pub async fn execute_js(&self, script: &str) -> Result<serde_json::Value, BrowserError> {
        self.execute_js_with_timeout(script, self.config.timeout_secs).await
    }

    /// Execute JavaScript on the page with a custom timeout (in seconds)
    pub async fn execute_js_with_timeout(
        &self,
        script: &str,
        timeout_secs: u64,
    ) -> Result<serde_json::Value, BrowserError> {
        let page = self.page.read().await;
        let page = page
            .as_ref()
            .ok_or(BrowserError::ConnectionLost("No active page".into()))?;

        let result = tokio::time::timeout(
            Duration::from_secs(timeout_secs),
            page.evaluate(script.to_string()),
        )
        .await
        .map_err(|_| {
            BrowserError::Timeout(format!(
                "JavaScript execution timed out after {}s",
                timeout_secs
            ))
        })?
        .map_err(|e| BrowserError::JavaScriptError(e.to_string()))?;

        Ok(result.value().cloned().unwrap_or(serde_json::Value::Null))
    }

    /// Get current URL
    pub async fn current_url(&self) -> Result<String, BrowserError> {
        let page = self.page.read().await;
        let page = page
            .as_ref()
            .ok_or(BrowserError::ConnectionLost("No active page".into()))?;

        page.url()
            .await
            .map_err(|e| BrowserError::ConnectionLost(e.to_string()))?
            .ok_or_else(|| BrowserError::ConnectionLost("No URL".into()))
    }

    /// Get the current page title
    pub async fn title(&self) -> Result<String, BrowserError> {
        let value = self.execute_js("document.title").await?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }

    /// Reload the current page
    pub async fn reload(&self) -> Result<(), BrowserError> {
        debug!("Session {} reloading page", self.id);
        // The evaluation context is torn down mid-call; errors here are expected
        let _ = self.execute_js("location.reload()").await;
        Ok(())
    }

    /// Navigate back to the previous page
    pub async fn go_back(&self) -> Result<(), BrowserError> {
        debug!("Session {} navigating back", self.id);
        let _ = self.execute_js("history.back()").await;
        Ok(())
    }

    /// Whether an element matching the locator exists in the DOM
    pub async fn is_present(&self, locator: &Locator) -> Result<bool, BrowserError> {
        let js = format!("!!({})", locator.js_expression());
        let value = self.execute_js(&js).await?;
        Ok(value.as_bool().unwrap_or(false))
    }

    /// Visible text of an element, or empty string when missing
    pub async fn text_of(&self, locator: &Locator) -> Result<String, BrowserError> {
        let js = format!(
            "(function() {{ const el = {}; if (!el) return ''; return (el.innerText || el.textContent || '').trim(); }})()",
            locator.js_expression()
        );
        let value = self.execute_js(&js).await?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }

    /// Attribute value of an element, or empty string when missing
    pub async fn attribute_of(
        &self,
        locator: &Locator,
        attribute: &str,
    ) -> Result<String, BrowserError> {
        let js = format!(
            "(function() {{ const el = {}; if (!el) return ''; return el.getAttribute({}) || ''; }})()",
            locator.js_expression(),
            serde_json::to_string(attribute).unwrap_or_else(|_| "''".to_string())
        );
        let value = self.execute_js(&js).await?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }

    /// Current value property of an input/textarea, or empty string
    pub async fn value_of(&self, locator: &Locator) -> Result<String, BrowserError> {
        let js = format!(
            "(function() {{ const el = {}; if (!el) return ''; return el.value !== undefined ? String(el.value) : (el.getAttribute('value') || ''); }})()",
            locator.js_expression()
        );
        let value = self.execute_js(&js).await?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }

    /// Clear a field and type text into it, firing input events so React
    /// forms pick the value up.
    pub async fn type_text(&self, locator: &Locator, text: &str) -> Result<(), BrowserError> {
        let js = format!(
            r#"(function() {{
                const el = {};
                if (!el) return false;
                el.focus();
                const proto = el.tagName === 'TEXTAREA'
                    ? HTMLTextAreaElement.prototype
                    : HTMLInputElement.prototype;
                const setter = Object.getOwnPropertyDescriptor(proto, 'value').set;
                setter.call(el, {});
                el.dispatchEvent(new Event('input', {{ bubbles: true }}));
                el.dispatchEvent(new Event('change', {{ bubbles: true }}));
                return true;
            }})()"#,
            locator.js_expression(),
            serde_json::to_string(text).unwrap_or_else(|_| "''".to_string())
        );
        let value = self.execute_js(&js).await?;
        if value.as_bool() == Some(true) {
            Ok(())
        } else {
            Err(BrowserError::ElementNotFound(locator.describe()))
        }
    }

    /// Dispatch a native left click at page coordinates
    pub async fn click_at(&self, x: f64, y: f64) -> Result<(), BrowserError> {
        let page = self.page.read().await;
        let page = page
            .as_ref()
            .ok_or(BrowserError::ConnectionLost("No active page".into()))?;

        let mouse_down = DispatchMouseEventParams::builder()
            .r#type(DispatchMouseEventType::MousePressed)
            .x(x)
            .y(y)
            .button(MouseButton::Left)
            .click_count(1)
            .build()
            .unwrap();
        page.execute(mouse_down)
            .await
            .map_err(|e| BrowserError::JavaScriptError(format!("CDP mouseDown failed: {}", e)))?;

        let mouse_up = DispatchMouseEventParams::builder()
            .r#type(DispatchMouseEventType::MouseReleased)
            .x(x)
            .y(y)
            .button(MouseButton::Left)
            .click_count(1)
            .build()
            .unwrap();
        page.execute(mouse_up)
            .await
            .map_err(|e| BrowserError::JavaScriptError(format!("CDP mouseUp failed: {}", e)))?;

        Ok(())
    }

    /// Capture a PNG screenshot of the current page
    pub async fn screenshot_png(&self) -> Result<Vec<u8>, BrowserError> {
        let page = self.page.read().await;
        let page = page
            .as_ref()
            .ok_or(BrowserError::ConnectionLost("No active page".into()))?;

        let params = CaptureScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .build();

        let screenshot = page
            .execute(params)
            .await
            .map_err(|e| BrowserError::ScreenshotFailed(e.to_string()))?;

        base64::engine::general_purpose::STANDARD
            .decode(&screenshot.data)
            .map_err(|e| BrowserError::ScreenshotFailed(e.to_string()))
    }

    /// Capture a screenshot and write it to the given path, creating parent
    /// directories as needed.
    pub async fn save_screenshot(&self, path: &std::path::Path) -> Result<(), BrowserError> {
        let png = self.screenshot_png().await?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, png)?;
        info!("Session {} screenshot saved: {}", self.id, path.display());
        Ok(())
    }

    /// Close the browser session
    pub async fn close(&self) -> Result<(), BrowserError> {
        // Mark as not alive first to prevent new operations
        self.alive.store(false, Ordering::Relaxed);

        // 1. Close page first (stops navigation/JS execution)
        {
            let mut page = self.page.write().await;
            if let Some(p) = page.take() {
                let _ = p.close().await;
            }
        }

        // 2. Close browser: graceful close, brief grace period, then force
        // kill so no Chrome child processes outlive the test run.
        {
            let mut browser = self.browser.write().await;
            if let Some(mut b) = browser.take() {
                let _ = b.close().await;
                tokio::time::sleep(Duration::from_millis(500)).await;
                let _ = b.kill().await;
            }
        }

        info!("Browser session {} closed", self.id);
        Ok(())
    }
}
