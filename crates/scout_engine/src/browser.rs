use std::ffi::OsStr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use headless_chrome::{Browser, LaunchOptions, Tab};
use scout_logging::{scout_debug, scout_info};

use crate::{FailureKind, FetchError, PageFetcher};

#[derive(Debug, Clone)]
pub struct BrowserSettings {
    /// Bounded wait for the content marker to appear in the rendered DOM.
    pub wait_timeout: Duration,
    /// CSS selector that signals the page content has rendered.
    pub content_marker: String,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            wait_timeout: Duration::from_secs(10),
            content_marker: "body".to_string(),
        }
    }
}

/// Automated-session backend: one headless Chrome instance, launched at
/// construction and reused for every `fetch` across the whole run.
///
/// The browser process is released exactly once when the fetcher is
/// dropped. Navigations share a single tab and are serialized behind a
/// mutex; two concurrent navigations on one session would corrupt both
/// results.
pub struct BrowserFetcher {
    // Keeps the Chrome process alive; killed on drop.
    _browser: Browser,
    tab: Arc<Tab>,
    nav_lock: Arc<Mutex<()>>,
    settings: BrowserSettings,
}

impl BrowserFetcher {
    pub fn new(settings: BrowserSettings) -> Result<Self, FetchError> {
        scout_info!("Launching headless Chrome session");

        let options = LaunchOptions {
            headless: true,
            sandbox: false,
            args: vec![
                OsStr::new("--disable-blink-features=AutomationControlled"),
                OsStr::new("--disable-dev-shm-usage"),
                OsStr::new("--window-size=1920,1080"),
            ],
            ..Default::default()
        };

        let browser = Browser::new(options).map_err(|err| {
            FetchError::new(
                FailureKind::Render,
                format!("failed to launch headless Chrome: {err}"),
            )
        })?;
        let tab = browser
            .new_tab()
            .map_err(|err| FetchError::new(FailureKind::Render, err.to_string()))?;

        Ok(Self {
            _browser: browser,
            tab,
            nav_lock: Arc::new(Mutex::new(())),
            settings,
        })
    }
}

#[async_trait::async_trait]
impl PageFetcher for BrowserFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        url::Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let tab = self.tab.clone();
        let lock = self.nav_lock.clone();
        let marker = self.settings.content_marker.clone();
        let wait = self.settings.wait_timeout;
        let url = url.to_string();

        // headless_chrome drives the DevTools protocol synchronously.
        tokio::task::spawn_blocking(move || {
            let _guard = lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            scout_debug!("Navigating browser session to {}", url);

            tab.navigate_to(&url)
                .map_err(|err| FetchError::new(FailureKind::Render, err.to_string()))?;
            // headless_chrome reports an exhausted wait budget and a marker
            // that never appeared through the same error; both surface as
            // Timeout here.
            tab.wait_for_element_with_custom_timeout(&marker, wait)
                .map_err(|err| {
                    FetchError::new(
                        FailureKind::Timeout,
                        format!("content marker {marker:?} did not appear: {err}"),
                    )
                })?;
            tab.get_content()
                .map_err(|err| FetchError::new(FailureKind::Render, err.to_string()))
        })
        .await
        .map_err(|err| FetchError::new(FailureKind::Render, err.to_string()))?
    }
}
