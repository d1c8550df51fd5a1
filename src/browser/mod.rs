mod locator;

pub use locator::Locator;

use crate::configuration::BrowserSettings;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::network::{CookieParam, SetCookiesParams};
use chromiumoxide::detection::{DetectionOptions, default_executable};
use chromiumoxide::page::Page;
use futures::StreamExt;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum BrowserError {
    #[error("failed to launch browser: {0}")]
    Launch(String),
    #[error(transparent)]
    Cdp(#[from] chromiumoxide::error::CdpError),
    #[error("failed to read or write storage state at {path}: {source}")]
    StorageStateIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("storage state at {path} is not valid JSON")]
    StorageStateFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Serialized snapshot of the browsing context, written once by the session
/// bootstrap and consumed read-only by every scenario. Treated as a capability
/// token: nothing inspects individual cookies.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct StorageState {
    pub cookies: Vec<serde_json::Value>,
}

/// Whether a Chromium executable can be found for these settings.
pub fn chromium_available(settings: &BrowserSettings) -> bool {
    settings.executable.is_some() || default_executable(DetectionOptions::default()).is_ok()
}

/// One isolated headless-Chromium session, driven over CDP.
pub struct BrowserSession {
    browser: Browser,
    handler_task: tokio::task::JoinHandle<()>,
}

impl BrowserSession {
    pub async fn launch(settings: &BrowserSettings) -> Result<Self, BrowserError> {
        let mut builder = BrowserConfig::builder();
        if !settings.headless {
            builder = builder.with_head();
        }
        if !settings.sandbox {
            builder = builder.no_sandbox();
        }
        if let Some(executable) = &settings.executable {
            builder = builder.chrome_executable(executable);
        }
        let config = builder.build().map_err(BrowserError::Launch)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| BrowserError::Launch(e.to_string()))?;

        // The handler must be polled for the lifetime of the connection.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            browser,
            handler_task,
        })
    }

    pub async fn new_page(&self, url: &str) -> Result<Page, BrowserError> {
        Ok(self.browser.new_page(url).await?)
    }

    /// Capture the page's cookies and persist them as the session-state
    /// snapshot. Overwrites any previous snapshot at `path`.
    pub async fn save_storage_state(&self, page: &Page, path: &Path) -> Result<(), BrowserError> {
        let cookies = page.get_cookies().await?;
        let state = StorageState {
            cookies: cookies
                .iter()
                .map(serde_json::to_value)
                .collect::<Result<_, _>>()
                .map_err(|source| BrowserError::StorageStateFormat {
                    path: path.display().to_string(),
                    source,
                })?,
        };
        let serialized =
            serde_json::to_string_pretty(&state).map_err(|source| BrowserError::StorageStateFormat {
                path: path.display().to_string(),
                source,
            })?;
        std::fs::write(path, serialized).map_err(|source| BrowserError::StorageStateIo {
            path: path.display().to_string(),
            source,
        })
    }

    /// Replay a previously captured snapshot into the page's cookie store.
    pub async fn restore_storage_state(&self, page: &Page, path: &Path) -> Result<(), BrowserError> {
        let raw = std::fs::read_to_string(path).map_err(|source| BrowserError::StorageStateIo {
            path: path.display().to_string(),
            source,
        })?;
        let state: StorageState =
            serde_json::from_str(&raw).map_err(|source| BrowserError::StorageStateFormat {
                path: path.display().to_string(),
                source,
            })?;
        let cookies = state
            .cookies
            .into_iter()
            .map(serde_json::from_value::<CookieParam>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| BrowserError::StorageStateFormat {
                path: path.display().to_string(),
                source,
            })?;
        if !cookies.is_empty() {
            page.execute(SetCookiesParams { cookies }).await?;
        }
        Ok(())
    }

    pub async fn close(mut self) -> Result<(), BrowserError> {
        self.browser.close().await?;
        let _ = self.browser.wait().await;
        self.handler_task.abort();
        Ok(())
    }
}
