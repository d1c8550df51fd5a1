use crate::browser::{BrowserError, BrowserSession};
use crate::configuration::Settings;
use std::path::{Path, PathBuf};
use tokio::sync::OnceCell;

static SESSION_STATE: OnceCell<PathBuf> = OnceCell::const_new();

#[derive(thiserror::Error, Debug)]
pub enum BootstrapError {
    #[error("failed to create the auth directory")]
    AuthDir(#[source] std::io::Error),
    #[error(transparent)]
    Browser(#[from] BrowserError),
    #[error(transparent)]
    Cdp(#[from] chromiumoxide::error::CdpError),
}

/// Run the global session bootstrap at most once per process and return the
/// path of the persisted snapshot. Subsequent callers reuse the first result;
/// the snapshot is never regenerated mid-run.
pub async fn ensure_session_state(settings: &Settings) -> Result<&'static Path, BootstrapError> {
    let path = SESSION_STATE
        .get_or_try_init(|| bootstrap(settings))
        .await?;
    Ok(path.as_path())
}

/// Launch a browser, open the base URL to establish a session, persist the
/// storage-state snapshot and shut the browser down. A failure here is fatal
/// to every browser scenario: there is no recovery path for broken setup.
#[tracing::instrument(name = "Session bootstrap", skip_all)]
async fn bootstrap(settings: &Settings) -> Result<PathBuf, BootstrapError> {
    let path = PathBuf::from(&settings.browser.storage_state_path);
    if let Some(parent) = path.parent() {
        // Idempotent: an existing directory is fine.
        std::fs::create_dir_all(parent).map_err(BootstrapError::AuthDir)?;
    }

    let session = BrowserSession::launch(&settings.browser).await?;
    let page = session.new_page(&settings.suite.base_url).await?;
    page.wait_for_navigation().await?;
    session.save_storage_state(&page, &path).await?;
    session.close().await?;

    tracing::info!(path = %path.display(), "session bootstrap complete");
    Ok(path)
}
