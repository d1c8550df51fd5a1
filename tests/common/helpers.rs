use std::path::Path;
use std::sync::LazyLock;
use storefront_e2e::api::{ApiClient, UserApi};
use storefront_e2e::bootstrap::ensure_session_state;
use storefront_e2e::browser::{BrowserSession, chromium_available};
use storefront_e2e::configuration::get_configuration;
use storefront_e2e::pages::{HomePage, LoginPage, ProductsPage};
use storefront_e2e::storefront::Application;
use storefront_e2e::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `LazyLock`
pub static TRACING: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api: UserApi,
}

/// Spawn a fresh storefront fixture on a random port. Each scenario gets its
/// own isolated instance; nothing is shared between concurrently running
/// scenarios.
pub async fn spawn_app() -> TestApp {
    LazyLock::force(&TRACING);

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // Use a random OS port
        c.fixture.port = 0;
        c
    };

    let application = Application::build(&configuration.fixture)
        .await
        .expect("Failed to build the storefront fixture.");
    let address = format!("http://127.0.0.1:{}", application.port());
    let port = application.port();

    #[allow(clippy::let_underscore_future)]
    let _ = tokio::spawn(application.run_until_stopped());

    let api = UserApi::new(ApiClient::new(
        address.clone(),
        configuration.suite.api_timeout(),
    ));

    TestApp { address, port, api }
}

/// A spawned fixture plus a live Chromium session pointed at it.
pub struct BrowserHarness {
    pub app: TestApp,
    session: BrowserSession,
    storage_state: &'static Path,
}

/// Launch the browser harness, or skip the scenario when no Chromium is
/// usable in this environment. Scenarios call this first and return early on
/// `None`, so browser coverage degrades to a logged skip instead of a failure.
pub async fn launch_browser_harness() -> Option<BrowserHarness> {
    let app = spawn_app().await;

    let mut configuration = get_configuration().expect("Failed to read configuration.");
    configuration.suite.base_url = app.address.clone();

    if std::env::var("E2E_BROWSER").is_ok_and(|value| value == "0") {
        eprintln!("[SKIP] E2E_BROWSER=0; skipping browser scenario");
        return None;
    }
    if !chromium_available(&configuration.browser) {
        eprintln!("[SKIP] no Chromium executable found; skipping browser scenario");
        return None;
    }

    let storage_state = match ensure_session_state(&configuration).await {
        Ok(path) => path,
        Err(error) => {
            eprintln!("[SKIP] session bootstrap failed: {error}");
            return None;
        }
    };
    let session = match BrowserSession::launch(&configuration.browser).await {
        Ok(session) => session,
        Err(error) => {
            eprintln!("[SKIP] browser launch failed: {error}");
            return None;
        }
    };

    Some(BrowserHarness {
        app,
        session,
        storage_state,
    })
}

impl BrowserHarness {
    async fn page(&self) -> chromiumoxide::page::Page {
        let page = self
            .session
            .new_page("about:blank")
            .await
            .expect("Failed to open a page.");
        self.session
            .restore_storage_state(&page, self.storage_state)
            .await
            .expect("Failed to restore the session-state snapshot.");
        page
    }

    pub async fn home_page(&self) -> HomePage {
        HomePage::new(self.page().await, self.app.address.clone())
    }

    pub async fn login_page(&self) -> LoginPage {
        LoginPage::new(self.page().await, self.app.address.clone())
    }

    pub async fn products_page(&self) -> ProductsPage {
        ProductsPage::new(self.page().await, self.app.address.clone())
    }

    pub async fn close(self) {
        let _ = self.session.close().await;
    }
}
