use serde_aux::field_attributes::deserialize_number_from_string;
use std::time::Duration;

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Settings {
    pub suite: SuiteSettings,
    pub browser: BrowserSettings,
    pub fixture: FixtureSettings,
}

/// Settings shared by every scenario: which origin is under test and how
/// patient the API client should be.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct SuiteSettings {
    pub base_url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub api_timeout_seconds: u64,
}

impl SuiteSettings {
    pub fn api_timeout(&self) -> Duration {
        Duration::from_secs(self.api_timeout_seconds)
    }
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct BrowserSettings {
    pub headless: bool,
    /// Run Chromium with its sandbox. Disabled by default so the suite works
    /// inside containers running as root.
    pub sandbox: bool,
    /// Explicit Chromium executable; when absent the system default is detected.
    pub executable: Option<String>,
    /// Where the session bootstrap persists its cookie snapshot.
    pub storage_state_path: String,
}

/// Bind address for the local storefront fixture.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct FixtureSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_file = base_path.join("configuration.yaml");

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_file))
        // Settings can be overridden individually with `APP__`-prefixed
        // environment variables, e.g. `APP__BROWSER__HEADLESS=false`.
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;
    let mut settings: Settings = settings.try_deserialize()?;

    // The one documented knob: `BASE_URL` selects the origin under test.
    // Absent, the fixed default origin from the configuration file is used.
    if let Ok(base_url) = std::env::var("BASE_URL") {
        settings.suite.base_url = base_url;
    }

    Ok(settings)
}
