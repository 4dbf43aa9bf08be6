//! Application configuration loaded from environment variables and config files.
//!
//! Supports `.env` files for development and environment variables for production.
//! Config precedence: env vars > .env file > config.toml > defaults

use std::collections::BTreeMap;
use std::sync::OnceLock;
use std::time::Duration;

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment};
use serde::{Deserialize, Serialize};

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Name of the client registered when the configuration declares none.
pub const FALLBACK_CLIENT: &str = "backend";
pub const FALLBACK_BASE_URL: &str = "/api";
pub const FALLBACK_SCHEMA: &str = "/api/schema.json";

/// Get the global application configuration, if [`init`] has run.
pub fn get() -> Option<&'static AppConfig> {
    CONFIG.get()
}

/// Initialize the global configuration from environment.
///
/// Should be called once at application startup. Later calls return the
/// configuration stored by the first one.
pub fn init() -> Result<&'static AppConfig, ConfigError> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    let cfg = defaults()?
        // Optional config file
        .add_source(config::File::with_name("config").required(false))
        // Environment variables (WISHLIST__ORIGIN, WISHLIST__CLIENTS__BACKEND__BASE_URL, etc.)
        .add_source(environment())
        .build()?;

    let app_config = AppConfig::from_config(cfg)?;
    Ok(CONFIG.get_or_init(|| app_config))
}

/// The `WISHLIST__*` environment source.
pub fn environment() -> Environment {
    Environment::with_prefix("WISHLIST")
        .separator("__")
        .try_parsing(true)
}

/// Builder pre-populated with every default value.
pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("origin", "http://localhost:8000")?
        .set_default("locale", "en-US")?
        .set_default("logging.filter", "wishlist=info")?
        .set_default("logging.json", false)
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Origin that relative client addresses (`/api`) resolve against.
    pub origin: String,
    /// Locale tag used for date formatting (e.g. "en-US").
    pub locale: String,
    pub logging: LoggingConfig,
    /// Named backend clients, keyed by client name.
    #[serde(default)]
    pub clients: BTreeMap<String, ClientConfig>,
}

impl AppConfig {
    /// Deserialize a built config and register the fallback client when none is declared.
    ///
    /// A client declared without a schema address gets `<base_url>/schema.json`.
    pub fn from_config(cfg: config::Config) -> Result<Self, ConfigError> {
        let mut app: AppConfig = cfg.try_deserialize()?;
        for (name, client) in &mut app.clients {
            if client.schema.is_empty() {
                client.schema = schema_for(&client.base_url);
                tracing::debug!(client = %name, schema = %client.schema, "schema address derived from base url");
            }
        }
        if app.clients.is_empty() {
            tracing::debug!("no clients configured, registering fallback '{FALLBACK_CLIENT}'");
            app.clients
                .insert(FALLBACK_CLIENT.to_owned(), ClientConfig::fallback());
        }
        Ok(app)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

/// Settings for one named backend client. Immutable after startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base network address, absolute (`http://localhost:8000`) or origin-relative (`/api`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Address of the schema document describing this client's endpoints.
    /// Empty until [`AppConfig::from_config`] derives it from `base_url`.
    #[serde(default)]
    pub schema: String,

    /// Request timeout; unset means the transport default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Headers sent with every request of this client.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

fn default_base_url() -> String {
    FALLBACK_BASE_URL.to_owned()
}

fn schema_for(base_url: &str) -> String {
    format!("{}/schema.json", base_url.trim_end_matches('/'))
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, schema: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            schema: schema.into(),
            timeout_secs: None,
            headers: BTreeMap::new(),
        }
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK_BASE_URL, FALLBACK_SCHEMA)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
