use anyhow::{Context, Result};
use secrecy::SecretString;
use serde::Deserialize;

/// Page size used by list operations when the caller has no preference.
pub const DEFAULT_LIMIT: u32 = 20;
/// First item of a list operation when the caller has no preference.
pub const DEFAULT_OFFSET: u32 = 0;
/// Content type attached to every request that carries a JSON body.
pub const CONTENT_TYPE_JSON: &str = "application/json";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub freenas: FreeNasConfig,
    #[serde(default)]
    pub websocket: Option<WebsocketConfig>,
}

/// Connection settings for the REST (v1.0) API.
#[derive(Debug, Deserialize, Clone)]
pub struct FreeNasConfig {
    #[serde(default = "default_hostname")]
    pub hostname: String,
    #[serde(default = "default_api_resource")]
    pub api_resource: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<SecretString>,
    #[serde(default = "default_true")]
    pub use_tls: bool,
    #[serde(default = "default_true")]
    pub verify_ssl: bool,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

/// Connection settings for the WebSocket (v2.0) API.
#[derive(Debug, Deserialize, Clone)]
pub struct WebsocketConfig {
    /// Full socket URL; derived from the REST hostname when absent.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

/// Credentials for HTTP basic authentication and the WebSocket login.
#[derive(Debug, Clone)]
pub struct BasicAuthConfig {
    pub username: String,
    pub password: SecretString,
}

impl BasicAuthConfig {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }
}

fn default_hostname() -> String {
    "localhost".to_string()
}

fn default_api_resource() -> String {
    "api".to_string()
}

fn default_api_version() -> String {
    "1.0".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

impl FreeNasConfig {
    /// Config for `hostname` with every other field at its default.
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            api_resource: default_api_resource(),
            api_version: default_api_version(),
            username: None,
            password: None,
            use_tls: default_true(),
            verify_ssl: default_true(),
            timeout_seconds: default_timeout(),
        }
    }

    /// Credentials, present only when both username and password are set.
    pub fn basic_auth(&self) -> Option<BasicAuthConfig> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some(BasicAuthConfig {
                username: username.clone(),
                password: password.clone(),
            }),
            _ => None,
        }
    }

    /// Socket URL of the v2.0 API on the same appliance.
    pub fn websocket_url(&self) -> String {
        let protocol = if self.use_tls { "wss" } else { "ws" };
        format!("{}://{}/websocket", protocol, self.hostname)
    }
}

impl Default for FreeNasConfig {
    fn default() -> Self {
        Self::new(default_hostname())
    }
}

impl Default for WebsocketConfig {
    fn default() -> Self {
        Self {
            url: None,
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        // Load environment variables from .env if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("FREENAS_CLIENT").separator("__"))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
