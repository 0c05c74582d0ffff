//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Exchange rate configuration.
    #[serde(default)]
    pub rates: RatesConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

/// Exchange rate provider and cache configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Endpoint returning the latest rates relative to USD.
    #[serde(default = "default_provider_url")]
    pub provider_url: String,
    /// How long a live rate snapshot is served before refreshing.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
    /// How long the fallback matrix is served before the provider is retried.
    #[serde(default = "default_cache_ttl")]
    pub fallback_ttl_secs: u64,
    /// Timeout for a single provider request.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            provider_url: default_provider_url(),
            cache_ttl_secs: default_cache_ttl(),
            fallback_ttl_secs: default_cache_ttl(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_provider_url() -> String {
    "https://api.exchangerate-api.com/v4/latest/USD".to_string()
}

fn default_cache_ttl() -> u64 {
    3600 // 1 hour
}

fn default_request_timeout() -> u64 {
    10
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// A bare `PORT` variable overrides `server.port`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CONVERTLY").separator("__"))
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()?;

        config.try_deserialize()
    }
}
