//! Application configuration

use integration_cwa::CwaConfig;
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// CWA upstream configuration
    #[serde(default)]
    pub cwa: CwaConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Graceful shutdown timeout in seconds
    #[serde(default)]
    pub shutdown_timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            shutdown_timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Layering: defaults, then an optional `config` file, then environment
    /// variables with the `CWA_RELAY` prefix (e.g. `CWA_RELAY_SERVER_PORT`).
    /// A bare `CWA_API_KEY` variable is honored as a fallback for the
    /// upstream credential, matching the original deployment.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("CWA_RELAY")
                    .separator("_")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        if config.cwa.api_key.is_none()
            && let Ok(key) = std::env::var("CWA_API_KEY")
            && !key.is_empty()
        {
            config.cwa.api_key = Some(key);
        }

        Ok(config)
    }
}
