//! Configuration management for the Opsdeck backend

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,

    /// API configuration
    pub api: ApiConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Live feed configuration (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<LiveConfig>,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of worker threads
    #[serde(default = "default_workers")]
    pub workers: usize,
}

/// API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Enable CORS
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,

    /// CORS allowed origins
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Default page size for list endpoints
    #[serde(default = "default_page_size")]
    pub default_page_size: i64,

    /// Maximum page size for list endpoints
    #[serde(default = "default_max_page_size")]
    pub max_page_size: i64,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Live activity feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveConfig {
    /// Seconds between feed ticks
    #[serde(default = "default_tick_interval")]
    pub tick_interval_seconds: u64,

    /// Active-user jitter bound; each tick adds a delta in
    /// `[-user_jitter, user_jitter)`
    #[serde(default = "default_user_jitter")]
    pub user_jitter: i64,

    /// Revenue jitter bound; each tick adds a delta in
    /// `[0, revenue_jitter)`
    #[serde(default = "default_revenue_jitter")]
    pub revenue_jitter: i64,

    /// Orders jitter bound; each tick adds a delta in
    /// `[0, order_jitter)`
    #[serde(default = "default_order_jitter")]
    pub order_jitter: i64,

    /// Seed value for the active-user counter
    #[serde(default = "default_seed_active_users")]
    pub seed_active_users: i64,

    /// Seed value for the running revenue counter
    #[serde(default = "default_seed_revenue")]
    pub seed_revenue: i64,

    /// Seed value for the orders-today counter
    #[serde(default = "default_seed_orders")]
    pub seed_orders: i64,
}

impl LiveConfig {
    /// Get the tick interval as a Duration
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_interval_seconds)
    }
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            tick_interval_seconds: default_tick_interval(),
            user_jitter: default_user_jitter(),
            revenue_jitter: default_revenue_jitter(),
            order_jitter: default_order_jitter(),
            seed_active_users: default_seed_active_users(),
            seed_revenue: default_seed_revenue(),
            seed_orders: default_seed_orders(),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZero::get)
        .unwrap_or(4)
}

const fn default_enable_cors() -> bool {
    true
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

const fn default_page_size() -> i64 {
    50
}

const fn default_max_page_size() -> i64 {
    1000
}

const fn default_request_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

const fn default_tick_interval() -> u64 {
    3
}

const fn default_user_jitter() -> i64 {
    5
}

const fn default_revenue_jitter() -> i64 {
    1000
}

const fn default_order_jitter() -> i64 {
    3
}

const fn default_seed_active_users() -> i64 {
    1247
}

const fn default_seed_revenue() -> i64 {
    245_780
}

const fn default_seed_orders() -> i64 {
    156
}

impl Config {
    /// Load configuration from environment and files
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("OPSDECK").separator("_"))
            .build()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })?;

        config
            .try_deserialize()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })
    }

    /// Load configuration from a specific file path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("OPSDECK").separator("_"))
            .build()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })?;

        config
            .try_deserialize()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
                workers: default_workers(),
            },
            api: ApiConfig {
                enable_cors: default_enable_cors(),
                cors_origins: default_cors_origins(),
                default_page_size: default_page_size(),
                max_page_size: default_max_page_size(),
                request_timeout: default_request_timeout(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
            live: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.server.workers > 0);

        assert!(config.api.enable_cors);
        assert_eq!(config.api.cors_origins, vec!["*"]);
        assert_eq!(config.api.default_page_size, 50);
        assert_eq!(config.api.max_page_size, 1000);
        assert_eq!(config.api.request_timeout, 30);

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");

        assert!(config.live.is_none());
    }

    #[test]
    fn test_live_config_default() {
        let live = LiveConfig::default();

        assert_eq!(live.tick_interval_seconds, 3);
        assert_eq!(live.tick_interval(), Duration::from_secs(3));
        assert_eq!(live.user_jitter, 5);
        assert_eq!(live.revenue_jitter, 1000);
        assert_eq!(live.order_jitter, 3);
        assert_eq!(live.seed_active_users, 1247);
        assert_eq!(live.seed_revenue, 245_780);
        assert_eq!(live.seed_orders, 156);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();

        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.server.host, config.server.host);
        assert_eq!(deserialized.server.port, config.server.port);
        assert_eq!(deserialized.api.default_page_size, config.api.default_page_size);
        assert_eq!(deserialized.logging.level, config.logging.level);
    }

    #[test]
    fn test_config_without_live_omits_section() {
        let config = Config::default();
        let serialized = serde_json::to_string(&config).unwrap();

        assert!(!serialized.contains("live"));

        let deserialized: Config = serde_json::from_str(&serialized).unwrap();
        assert!(deserialized.live.is_none());
    }

    #[test]
    fn test_config_with_live_roundtrip() {
        let mut config = Config::default();
        config.live = Some(LiveConfig {
            tick_interval_seconds: 1,
            ..LiveConfig::default()
        });

        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&serialized).unwrap();

        let live = deserialized.live.unwrap();
        assert_eq!(live.tick_interval_seconds, 1);
        assert_eq!(live.seed_orders, 156);
    }

    #[test]
    fn test_partial_config_deserialization() {
        let json_str = r#"{
            "server": {"host": "localhost"},
            "api": {},
            "logging": {}
        }"#;

        let config: Config = serde_json::from_str(json_str).unwrap();

        assert_eq!(config.server.host, "localhost");
        assert_eq!(config.server.port, 8080); // Uses default
        assert_eq!(config.api.default_page_size, 50); // Uses default
        assert_eq!(config.logging.format, "json"); // Uses default
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opsdeck.toml");
        std::fs::write(
            &path,
            r#"
[server]
host = "127.0.0.1"
port = 9090

[api]
default_page_size = 25

[logging]
level = "debug"
format = "text"

[live]
tick_interval_seconds = 1
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.api.default_page_size, 25);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "text");
        assert_eq!(config.live.unwrap().tick_interval_seconds, 1);
    }

    #[test]
    fn test_default_value_functions() {
        assert_eq!(default_host(), "0.0.0.0");
        assert_eq!(default_port(), 8080);
        assert!(default_workers() > 0);
        assert!(default_enable_cors());
        assert_eq!(default_cors_origins(), vec!["*"]);
        assert_eq!(default_page_size(), 50);
        assert_eq!(default_max_page_size(), 1000);
        assert_eq!(default_request_timeout(), 30);
        assert_eq!(default_log_level(), "info");
        assert_eq!(default_log_format(), "json");
        assert_eq!(default_tick_interval(), 3);
    }

    #[test]
    fn test_config_bounds_validation() {
        let config = Config::default();

        assert!(config.server.port > 0);
        assert!(config.server.workers < 1000);
        assert!(config.api.default_page_size > 0);
        assert!(config.api.max_page_size >= config.api.default_page_size);
        assert!(config.api.request_timeout > 0);
        assert!(!config.logging.level.is_empty());
    }
}
