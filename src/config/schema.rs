//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the wallet bridge.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct BridgeConfig {
    /// Message routing settings.
    pub router: RouterConfig,

    /// Auto-update check settings.
    pub updater: UpdaterConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Message routing settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Currency tag attached to wallet info requests.
    pub default_wallet: String,

    /// Buffer capacity of each message channel.
    pub channel_capacity: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            default_wallet: "btc".to_string(),
            channel_capacity: 64,
        }
    }
}

/// Auto-update check settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpdaterConfig {
    /// Schedule an update check shortly after startup.
    ///
    /// Off by default; production builds turn it on (config or
    /// `--production`). Development runs never want the updater pinging out.
    pub check_on_startup: bool,

    /// Delay before the startup check, in milliseconds.
    pub check_delay_ms: u64,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            check_on_startup: false,
            check_delay_ms: 3_000,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: BridgeConfig = toml::from_str("").unwrap();
        assert_eq!(config.router.default_wallet, "btc");
        assert_eq!(config.router.channel_capacity, 64);
        assert!(!config.updater.check_on_startup);
        assert_eq!(config.updater.check_delay_ms, 3_000);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: BridgeConfig = toml::from_str(
            r#"
            [updater]
            check_on_startup = true
            "#,
        )
        .unwrap();
        assert!(config.updater.check_on_startup);
        assert_eq!(config.updater.check_delay_ms, 3_000);
        assert_eq!(config.router.default_wallet, "btc");
    }
}
