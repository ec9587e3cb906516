//! Configuration validation.
//!
//! Semantic checks on top of what serde already guarantees. Pure function,
//! returns every violation so operators fix a config in one pass.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::BridgeConfig;

/// A single semantic violation in a config.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("router.default_wallet must not be empty")]
    EmptyWalletTag,

    #[error("router.channel_capacity must be greater than zero")]
    ZeroChannelCapacity,

    #[error("updater.check_delay_ms must be greater than zero")]
    ZeroCheckDelay,

    #[error("observability.metrics_address '{0}' is not a valid socket address")]
    BadMetricsAddress(String),
}

/// Validate a configuration, collecting all errors.
pub fn validate_config(config: &BridgeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.router.default_wallet.trim().is_empty() {
        errors.push(ValidationError::EmptyWalletTag);
    }
    if config.router.channel_capacity == 0 {
        errors.push(ValidationError::ZeroChannelCapacity);
    }
    if config.updater.check_delay_ms == 0 {
        errors.push(ValidationError::ZeroCheckDelay);
    }
    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::BadMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
