//! # Telemetry
//!
//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence over the configured filter.

use crate::config::LogConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Builds the filter from `RUST_LOG`, falling back to `config.filter`.
///
/// # Errors
///
/// Returns an error if the configured directive cannot be parsed.
pub fn env_filter(config: &LogConfig) -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
    EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.filter))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already
/// installed.
pub fn init_tracing(config: &LogConfig) -> anyhow::Result<()> {
    let filter = env_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry.with(fmt::layer().json()).try_init()?;
    } else {
        registry.with(fmt::layer()).try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_directive_is_rejected() {
        let config = LogConfig {
            filter: "deflight=notalevel".to_string(),
            json: false,
        };
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(env_filter(&config).is_err());
        }
    }

    #[test]
    fn configured_directive_is_accepted() {
        let config = LogConfig {
            filter: "deflight=debug,tower_http=info".to_string(),
            json: true,
        };
        assert!(env_filter(&config).is_ok());
    }
}
