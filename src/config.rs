//! # Configuration
//!
//! Layered service configuration.
//!
//! Sources are merged in order, later sources overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. `config/default.toml` (optional)
//! 3. `config/{profile}.toml` (optional)
//! 4. Environment variables prefixed `DEFLIGHT`, nested with `__`
//!    (e.g. `DEFLIGHT__SERVER__BIND_ADDR=127.0.0.1:9000`)
//!
//! A `.env` file, if present, is loaded into the environment first.
//!
//! # Examples
//!
//! ```ignore
//! use deflight::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! println!("listening on {}", config.server.bind_addr);
//! ```

use crate::domain::value_objects::Supplier;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::fmt;
use std::net::SocketAddr;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "DEFLIGHT";

/// Directory holding the optional TOML files.
const CONFIG_DIR: &str = "config";

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Default supplier HTTP timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;

/// Default tracing filter.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Deployment profile selecting the supplier transports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// In-process sandbox suppliers with fixed offers.
    #[default]
    Dev,
    /// Real suppliers over HTTP.
    Prod,
}

impl Profile {
    /// Returns the profile name used for file lookup.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Prod => "prod",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind_addr: SocketAddr,
}

/// Connection settings for one supplier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SupplierEndpoint {
    /// Base URL; `/search` is appended.
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// Settings shared by all suppliers plus per-supplier endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuppliersConfig {
    /// Transport request timeout in milliseconds.
    pub request_timeout_ms: u64,
    /// CrazyAir connection.
    #[serde(default)]
    pub crazy_air: SupplierEndpoint,
    /// ToughJet connection.
    #[serde(default)]
    pub tough_jet: SupplierEndpoint,
}

impl SuppliersConfig {
    /// Returns the configured endpoint for `supplier`, if any.
    #[must_use]
    pub fn endpoint(&self, supplier: Supplier) -> Option<&str> {
        let endpoint = match supplier {
            Supplier::CrazyAir => &self.crazy_air,
            Supplier::ToughJet => &self.tough_jet,
        };
        endpoint.endpoint.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

/// Complete service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Active profile.
    pub profile: Profile,
    /// HTTP server.
    pub server: ServerConfig,
    /// Supplier transports.
    pub suppliers: SuppliersConfig,
    /// Logging.
    pub log: LogConfig,
}

impl AppConfig {
    /// Loads configuration from `.env`, the TOML files and the environment.
    ///
    /// The profile file is chosen from `DEFLIGHT__PROFILE`, falling back to
    /// `dev`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed, a value has the
    /// wrong type, or the `prod` profile lacks a supplier endpoint.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let profile = std::env::var(format!("{}__PROFILE", ENV_PREFIX))
            .unwrap_or_else(|_| Profile::default().as_str().to_string());

        let config = Self::defaults()?
            .add_source(File::with_name(&format!("{}/default", CONFIG_DIR)).required(false))
            .add_source(File::with_name(&format!("{}/{}", CONFIG_DIR, profile)).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(config)
    }

    /// Returns a builder seeded with the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a default cannot be set.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("profile", Profile::default().as_str())?
            .set_default("server.bind_addr", DEFAULT_BIND_ADDR)?
            .set_default("suppliers.request_timeout_ms", DEFAULT_REQUEST_TIMEOUT_MS)?
            .set_default("log.filter", DEFAULT_LOG_FILTER)?
            .set_default("log.json", false)
    }

    /// Deserializes and validates a built configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if deserialization or validation fails.
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` if the timeout is zero or the `prod`
    /// profile lacks a supplier endpoint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.suppliers.request_timeout_ms == 0 {
            return Err(ConfigError::Message(
                "suppliers.request_timeout_ms must be positive".to_string(),
            ));
        }

        if self.profile == Profile::Prod {
            let missing: Vec<String> = Supplier::ALL
                .iter()
                .filter(|supplier| self.suppliers.endpoint(**supplier).is_none())
                .map(|supplier| supplier.config_key().to_string())
                .collect();

            if !missing.is_empty() {
                return Err(ConfigError::Message(format!(
                    "prod profile requires suppliers.<name>.endpoint for: {}",
                    missing.join(", ")
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<AppConfig, ConfigError> {
        let config = AppConfig::defaults()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        AppConfig::from_config(config)
    }

    #[test]
    fn defaults_apply() {
        let config = from_toml("").unwrap();

        assert_eq!(config.profile, Profile::Dev);
        assert_eq!(config.server.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert_eq!(config.suppliers.request_timeout_ms, 5000);
        assert_eq!(config.log.filter, "info");
        assert!(!config.log.json);
        assert!(config.suppliers.endpoint(Supplier::CrazyAir).is_none());
    }

    #[test]
    fn file_overrides_defaults() {
        let config = from_toml(
            r#"
            [server]
            bind_addr = "127.0.0.1:9000"

            [suppliers]
            request_timeout_ms = 250

            [suppliers.tough_jet]
            endpoint = "http://toughjet.local"

            [log]
            json = true
            "#,
        )
        .unwrap();

        assert_eq!(config.server.bind_addr.port(), 9000);
        assert_eq!(config.suppliers.request_timeout_ms, 250);
        assert_eq!(
            config.suppliers.endpoint(Supplier::ToughJet),
            Some("http://toughjet.local")
        );
        assert!(config.log.json);
    }

    #[test]
    fn prod_requires_every_endpoint() {
        let err = from_toml(
            r#"
            profile = "prod"

            [suppliers.crazy_air]
            endpoint = "http://crazyair.local"
            "#,
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("tough_jet"));
        assert!(!message.contains("crazy_air"));
    }

    #[test]
    fn prod_with_endpoints_is_valid() {
        let config = from_toml(
            r#"
            profile = "prod"

            [suppliers.crazy_air]
            endpoint = "http://crazyair.local"

            [suppliers.tough_jet]
            endpoint = "http://toughjet.local"
            "#,
        )
        .unwrap();

        assert_eq!(config.profile, Profile::Prod);
    }

    #[test]
    fn blank_endpoint_counts_as_missing() {
        let result = from_toml(
            r#"
            profile = "prod"

            [suppliers.crazy_air]
            endpoint = "  "

            [suppliers.tough_jet]
            endpoint = "http://toughjet.local"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let result = from_toml(
            r#"
            [suppliers]
            request_timeout_ms = 0
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_profile_is_rejected() {
        assert!(from_toml(r#"profile = "staging""#).is_err());
    }

    #[test]
    fn invalid_bind_addr_is_rejected() {
        let result = from_toml(
            r#"
            [server]
            bind_addr = "not-an-address"
            "#,
        );
        assert!(result.is_err());
    }
}
