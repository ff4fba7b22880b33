//! Service configuration
//!
//! Priority (lowest to highest): built-in defaults, `HOST`/`PORT`/`DEBUG`,
//! `CALCSRV_`-prefixed variables, command-line flags.

use common::serde_helpers::deserialize_bool_flexible;
use common::ServiceArgs;
use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const ENV_PREFIX: &str = "CALCSRV_";

/// Bind address and debug flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default, deserialize_with = "deserialize_bool_flexible")]
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            debug: false,
        }
    }
}

impl ServerConfig {
    /// Layered provider chain: defaults, plain env, prefixed env
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(ServerConfig::default()))
            .merge(Env::raw().only(&["host", "port", "debug"]))
            .merge(Env::prefixed(ENV_PREFIX).only(&["host", "port", "debug"]))
    }

    /// Load from defaults and environment
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    /// Apply command-line overrides on top of the environment
    pub fn with_args(mut self, args: &ServiceArgs) -> Self {
        if let Some(host) = &args.host {
            self.host = host.clone();
        }
        if let Some(port) = args.port {
            self.port = port;
        }
        if args.debug {
            self.debug = true;
        }
        self
    }

    /// Runtime validation
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("host: Host cannot be empty".to_string());
        }
        if self.port == 0 {
            return Err("port: Port cannot be 0".to_string());
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Display for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "host={} port={} debug={}",
            self.host, self.port, self.debug
        )
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_environment() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let config = ServerConfig::load()?;
            assert_eq!(config, ServerConfig::default());
            assert_eq!(config.bind_address(), "127.0.0.1:5000");
            Ok(())
        });
    }

    #[test]
    fn test_plain_environment_variables() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("HOST", "0.0.0.0");
            jail.set_env("PORT", "8080");
            jail.set_env("DEBUG", "True");
            let config = ServerConfig::load()?;
            assert_eq!(config.host, "0.0.0.0");
            assert_eq!(config.port, 8080);
            assert!(config.debug);
            Ok(())
        });
    }

    #[test]
    fn test_prefixed_variables_win() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("PORT", "8080");
            jail.set_env("CALCSRV_PORT", "9090");
            jail.set_env("CALCSRV_DEBUG", "1");
            let config = ServerConfig::load()?;
            assert_eq!(config.port, 9090);
            assert!(config.debug);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("PORT", "not-a-port");
            assert!(ServerConfig::load().is_err());
            Ok(())
        });
    }

    #[test]
    fn test_args_override_environment() {
        let args = ServiceArgs {
            host: Some("10.0.0.1".to_string()),
            port: Some(7000),
            debug: true,
            ..ServiceArgs::default()
        };
        let config = ServerConfig::default().with_args(&args);
        assert_eq!(config.bind_address(), "10.0.0.1:7000");
        assert!(config.debug);

        // Unset flags leave the loaded values alone
        let config = ServerConfig::default().with_args(&ServiceArgs::default());
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_validate() {
        assert!(ServerConfig::default().validate().is_ok());
        let zero = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };
        assert!(zero.validate().is_err());
        let blank = ServerConfig {
            host: "  ".to_string(),
            ..ServerConfig::default()
        };
        assert!(blank.validate().is_err());
    }
}
