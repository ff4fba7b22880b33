//! Unified service bootstrap utilities
//!
//! Provides common initialization functionality for calculator services,
//! including startup banners, logging initialization, and environment setup.

use crate::logging::{self, LogConfig};
use tracing::{info, Level};

/// Service metadata for startup
pub struct ServiceInfo {
    /// Service name (e.g., "calcsrv")
    pub name: String,
    /// Service version from Cargo.toml
    pub version: String,
    /// Service description
    pub description: String,
    /// Default port
    pub default_port: u16,
}

impl ServiceInfo {
    /// Create new service info
    pub fn new(name: impl Into<String>, description: impl Into<String>, default_port: u16) -> Self {
        Self {
            name: name.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: description.into(),
            default_port,
        }
    }

    /// Override the version (binaries pass their own `CARGO_PKG_VERSION`)
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

/// Print unified startup banner for any service
pub fn print_startup_banner(service: &ServiceInfo) {
    let banner = r#"
  ██████╗  █████╗ ██╗      ██████╗
 ██╔════╝ ██╔══██╗██║     ██╔════╝
 ██║      ███████║██║     ██║
 ██║      ██╔══██║██║     ██║
 ╚██████╗ ██║  ██║███████╗╚██████╗
  ╚═════╝ ╚═╝  ╚═╝╚══════╝ ╚═════╝
    "#;

    info!("{}", banner);
    info!("");
    info!(" {} v{}", service.name.to_uppercase(), service.version);
    info!(" {}", service.description);
    info!(" Default Port: {}", service.default_port);
    info!("");
}

/// Initialize logging for a service with standard configuration
///
/// Console level comes from `console_level`; `RUST_LOG` still wins when set.
/// A rolling log file is written when `CALC_LOG_DIR` is set.
pub fn init_logging(service: &ServiceInfo, console_level: Level, ansi: bool) -> anyhow::Result<()> {
    let log_config = LogConfig {
        service_name: service.name.clone(),
        log_dir: logging::log_dir_from_env().map(|dir| dir.join(&service.name)),
        console_level,
        ansi,
        api_log_level: Level::INFO,
    };

    logging::init_with_config(log_config).map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}

/// Load environment variables in development mode
///
/// In debug builds, reads .env file and sets environment variables.
/// In release builds, this is a no-op (production environments should set variables externally).
pub fn load_development_env() {
    #[cfg(debug_assertions)]
    {
        if let Ok(content) = std::fs::read_to_string(".env") {
            for (key, value) in parse_env_lines(&content) {
                // Only set if not already set
                if std::env::var(key).is_err() {
                    std::env::set_var(key, value);
                }
            }
        }
    }
}

/// Parse `KEY=VALUE` lines, skipping blanks and `#` comments
#[cfg_attr(not(debug_assertions), allow(dead_code))]
fn parse_env_lines(content: &str) -> Vec<(&str, &str)> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_service_info_creation() {
        let service = ServiceInfo::new("calcsrv", "Calculator Service", 5000);
        assert_eq!(service.name, "calcsrv");
        assert_eq!(service.description, "Calculator Service");
        assert_eq!(service.default_port, 5000);
        assert_eq!(service.with_version("9.9.9").version, "9.9.9");
    }

    #[test]
    fn test_parse_env_lines() {
        let content = "# comment\nHOST=0.0.0.0\n\n PORT = 8080 \nnot a pair\n=empty\n";
        assert_eq!(
            parse_env_lines(content),
            vec![("HOST", "0.0.0.0"), ("PORT", "8080")]
        );
    }
}
