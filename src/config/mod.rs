//! Configuration for gamestash

mod database;
mod http;
mod limits;
mod logging;

pub use database::{DatabaseConfig, MONGODB_URI_ENV};
pub use http::HttpConfig;
pub use limits::LimitsConfig;
pub use logging::{LogFormat, LoggingConfig};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// MongoDB caps a single document at 16 MB; embedded binary payloads
/// must leave headroom for the surrounding metadata fields.
pub const MAX_EMBEDDED_PAYLOAD_BYTES: usize = 15 * 1024 * 1024;

/// Main configuration for the gamestash server
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpConfig,
    /// Upload limits
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;
        Ok(config)
    }

    /// Validate all configuration fields.
    ///
    /// Collects all validation errors and reports them together so the user
    /// can fix everything in one pass rather than playing whack-a-mole.
    pub fn validate(&self) -> Result<()> {
        let mut errors: Vec<String> = Vec::new();

        if self.database.uri.is_empty() {
            errors.push(format!(
                "database uri must be set ({} environment variable or [database] uri in the config file)",
                MONGODB_URI_ENV
            ));
        }
        if self.database.name.is_empty() {
            errors.push("database name must not be empty".to_string());
        }
        if self.database.connect_timeout_secs == 0 {
            errors.push("database connect_timeout_secs must be positive".to_string());
        }

        if self.http.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            errors.push(format!(
                "http listen_addr '{}' is not a valid socket address",
                self.http.listen_addr
            ));
        }

        if self.limits.max_upload_bytes == 0 {
            errors.push("max_upload_bytes must be positive".to_string());
        }
        if self.limits.max_upload_bytes > MAX_EMBEDDED_PAYLOAD_BYTES {
            errors.push(format!(
                "max_upload_bytes must be <= {} (uploads are embedded in a single MongoDB document)",
                MAX_EMBEDDED_PAYLOAD_BYTES
            ));
        }

        if !logging::KNOWN_LEVELS.contains(&self.logging.level.as_str()) {
            errors.push(format!(
                "logging level '{}' is not one of {:?}",
                self.logging.level,
                logging::KNOWN_LEVELS
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow::anyhow!("Invalid configuration:\n  - {}", errors.join("\n  - ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.database.uri = "mongodb://localhost:27017".to_string();
        config
    }

    #[test]
    fn default_config_requires_database_uri() {
        let err = Config::default().validate().unwrap_err().to_string();
        assert!(err.contains("database uri must be set"));
        assert!(err.contains(MONGODB_URI_ENV));
    }

    #[test]
    fn valid_config_passes_validation() {
        valid_config().validate().unwrap();
    }

    #[test]
    fn validation_collects_all_errors() {
        let mut config = valid_config();
        config.http.listen_addr = "not-an-addr".to_string();
        config.limits.max_upload_bytes = 0;
        config.logging.level = "loud".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("listen_addr"));
        assert!(err.contains("max_upload_bytes"));
        assert!(err.contains("logging level"));
    }

    #[test]
    fn upload_limit_is_bounded_by_document_cap() {
        let mut config = valid_config();
        config.limits.max_upload_bytes = 16 * 1024 * 1024;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("embedded in a single MongoDB document"));
    }

    #[test]
    fn load_reads_partial_toml_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [database]
            uri = "mongodb://db.example:27017"

            [http]
            listen_addr = "0.0.0.0:9000"
            "#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.database.uri, "mongodb://db.example:27017");
        assert_eq!(config.database.name, "multimedia_db");
        assert_eq!(config.http.listen_addr, "0.0.0.0:9000");
        assert_eq!(config.limits, LimitsConfig::default());
        config.validate().unwrap();
    }

    #[test]
    fn load_rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[database").unwrap();
        let err = Config::load(file.path()).unwrap_err().to_string();
        assert!(err.contains("Failed to parse config file"));
    }
}
