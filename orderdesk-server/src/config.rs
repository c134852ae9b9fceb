//! Environment-based configuration
//!
//! Connection parameters come from discrete `DB_*` variables rather than a
//! single URL, so each credential can be supplied as its own secret.
//!
//! Variables:
//!   DB_HOST        required
//!   DB_PORT        default 5432
//!   DB_USER        required
//!   DB_PASSWORD    required
//!   DB_NAME        required
//!   DB_SSL_MODE    default "require" (TLS without certificate verification)
//!   DB_STATEMENT_TIMEOUT_MS  default 5000

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Default PostgreSQL port.
const DEFAULT_DB_PORT: u16 = 5432;

/// Default server-side statement timeout in milliseconds. Bounds every
/// query, including time spent waiting on a row lock.
const DEFAULT_STATEMENT_TIMEOUT_MS: u64 = 5_000;

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Database connection settings, read from the process environment.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub ssl_mode: PgSslMode,
    pub statement_timeout_ms: u64,
}

impl DatabaseConfig {
    /// Read the configuration from `DB_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("DB_PORT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::Invalid {
                var: "DB_PORT",
                reason: format!("'{value}' is not a port number"),
            })?,
            Err(_) => DEFAULT_DB_PORT,
        };

        let statement_timeout_ms = match std::env::var("DB_STATEMENT_TIMEOUT_MS") {
            Ok(value) => value.parse().map_err(|_| ConfigError::Invalid {
                var: "DB_STATEMENT_TIMEOUT_MS",
                reason: format!("'{value}' is not a number of milliseconds"),
            })?,
            Err(_) => DEFAULT_STATEMENT_TIMEOUT_MS,
        };

        Ok(Self {
            host: require("DB_HOST")?,
            port,
            user: require("DB_USER")?,
            password: require("DB_PASSWORD")?,
            database: require("DB_NAME")?,
            ssl_mode: parse_ssl_mode(std::env::var("DB_SSL_MODE").ok().as_deref())?,
            statement_timeout_ms,
        })
    }

    /// Build sqlx connect options from this configuration.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
            .ssl_mode(self.ssl_mode)
            .options([("statement_timeout", self.statement_timeout_ms.to_string())])
    }
}

fn require(var: &'static str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::Missing(var))
}

fn parse_ssl_mode(value: Option<&str>) -> Result<PgSslMode, ConfigError> {
    match value {
        None => Ok(PgSslMode::Require),
        Some("disable") => Ok(PgSslMode::Disable),
        Some("allow") => Ok(PgSslMode::Allow),
        Some("prefer") => Ok(PgSslMode::Prefer),
        Some("require") => Ok(PgSslMode::Require),
        Some("verify-ca") => Ok(PgSslMode::VerifyCa),
        Some("verify-full") => Ok(PgSslMode::VerifyFull),
        Some(other) => Err(ConfigError::Invalid {
            var: "DB_SSL_MODE",
            reason: format!("unknown ssl mode '{other}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ssl_mode_defaults_to_require() {
        assert!(matches!(parse_ssl_mode(None), Ok(PgSslMode::Require)));
    }

    #[test]
    fn ssl_mode_parses_known_values() {
        assert!(matches!(
            parse_ssl_mode(Some("disable")),
            Ok(PgSslMode::Disable)
        ));
        assert!(matches!(
            parse_ssl_mode(Some("verify-full")),
            Ok(PgSslMode::VerifyFull)
        ));
    }

    #[test]
    fn ssl_mode_rejects_unknown_values() {
        let err = parse_ssl_mode(Some("mandatory")).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "DB_SSL_MODE", .. }));
    }

    #[test]
    fn missing_variable_error_display() {
        let err = ConfigError::Missing("DB_HOST");
        assert_eq!(err.to_string(), "missing environment variable DB_HOST");
    }
}
