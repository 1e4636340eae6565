//! Server configuration module

use clap::Parser;

use crate::config::{
    cors::CorsConfig,
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ListenerConfig,
};

pub(crate) mod cors;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Beacon JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "beacon-json", about = "Beacon JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ListenerConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Observability (traces/metrics) settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Cross-origin settings.
    #[command(flatten)]
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use testresult::TestResult;

    use super::{observability::LogFormat, *};

    #[test]
    fn explicit_arguments_are_parsed() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "beacon-json",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--log-format",
            "json",
            "--database-url",
            "postgres://beacon@localhost/beacon",
            "--database-max-connections",
            "4",
            "--database-connect-attempts",
            "2",
            "--database-connect-backoff-ms",
            "50",
            "--database-run-migrations",
            "--cors-allowed-origins",
            "https://a.example,https://b.example",
        ])?;

        assert_eq!(config.socket_addr(), "127.0.0.1:9000");
        assert_eq!(config.logging.log_format, LogFormat::Json);
        assert_eq!(
            config.cors.cors_allowed_origins,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );

        let options = config.database.options();

        assert_eq!(options.url, "postgres://beacon@localhost/beacon");
        assert_eq!(options.max_connections, 4);
        assert_eq!(options.connect_attempts, 2);
        assert_eq!(options.connect_backoff, Duration::from_millis(50));
        assert!(options.run_migrations);

        Ok(())
    }

    #[test]
    fn database_url_is_required() {
        let result = ServerConfig::try_parse_from(["beacon-json", "--port", "9000"]);

        if std::env::var_os("DATABASE_URL").is_none() {
            assert!(result.is_err());
        }
    }
}
