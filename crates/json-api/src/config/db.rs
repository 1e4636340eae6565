//! Database Config

use std::{path::PathBuf, time::Duration};

use beacon_app::database::DatabaseOptions;
use clap::Args;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 10)]
    pub database_max_connections: u32,

    /// SSL mode (disable, allow, prefer, require, verify-ca, verify-full)
    #[arg(long, env = "DATABASE_SSL_MODE")]
    pub database_ssl_mode: Option<String>,

    /// CA certificate used to verify the server
    #[arg(long, env = "DATABASE_SSL_ROOT_CERT")]
    pub database_ssl_root_cert: Option<PathBuf>,

    /// Client certificate
    #[arg(long, env = "DATABASE_SSL_CLIENT_CERT")]
    pub database_ssl_client_cert: Option<PathBuf>,

    /// Client private key
    #[arg(long, env = "DATABASE_SSL_CLIENT_KEY", hide_env_values = true)]
    pub database_ssl_client_key: Option<PathBuf>,

    /// Connection attempts at start-up before giving up
    #[arg(long, env = "DATABASE_CONNECT_ATTEMPTS", default_value_t = 5)]
    pub database_connect_attempts: u32,

    /// Base backoff between connection attempts in milliseconds; doubles per attempt
    #[arg(long, env = "DATABASE_CONNECT_BACKOFF_MS", default_value_t = 500)]
    pub database_connect_backoff_ms: u64,

    /// Apply pending migrations at start-up
    #[arg(long, env = "DATABASE_RUN_MIGRATIONS", default_value_t = false)]
    pub database_run_migrations: bool,
}

impl DatabaseConfig {
    #[must_use]
    pub fn options(&self) -> DatabaseOptions {
        DatabaseOptions {
            url: self.database_url.clone(),
            max_connections: self.database_max_connections,
            ssl_mode: self.database_ssl_mode.clone(),
            ssl_root_cert: self.database_ssl_root_cert.clone(),
            ssl_client_cert: self.database_ssl_client_cert.clone(),
            ssl_client_key: self.database_ssl_client_key.clone(),
            connect_attempts: self.database_connect_attempts,
            connect_backoff: Duration::from_millis(self.database_connect_backoff_ms),
            run_migrations: self.database_run_migrations,
        }
    }
}
