//! Database connection management

use std::{
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use sqlx::{
    PgPool, Postgres, Transaction,
    migrate::MigrateError,
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
    query,
};
use thiserror::Error;
use tracing::{info, warn};

const MAX_CONNECT_BACKOFF: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("invalid database URL")]
    InvalidUrl(#[source] sqlx::Error),

    #[error("invalid SSL mode")]
    InvalidSslMode(#[source] sqlx::Error),

    #[error("SSL certificate file not found: {}", .0.display())]
    MissingCertificate(PathBuf),

    #[error("failed to connect to database after {attempts} attempt(s)")]
    Connect {
        attempts: u32,
        #[source]
        source: sqlx::Error,
    },

    #[error("failed to run database migrations")]
    Migrate(#[source] MigrateError),
}

/// Connection settings for the application database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseOptions {
    /// `PostgreSQL` connection string.
    pub url: String,

    /// Upper bound on pooled connections.
    pub max_connections: u32,

    /// libpq-style SSL mode (`disable`, `prefer`, `require`, `verify-ca`, `verify-full`).
    pub ssl_mode: Option<String>,

    /// CA certificate used to verify the server.
    pub ssl_root_cert: Option<PathBuf>,

    /// Client certificate for mutual TLS.
    pub ssl_client_cert: Option<PathBuf>,

    /// Private key matching `ssl_client_cert`.
    pub ssl_client_key: Option<PathBuf>,

    /// Connection attempts made before giving up.
    pub connect_attempts: u32,

    /// Delay after the first failed attempt; doubles on every further failure.
    pub connect_backoff: Duration,

    /// Apply embedded migrations once connected.
    pub run_migrations: bool,
}

impl DatabaseOptions {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            ssl_mode: None,
            ssl_root_cert: None,
            ssl_client_cert: None,
            ssl_client_key: None,
            connect_attempts: 1,
            connect_backoff: Duration::from_millis(500),
            run_migrations: false,
        }
    }

    /// Build driver options, checking that configured certificate files exist.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL or SSL mode cannot be parsed, or a certificate is missing.
    pub fn connect_options(&self) -> Result<PgConnectOptions, DatabaseError> {
        let mut options = PgConnectOptions::from_str(&self.url).map_err(DatabaseError::InvalidUrl)?;

        if let Some(mode) = &self.ssl_mode {
            options =
                options.ssl_mode(PgSslMode::from_str(mode).map_err(DatabaseError::InvalidSslMode)?);
        }

        if let Some(path) = &self.ssl_root_cert {
            options = options.ssl_root_cert(existing_file(path)?);
        }

        if let Some(path) = &self.ssl_client_cert {
            options = options.ssl_client_cert(existing_file(path)?);
        }

        if let Some(path) = &self.ssl_client_key {
            options = options.ssl_client_key(existing_file(path)?);
        }

        Ok(options)
    }
}

fn existing_file(path: &Path) -> Result<&Path, DatabaseError> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(DatabaseError::MissingCertificate(path.to_path_buf()))
    }
}

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Begin a transaction. Dropping it without committing rolls it back.
    ///
    /// # Errors
    ///
    /// Returns an error when no connection can be acquired.
    pub async fn begin_transaction(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }

    /// Round-trip a trivial query to confirm the database is reachable.
    ///
    /// # Errors
    ///
    /// Returns an error when the query fails.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        query("SELECT 1").execute(&self.pool).await?;

        Ok(())
    }
}

/// Connect to `PostgreSQL`, retrying with exponential backoff.
///
/// # Errors
///
/// Returns an error when the options are invalid or every attempt fails.
pub async fn connect_with_retry(options: &DatabaseOptions) -> Result<PgPool, DatabaseError> {
    let connect_options = options.connect_options()?;
    let attempts = options.connect_attempts.max(1);
    let mut attempt = 1;

    loop {
        let result = PgPoolOptions::new()
            .max_connections(options.max_connections)
            .connect_with(connect_options.clone())
            .await;

        match result {
            Ok(pool) => {
                info!(attempt, "connected to database");

                return Ok(pool);
            }
            Err(source) if attempt < attempts => {
                let backoff = backoff_delay(options.connect_backoff, attempt);

                warn!(
                    attempt,
                    attempts,
                    backoff_ms = u64::try_from(backoff.as_millis()).unwrap_or(u64::MAX),
                    "database connection failed, retrying: {source}"
                );

                tokio::time::sleep(backoff).await;

                attempt += 1;
            }
            Err(source) => return Err(DatabaseError::Connect { attempts: attempt, source }),
        }
    }
}

/// Apply the embedded migrations.
///
/// # Errors
///
/// Returns an error when a migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(DatabaseError::Migrate)
}

pub(crate) fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    let factor = 2_u32.saturating_pow(attempt.saturating_sub(1));

    base.saturating_mul(factor).min(MAX_CONNECT_BACKOFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles_per_attempt() {
        let base = Duration::from_millis(500);

        assert_eq!(backoff_delay(base, 1), Duration::from_millis(500));
        assert_eq!(backoff_delay(base, 2), Duration::from_secs(1));
        assert_eq!(backoff_delay(base, 4), Duration::from_secs(4));
    }

    #[test]
    fn backoff_is_capped() {
        assert_eq!(
            backoff_delay(Duration::from_secs(1), 40),
            MAX_CONNECT_BACKOFF
        );
    }

    #[test]
    fn missing_root_certificate_fails_fast() {
        let mut options = DatabaseOptions::new("postgres://beacon@localhost/beacon");

        options.ssl_root_cert = Some(PathBuf::from("/nonexistent/beacon/root.crt"));

        assert!(matches!(
            options.connect_options(),
            Err(DatabaseError::MissingCertificate(_))
        ));
    }

    #[test]
    fn unknown_ssl_mode_is_rejected() {
        let mut options = DatabaseOptions::new("postgres://beacon@localhost/beacon");

        options.ssl_mode = Some("sometimes".to_string());

        assert!(matches!(
            options.connect_options(),
            Err(DatabaseError::InvalidSslMode(_))
        ));
    }

    #[test]
    fn plain_url_builds_options() {
        let options = DatabaseOptions::new("postgres://beacon@localhost:5432/beacon");

        assert!(options.connect_options().is_ok());
    }
}
