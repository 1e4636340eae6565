use std::time::Duration;

use beacon_app::{
    context::AppContext,
    database::{DatabaseOptions, Db},
};
use clap::{Args, Parser, Subcommand};

mod apps;
mod db;

#[derive(Debug, Parser)]
#[command(name = "beacon-app", about = "Beacon administration CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Apps(apps::AppsCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Apps(command) => apps::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Connection attempts before giving up
    #[arg(long, env = "DATABASE_CONNECT_ATTEMPTS", default_value_t = 1)]
    connect_attempts: u32,

    /// Base delay between connection attempts in milliseconds
    #[arg(long, env = "DATABASE_CONNECT_BACKOFF_MS", default_value_t = 500)]
    connect_backoff_ms: u64,
}

impl DatabaseArgs {
    fn options(&self) -> DatabaseOptions {
        DatabaseOptions {
            connect_attempts: self.connect_attempts,
            connect_backoff: Duration::from_millis(self.connect_backoff_ms),
            ..DatabaseOptions::new(&self.database_url)
        }
    }

    pub(crate) async fn connect(&self) -> Result<Db, String> {
        beacon_app::database::connect_with_retry(&self.options())
            .await
            .map(Db::new)
            .map_err(|error| format!("failed to connect to database: {error}"))
    }

    pub(crate) async fn context(&self) -> Result<AppContext, String> {
        self.connect().await.map(AppContext::from_db)
    }
}
