//! Listener Config

use std::time::Duration;

use clap::Args;

/// Where the API listens and how long it drains on shutdown.
#[derive(Debug, Args)]
pub struct ListenerConfig {
    /// Bind address
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Bind port
    #[arg(short, long, env = "SERVER_PORT", default_value = "8698")]
    pub port: u16,

    /// Seconds to wait for in-flight requests after a shutdown signal.
    /// Unset waits until they finish.
    #[arg(long, env = "SERVER_SHUTDOWN_TIMEOUT_SECS")]
    pub shutdown_timeout_secs: Option<u64>,
}

impl ListenerConfig {
    /// `host:port`, as handed to the TCP listener.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Grace period for draining connections.
    #[must_use]
    pub fn shutdown_timeout(&self) -> Option<Duration> {
        self.shutdown_timeout_secs.map(Duration::from_secs)
    }
}
