//! HTTP server configuration parsed from CLI flags and the environment.

use std::net::SocketAddr;

use clap::Parser;

/// Runtime configuration for the backend binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "backend", about = "Users directory REST backend")]
pub struct ServerConfig {
    /// Socket address the HTTP server binds to.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// Path to the SQLite database file.
    #[arg(long, env = "DATABASE_URL", default_value = "data/app.db")]
    database_url: String,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "DATABASE_POOL_SIZE", default_value_t = 10)]
    pool_size: u32,
}

impl ServerConfig {
    /// Socket address the server will bind to.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind
    }

    /// Database path or URL handed to the pool.
    pub fn database_url(&self) -> &str {
        self.database_url.as_str()
    }

    /// Maximum pool size.
    pub fn pool_size(&self) -> u32 {
        self.pool_size
    }
}
