//! Server configuration read from command-line flags and the environment.

use clap::Parser;
use std::net::SocketAddr;

/// Runtime configuration for the Corkboard server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "corkboard", version, about = "Kanban board REST backend")]
pub struct ServerConfig {
    /// Socket address the HTTP listener binds to.
    #[arg(long, env = "CORKBOARD_BIND", default_value = "0.0.0.0:5005")]
    pub bind: SocketAddr,

    /// Path prefix under which the API is mounted.
    #[arg(long, env = "CORKBOARD_BASE_PATH", default_value = "/api")]
    pub base_path: String,

    /// `PostgreSQL` connection URL. The in-memory store is used when absent.
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "CORKBOARD_POOL_SIZE", default_value_t = 8)]
    pub pool_size: u32,
}
