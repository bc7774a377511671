//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use herodex_upstream::{UpstreamConfig, DEFAULT_SEARCH_BASE_URL};

/// Process settings. Every flag can also be supplied through its
/// environment variable.
#[derive(Parser, Debug, Clone)]
#[command(name = "herodex")]
#[command(about = "Superhero stats lookup service")]
pub struct ServerConfig {
    /// Address to bind the HTTP server to
    #[arg(long, env = "HERODEX_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// HTTP port
    #[arg(short, long, env = "HERODEX_PORT", default_value = "8000")]
    pub port: u16,

    /// Path to the SQLite database file
    #[arg(short, long, env = "HERODEX_DATABASE", default_value = "herodex.db")]
    pub database: PathBuf,

    /// Hero dataset URL (must end in /all.json)
    #[arg(long, env = "SUPERHERO_API_SOURCE")]
    pub source: Option<String>,

    /// Access token for the superhero search API
    #[arg(long, env = "SUPERHERO_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Base URL of the superhero search API
    #[arg(long, env = "SUPERHERO_API_BASE_URL", default_value = DEFAULT_SEARCH_BASE_URL)]
    pub search_base_url: String,

    /// Upstream request timeout in seconds
    #[arg(long, env = "SUPERHERO_API_TIMEOUT_SECS", default_value = "30")]
    pub upstream_timeout: u64,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServerConfig {
    /// Upstream settings derived from this configuration.
    pub fn upstream(&self) -> UpstreamConfig {
        UpstreamConfig {
            source: self.source.clone(),
            token: self.token.clone(),
            search_base_url: self.search_base_url.clone(),
            timeout_secs: self.upstream_timeout,
        }
    }

    /// Socket address to listen on.
    pub fn listen_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}
