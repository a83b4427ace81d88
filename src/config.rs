use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Runtime settings read from the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub address: SocketAddr,
}

impl Config {
    /// Reads `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS`, `HOST` and `PORT`.
    ///
    /// Callers are expected to have loaded `.env` beforehand.
    pub fn from_env() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        Self::from_parts(
            database_url,
            std::env::var("DATABASE_MAX_CONNECTIONS").ok(),
            std::env::var("HOST").ok(),
            std::env::var("PORT").ok(),
        )
    }

    fn from_parts(
        database_url: String,
        max_connections: Option<String>,
        host: Option<String>,
        port: Option<String>,
    ) -> Result<Self> {
        let max_connections = match max_connections {
            Some(value) => value
                .parse::<u32>()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {}", value))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        let ip = match host {
            Some(value) => value
                .parse::<IpAddr>()
                .with_context(|| format!("HOST is not an IP address: {}", value))?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };
        let port = match port {
            Some(value) => value
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port: {}", value))?,
            None => DEFAULT_PORT,
        };
        Ok(Config {
            database_url,
            max_connections,
            address: SocketAddr::new(ip, port),
        })
    }

    /// A config for an isolated in-memory database, used by tests and demos.
    pub fn in_memory() -> Self {
        Config {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            address: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0),
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}
