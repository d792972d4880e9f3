use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Path value that selects an in-memory database.
pub const IN_MEMORY: &str = ":memory:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = lookup("SOCIAL_DB_PATH").unwrap_or_else(|| "social.db".into());
        let host = lookup("SOCIAL_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = lookup("SOCIAL_PORT")
            .unwrap_or_else(|| "8080".into())
            .parse()
            .context("SOCIAL_PORT must be a port number")?;

        Ok(Self {
            db_path: db_path.into(),
            host,
            port,
        })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }

    pub fn in_memory(&self) -> bool {
        self.db_path.as_os_str() == IN_MEMORY
    }
}
