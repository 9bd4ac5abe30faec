//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub public_dir: PathBuf,
}

impl Config {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `DATABASE_URL`: enables Postgres when set
    /// - `DB_MAX_CONNECTIONS`: default 5
    /// - `PUBLIC_DIR`: static asset directory, default `public`
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or address variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_or("HOST", lookup("HOST"), IpAddr::V4(Ipv4Addr::UNSPECIFIED))?;
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let db_max_connections = parse_or("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), DEFAULT_DB_MAX_CONNECTIONS)?;
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        let public_dir = lookup("PUBLIC_DIR").map_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR), PathBuf::from);

        Ok(Self { host, port, database_url, db_max_connections, public_dir })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
