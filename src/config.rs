//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),
    #[error("invalid BIND_ADDR '{0}'")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `ASSETS_DIR`: static images and favicon, default `<crate>/public`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when `PORT` or `BIND_ADDR` is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let bind_addr = parse_bind_addr(std::env::var("BIND_ADDR").ok().as_deref())?;
        let assets_dir = std::env::var("ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_assets_dir());

        Ok(Self { bind_addr, port, assets_dir })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(v) => v.parse().map_err(|_| ConfigError::InvalidPort(v.to_owned())),
    }
}

fn parse_bind_addr(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_BIND_ADDR),
        Some(v) => v.parse().map_err(|_| ConfigError::InvalidBindAddr(v.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
