//! Server configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server is stateless apart from this struct. `SCHOOL_API_BASE_URL` is
//! not used by the server itself; it is rendered into the HTML shell so the
//! browser bundle knows which backend to call.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_ADDR: &str = "0.0.0.0";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}: expected 1-65535")]
    InvalidPort(String),
    #[error("invalid SITE_ADDR {0:?}: expected an IP address")]
    InvalidSiteAddr(String),
    #[error("invalid SCHOOL_API_BASE_URL {0:?}: expected an http(s) URL")]
    InvalidApiBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Backend base URL published to the browser, without trailing slash.
    pub api_base_url: String,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_ADDR`: bind host, default `0.0.0.0`
    /// - `SCHOOL_API_BASE_URL`: default `http://localhost:5000/api`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a present value cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a present value cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match non_blank("PORT") {
            Some(raw) => raw.parse::<u16>().ok().filter(|p| *p != 0).ok_or(ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let host = non_blank("SITE_ADDR").unwrap_or_else(|| DEFAULT_SITE_ADDR.to_owned());
        let ip = host.parse::<IpAddr>().map_err(|_| ConfigError::InvalidSiteAddr(host.clone()))?;

        let api_base_url = non_blank("SCHOOL_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidApiBaseUrl(api_base_url));
        }

        Ok(Self { addr: SocketAddr::new(ip, port), api_base_url: api_base_url.trim_end_matches('/').to_owned() })
    }
}
