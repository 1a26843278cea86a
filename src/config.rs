//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub addr: SocketAddr,
    pub log_filter: String,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `KEYSTONE_ADDR`: full socket address, wins over `PORT`
    /// - `PORT`: port on `0.0.0.0` (default 3000)
    /// - `KEYSTONE_LOG`: tracing filter directive (default `info`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] over an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = match non_empty(lookup("KEYSTONE_ADDR")) {
            Some(raw) => raw
                .parse::<SocketAddr>()
                .map_err(|_| ConfigError::Invalid { var: "KEYSTONE_ADDR", value: raw })?,
            None => {
                let port = match non_empty(lookup("PORT")) {
                    Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
                    None => DEFAULT_PORT,
                };
                SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port)
            }
        };
        let log_filter = non_empty(lookup("KEYSTONE_LOG")).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());

        Ok(Self { addr, log_filter })
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
