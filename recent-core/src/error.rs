//! Error types for recent-list session operations

use std::net::IpAddr;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecentError>;

#[derive(Debug, Error)]
pub enum RecentError {
    #[error("expected 1 or 2 arguments but got {count}")]
    ArgumentCount { count: usize },

    #[error("expected \"-\" or \"+\" as argument, got \"{value}\"")]
    ArgumentValue { value: String },

    #[error("no remote host item, not a network login")]
    MissingRemoteHost,

    #[error("could not look up address for {host}: {source}")]
    AddressResolution {
        host: String,
        source: std::io::Error,
    },

    #[error("address conversion error: {host} resolved to non-IPv4 address {address}")]
    AddressFormat { host: String, address: IpAddr },

    #[error("can't open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to load config from {path}: {source}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
