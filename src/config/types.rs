//! Configuration types for the analyzer service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section and
//! field is optional and falls back to its default.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::Deserialize;

/// Default upload size cap: 10 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Root configuration for the analyzer service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Upload limits.
    pub upload: UploadConfig,
    /// Presentation settings.
    pub display: DisplayConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// The address to bind to.
    pub host: IpAddr,
    /// The port to listen on.
    pub port: u16,
}

impl ServerConfig {
    /// Returns the socket address to bind.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8501,
        }
    }
}

/// Upload limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UploadConfig {
    /// The largest accepted request body, in bytes.
    pub max_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Presentation settings for the rendered report.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// The page title.
    pub title: String,
    /// Subtitle for the Total Earnings card (e.g. "From Dec 7, 2024").
    ///
    /// When unset, the earliest record date is shown instead.
    pub earnings_since: Option<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Earnings Analyzer".to_string(),
            earnings_since: None,
        }
    }
}
