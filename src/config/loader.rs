//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the analyzer
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{AnalyzerError, AnalyzerResult};

use super::types::{AnalyzerConfig, DisplayConfig};

/// Environment variable naming the YAML configuration file.
pub const CONFIG_PATH_ENV: &str = "EARNINGS_ANALYZER_CONFIG";

/// Loads and provides access to the analyzer configuration.
///
/// # File Format
///
/// ```yaml
/// server:
///   host: 0.0.0.0
///   port: 8501
/// upload:
///   max_bytes: 10485760
/// display:
///   title: Outlier Earnings Analyzer
///   earnings_since: From Dec 7, 2024
/// ```
///
/// # Example
///
/// ```
/// use earnings_analyzer::config::ConfigLoader;
///
/// let loader = ConfigLoader::from_yaml_str("server:\n  port: 9000\n", "inline").unwrap();
/// assert_eq!(loader.config().server.port, 9000);
/// assert_eq!(loader.display().title, "Earnings Analyzer");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AnalyzerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`AnalyzerError::ConfigNotFound`] if the file cannot be read.
    /// - [`AnalyzerError::ConfigParseError`] if it is not valid configuration.
    pub fn load<P: AsRef<Path>>(path: P) -> AnalyzerResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AnalyzerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Loads configuration from the file named by `EARNINGS_ANALYZER_CONFIG`,
    /// or the defaults when the variable is unset.
    pub fn from_env() -> AnalyzerResult<Self> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => {
                info!(path = %Path::new(&path).display(), "Loading configuration");
                Self::load(path)
            }
            None => {
                info!("No configuration file set; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parses configuration from YAML text. `source` names the text in
    /// error messages.
    pub fn from_yaml_str(content: &str, source: &str) -> AnalyzerResult<Self> {
        // An empty file deserializes to null; treat it as all defaults.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: AnalyzerConfig =
            serde_yaml::from_str(content).map_err(|e| AnalyzerError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        if config.upload.max_bytes == 0 {
            return Err(AnalyzerError::ConfigParseError {
                path: source.to_string(),
                message: "upload.max_bytes must be greater than zero".to_string(),
            });
        }

        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Returns the presentation settings.
    pub fn display(&self) -> &DisplayConfig {
        &self.config.display
    }
}

impl From<AnalyzerConfig> for ConfigLoader {
    fn from(config: AnalyzerConfig) -> Self {
        Self { config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::DEFAULT_MAX_UPLOAD_BYTES;
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn test_defaults_when_empty() {
        let loader = ConfigLoader::from_yaml_str("", "empty").unwrap();
        let config = loader.config();
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.server.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.upload.max_bytes, DEFAULT_MAX_UPLOAD_BYTES);
        assert!(config.display.earnings_since.is_none());
    }

    #[test]
    fn test_full_configuration() {
        let yaml = r#"
server:
  host: 0.0.0.0
  port: 9100
upload:
  max_bytes: 2048
display:
  title: Outlier Earnings Analyzer
  earnings_since: From Dec 7, 2024
"#;
        let loader = ConfigLoader::from_yaml_str(yaml, "test.yaml").unwrap();
        let config = loader.config();
        assert_eq!(config.server.socket_addr().to_string(), "0.0.0.0:9100");
        assert_eq!(config.upload.max_bytes, 2048);
        assert_eq!(loader.display().title, "Outlier Earnings Analyzer");
        assert_eq!(
            loader.display().earnings_since.as_deref(),
            Some("From Dec 7, 2024")
        );
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let loader = ConfigLoader::from_yaml_str("display:\n  title: Mine\n", "t").unwrap();
        assert_eq!(loader.display().title, "Mine");
        assert_eq!(loader.config().server.port, 8501);
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = ConfigLoader::from_yaml_str("server:\n  prot: 1\n", "typo.yaml").unwrap_err();
        match err {
            AnalyzerError::ConfigParseError { path, .. } => assert_eq!(path, "typo.yaml"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_zero_upload_limit_is_rejected() {
        let err = ConfigLoader::from_yaml_str("upload:\n  max_bytes: 0\n", "zero.yaml").unwrap_err();
        assert!(matches!(err, AnalyzerError::ConfigParseError { .. }));
    }

    #[test]
    fn test_missing_file_is_config_not_found() {
        let err = ConfigLoader::load("/definitely/missing/analyzer.yaml").unwrap_err();
        assert!(matches!(err, AnalyzerError::ConfigNotFound { .. }));
    }
}
