//! Configuration loading for the Earnings Analyzer service.
//!
//! This module loads server, upload and display settings from an optional
//! YAML file.
//!
//! # Example
//!
//! ```no_run
//! use earnings_analyzer::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/analyzer.yaml").unwrap();
//! println!("Listening on {}", config.config().server.socket_addr());
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_PATH_ENV, ConfigLoader};
pub use types::{
    AnalyzerConfig, DEFAULT_MAX_UPLOAD_BYTES, DisplayConfig, ServerConfig, UploadConfig,
};
