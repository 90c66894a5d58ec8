//! Application state for the Earnings Analyzer API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, DisplayConfig};

/// Shared application state.
///
/// Holds the immutable configuration; uploads themselves are never stored.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the presentation settings.
    pub fn display(&self) -> &DisplayConfig {
        self.config.display()
    }

    /// Returns the largest accepted request body, in bytes.
    pub fn max_upload_bytes(&self) -> usize {
        self.config.config().upload.max_bytes
    }
}
