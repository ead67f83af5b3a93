//! Configuration errors.

use super::error_code::{self, MiamErrorCode};
use super::CatalogError;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

impl MiamErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Catalog(e) => e.error_code(),
            _ => error_code::CONFIG_ERROR,
        }
    }
}
