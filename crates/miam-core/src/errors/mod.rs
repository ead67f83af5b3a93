//! Error handling for the meal triangle.
//! One error enum per subsystem, `thiserror` only.

pub mod catalog_error;
pub mod config_error;
pub mod error_code;
pub mod prediction_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::MiamErrorCode;
pub use prediction_error::{PredictionError, PredictionResult};
