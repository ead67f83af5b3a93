//! Configuration for the meal triangle.
//! TOML-based, 3-layer resolution: CLI > env > project > defaults.

pub mod catalog_config;
pub mod logging_config;
pub mod miam_config;

pub use catalog_config::{CatalogConfig, DishConfig};
pub use logging_config::LoggingConfig;
pub use miam_config::{CliOverrides, MiamConfig};
