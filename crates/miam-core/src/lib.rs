//! # miam-core
//!
//! Foundation crate for the meal triangle.
//! Defines the dish catalog, order and day value types, errors, config,
//! tracing setup, and constants. The prediction crate depends on this.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod order;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use catalog::{Catalog, Dish, DishId};
pub use config::MiamConfig;
pub use errors::{CatalogError, ConfigError, MiamErrorCode, PredictionError};
pub use order::{Day, Order};
