//! Catalog configuration.

use serde::{Deserialize, Serialize};

/// The `[catalog]` section. Leave `dishes` empty to use the built-in menu.
///
/// ```toml
/// [[catalog.dishes]]
/// name = "Sushi"
/// code_point = 0x1F363
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Dishes in catalog order. Exactly 3 when set.
    pub dishes: Vec<DishConfig>,
}

/// One configured dish.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DishConfig {
    pub name: String,
    /// Unicode code point of the dish emoji.
    pub code_point: u32,
}
