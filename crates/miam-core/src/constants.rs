//! Shared constants for the meal triangle.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of dishes on the menu. The combination rule only holds for 3.
pub const CATALOG_SIZE: usize = 3;

/// Number of meals in an order (7 days, lunch and dinner).
pub const ORDER_LEN: usize = 14;

/// Cells in the full triangle: 14 + 13 + ... + 1.
pub const TRIANGLE_CELLS: usize = ORDER_LEN * (ORDER_LEN + 1) / 2;

/// Last day that can be predicted. Its dinner falls outside the triangle.
pub const MAX_DAY: u32 = 53;

/// Shown for an undetermined meal (U+2753 BLACK QUESTION MARK ORNAMENT).
pub const UNDETERMINED_SYMBOL: char = '\u{2753}';

/// Built-in menu as `(name, code point)`, in catalog order.
pub const DEFAULT_DISHES: [(&str, u32); CATALOG_SIZE] = [
    ("Sushi", 0x1F363),
    ("Pizza", 0x1F355),
    ("Végétarien", 0x1F966),
];

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "MIAM_LOG";

/// Project configuration file name.
pub const CONFIG_FILE_NAME: &str = "miam.toml";
