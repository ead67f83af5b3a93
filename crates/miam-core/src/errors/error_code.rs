//! MiamErrorCode trait for outer surfaces.

/// Structured error codes, stable across message wording changes.
pub trait MiamErrorCode {
    /// Returns the error code string (e.g., "INVALID_DAY").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_ORDER_LENGTH: &str = "INVALID_ORDER_LENGTH";
pub const UNKNOWN_SYMBOL: &str = "UNKNOWN_SYMBOL";
pub const ENGINE_NOT_READY: &str = "ENGINE_NOT_READY";
pub const INVALID_DAY: &str = "INVALID_DAY";
pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
