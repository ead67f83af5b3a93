//! Catalog construction errors.

use super::error_code::{self, MiamErrorCode};

/// Errors that can occur while building a catalog from configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog must contain exactly {expected} dishes, got {actual}")]
    WrongSize { expected: usize, actual: usize },

    #[error("Duplicate dish symbol U+{code_point:04X}")]
    DuplicateSymbol { code_point: u32 },

    #[error("Invalid code point 0x{code_point:X} for dish {name}")]
    InvalidCodePoint { name: String, code_point: u32 },
}

impl MiamErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::CATALOG_ERROR
    }
}
