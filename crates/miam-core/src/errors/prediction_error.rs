//! Prediction errors.
//!
//! All of these are precondition violations on the caller's side.
//! None are transient, so none are retried.

use super::error_code::{self, MiamErrorCode};

/// Errors raised by the catalog lookup, the combination rule, and the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredictionError {
    #[error("Order must contain exactly {expected} meals, got {actual}")]
    InvalidOrderLength { expected: usize, actual: usize },

    #[error("Unknown symbol: {symbol}")]
    UnknownSymbol { symbol: String },

    #[error("No order registered yet")]
    EngineNotReady,

    #[error("Invalid day: {day} (expected 1 to {max})")]
    InvalidDay { day: String, max: u32 },
}

impl MiamErrorCode for PredictionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidOrderLength { .. } => error_code::INVALID_ORDER_LENGTH,
            Self::UnknownSymbol { .. } => error_code::UNKNOWN_SYMBOL,
            Self::EngineNotReady => error_code::ENGINE_NOT_READY,
            Self::InvalidDay { .. } => error_code::INVALID_DAY,
        }
    }
}

/// Result alias for prediction operations.
pub type PredictionResult<T> = Result<T, PredictionError>;
