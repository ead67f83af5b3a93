//! # miam-prediction
//!
//! Predicts the meals of the coming weeks from a 14-meal order.
//!
//! The order is row 0 of a triangle. Every cell of the next row is the
//! [`combine`] of the two cells above it, down to a single apex cell:
//! 14 + 13 + ... + 1 = 105 meals. Read row by row, the cells give lunch and
//! dinner for days 1 to 53; day 53 has a lunch only.
//!
//! | Pair                 | Result         |
//! |----------------------|----------------|
//! | same dish twice      | that dish      |
//! | two different dishes | the third dish |

pub mod combine;
pub mod engine;
pub mod meal;
pub mod prediction;
pub mod report;
pub mod triangle;

pub use combine::combine;
pub use engine::{EngineState, PredictionEngine};
pub use meal::Meal;
pub use prediction::Prediction;
pub use report::PredictionReport;
pub use triangle::MealTriangle;
