//! Observability for the meal triangle.
//! `tracing` crate with `EnvFilter`, filter read from `MIAM_LOG`.

pub mod setup;

pub use setup::{init_tracing, init_tracing_with_filter};
