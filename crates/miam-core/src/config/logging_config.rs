//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log levels accepted by `level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for tracing output.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level for the `miam` targets. Default: "info".
    pub level: Option<String>,
    /// Log the full triangle at debug level after each registration. Default: false.
    pub dump_triangle: Option<bool>,
}

impl LoggingConfig {
    /// Returns the effective log level, defaulting to "info".
    pub fn effective_level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    /// Returns whether triangle dumps are enabled, defaulting to false.
    pub fn effective_dump_triangle(&self) -> bool {
        self.dump_triangle.unwrap_or(false)
    }

    /// Filter directive for `tracing_subscriber::EnvFilter`.
    pub fn filter_directive(&self) -> String {
        format!("miam={}", self.effective_level())
    }
}
