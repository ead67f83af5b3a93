//! Top-level configuration with 3-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::logging_config::LOG_LEVELS;
use super::{CatalogConfig, LoggingConfig};
use crate::catalog::Catalog;
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sections.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`MIAM_*`)
/// 3. Project config (`miam.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MiamConfig {
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub dump_triangle: Option<bool>,
}

impl MiamConfig {
    /// Load configuration with 3-layer resolution, then validate it.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3 (lowest priority): project config
        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &MiamConfig) -> Result<(), ConfigError> {
        if let Some(ref level) = config.logging.level {
            if !LOG_LEVELS.contains(&level.as_str()) {
                tracing::warn!(level = %level, "rejected unknown log level");
                return Err(ConfigError::ValidationFailed {
                    field: "logging.level".to_string(),
                    message: format!("must be one of {}", LOG_LEVELS.join(", ")),
                });
            }
        }
        Catalog::from_config(&config.catalog)?;
        Ok(())
    }

    /// Build the catalog this config describes.
    pub fn build_catalog(&self) -> Result<Catalog, ConfigError> {
        Ok(Catalog::from_config(&self.catalog)?)
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut MiamConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: MiamConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(path = %path.display(), "merged project config");
        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; set values in `other` win.
    fn merge(base: &mut MiamConfig, other: &MiamConfig) {
        if !other.catalog.dishes.is_empty() {
            base.catalog.dishes = other.catalog.dishes.clone();
        }
        if other.logging.level.is_some() {
            base.logging.level = other.logging.level.clone();
        }
        if other.logging.dump_triangle.is_some() {
            base.logging.dump_triangle = other.logging.dump_triangle;
        }
    }

    /// Apply environment variable overrides: `MIAM_LOG_LEVEL`, `MIAM_DUMP_TRIANGLE`.
    fn apply_env_overrides(config: &mut MiamConfig) {
        if let Ok(val) = std::env::var("MIAM_LOG_LEVEL") {
            config.logging.level = Some(val.to_lowercase());
        }
        if let Ok(val) = std::env::var("MIAM_DUMP_TRIANGLE") {
            if let Ok(v) = val.parse::<bool>() {
                config.logging.dump_triangle = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut MiamConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.log_level {
            config.logging.level = Some(v.clone());
        }
        if let Some(v) = cli.dump_triangle {
            config.logging.dump_triangle = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
