//! # Unified Application Configuration
//!
//! Collects the settings of the command-line front end into one structure,
//! loaded from environment variables and validated at startup. The parsing
//! and aggregation functions themselves take no configuration.

use crate::errors::error_logging::log_config_error;
use crate::errors::{AppError, AppResult};
use crate::export::ExportConfig;
use crate::observability_config::ObservabilityConfig;
use std::env;

/// Unified application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Shopping list text export settings
    pub export: ExportConfig,
    /// Logging settings
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        let mut config = Self::default();

        config.export.default_title = env::var("SHOPPING_LIST_TITLE")
            .ok()
            .filter(|title| !title.trim().is_empty());
        config.export.separator_width = env::var("SHOPPING_LIST_SEPARATOR_WIDTH")
            .unwrap_or_else(|_| "40".to_string())
            .parse()
            .map_err(|e| {
                log_config_error(&e, "SHOPPING_LIST_SEPARATOR_WIDTH", "from_env");
                AppError::Config("SHOPPING_LIST_SEPARATOR_WIDTH must be a valid number".to_string())
            })?;

        config.observability = ObservabilityConfig::from_env();

        Ok(config)
    }

    /// Validate all configuration sections
    pub fn validate(&self) -> AppResult<()> {
        self.export.validate()?;
        self.observability.validate().map_err(AppError::Config)?;
        Ok(())
    }

    /// Get a summary of the current configuration for logging
    pub fn summary(&self) -> String {
        format!(
            "Configuration: environment={}, log_level={}, export_title={:?}, separator_width={}",
            self.observability.environment,
            self.observability.log_level,
            self.export.default_title,
            self.export.separator_width
        )
    }
}
