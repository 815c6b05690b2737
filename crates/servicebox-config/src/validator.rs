//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::{Config, Environment};

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_logging(config, &mut result);
        Self::validate_profile(config, &mut result);

        Ok(result)
    }

    /// Validate and fail on any error. Warnings are returned for the caller to report.
    pub fn ensure_valid(config: &Config) -> Result<ValidationResult, ConfigError> {
        let result = Self::validate(config)?;
        if !result.is_valid() {
            let summary = result
                .errors
                .iter()
                .map(|e| format!("{}: {}", e.path, e.message))
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ConfigError::Invalid(summary));
        }
        Ok(result)
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.trim();
        if level.is_empty() {
            result.add_error(ValidationError::new(
                "logging.level",
                "Log level cannot be empty",
            ));
        }

        // Directives look like `info` or `servicebox_core=debug,warn`.
        for directive in level.split(',').filter(|d| !d.trim().is_empty()) {
            let severity = directive.rsplit('=').next().unwrap_or(directive).trim();
            if !LOG_LEVELS.contains(&severity.to_ascii_lowercase().as_str()) {
                result.add_error(ValidationError::new(
                    "logging.level",
                    format!(
                        "Unknown log level '{}', valid values: {:?}",
                        severity, LOG_LEVELS
                    ),
                ));
            }
        }

        if let Some(ref dir) = config.logging.directory {
            if dir.trim().is_empty() {
                result.add_error(ValidationError::new(
                    "logging.directory",
                    "Log directory cannot be empty when set",
                ));
            }
            if config.logging.max_files == 0 {
                result.add_error(ValidationError::new(
                    "logging.max_files",
                    "max_files must be greater than 0 when file logging is enabled",
                ));
            }
        }
    }

    fn validate_profile(config: &Config, result: &mut ValidationResult) {
        if config.profile.environment == Environment::Test && config.logging.directory.is_some() {
            result.add_warning(ValidationWarning::new(
                "logging.directory",
                "File logging is enabled for the test environment",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
