//! Configuration validation
//!
//! A small fluent validator used to sanity-check loaded configuration
//! before any search runs.
//!
//! # Example
//!
//! ```rust
//! use smartchef_core::validation::Validator;
//!
//! let result = Validator::new()
//!     .range("limits.max_results", 0, 1, usize::MAX)
//!     .validate();
//!
//! assert!(!result.is_valid());
//! assert_eq!(result.errors()[0].code, "RANGE");
//! ```

use crate::config::ConfigSchema;
use crate::error::{Error, ErrorCode, Result};
use serde::{Deserialize, Serialize};

/// Validation error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field that failed validation
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
    /// Expected value (if applicable)
    pub expected: Option<String>,
    /// Actual value (if applicable)
    pub actual: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create a new empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get all errors
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Get all warnings
    pub fn warnings(&self) -> &[ValidationError] {
        &self.warnings
    }

    /// Add an error
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: ValidationError) {
        self.warnings.push(warning);
    }

    /// Convert to Result type
    pub fn to_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            let messages: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
            Err(Error::new(
                ErrorCode::ConfigValidationError,
                format!("Validation failed: {}", messages.join("; ")),
            ))
        }
    }
}

/// Fluent validator builder
pub struct Validator {
    result: ValidationResult,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self {
            result: ValidationResult::new(),
        }
    }

    /// Validate that a field is not empty
    pub fn required(mut self, field: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: "Field is required".to_string(),
                code: "REQUIRED".to_string(),
                expected: Some("non-empty value".to_string()),
                actual: Some("empty".to_string()),
            });
        }
        self
    }

    /// Validate that a value is in a list of allowed values
    pub fn one_of(mut self, field: &str, value: &str, allowed: &[&str]) -> Self {
        if !allowed.contains(&value) {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: format!("Must be one of: {}", allowed.join(", ")),
                code: "ONE_OF".to_string(),
                expected: Some(allowed.join(", ")),
                actual: Some(value.to_string()),
            });
        }
        self
    }

    /// Validate a numeric range
    pub fn range<T: PartialOrd + std::fmt::Display>(
        mut self,
        field: &str,
        value: T,
        min: T,
        max: T,
    ) -> Self {
        if value < min || value > max {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: format!("Must be between {} and {}", min, max),
                code: "RANGE".to_string(),
                expected: Some(format!("{} - {}", min, max)),
                actual: Some(value.to_string()),
            });
        }
        self
    }

    /// Add a custom validation
    pub fn custom<F>(mut self, field: &str, f: F) -> Self
    where
        F: FnOnce() -> Option<String>,
    {
        if let Some(message) = f() {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message,
                code: "CUSTOM".to_string(),
                expected: None,
                actual: None,
            });
        }
        self
    }

    /// Add a warning (non-blocking)
    pub fn warn_if(mut self, field: &str, condition: bool, message: &str) -> Self {
        if condition {
            self.result.add_warning(ValidationError {
                field: field.to_string(),
                message: message.to_string(),
                code: "WARNING".to_string(),
                expected: None,
                actual: None,
            });
        }
        self
    }

    /// Complete validation and return result
    pub fn validate(self) -> ValidationResult {
        self.result
    }
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Validate a loaded configuration
pub fn validate_config(config: &ConfigSchema) -> ValidationResult {
    let limits = &config.limits;

    let mut validator = Validator::new();
    if let Some(path) = &config.catalog.path {
        validator = validator.required("catalog.path", path);
    }

    validator
        .range("limits.min_input", limits.min_input, 1, usize::MAX)
        .custom("limits.max_input", || {
            (limits.max_input < limits.min_input).then(|| {
                format!(
                    "Must be at least limits.min_input ({}), got {}",
                    limits.min_input, limits.max_input
                )
            })
        })
        .range("limits.max_ingredients", limits.max_ingredients, 1, usize::MAX)
        .range("limits.min_match", limits.min_match, 1, usize::MAX)
        .range("limits.max_results", limits.max_results, 1, usize::MAX)
        .warn_if(
            "limits.min_match",
            limits.min_match > limits.max_ingredients,
            "min_match exceeds max_ingredients; no search can return results",
        )
        .one_of(
            "logging.level",
            &config.logging.level.to_lowercase(),
            LOG_LEVELS,
        )
        .validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartchef_search::SearchLimits;

    fn with_limits(limits: SearchLimits) -> ConfigSchema {
        ConfigSchema {
            limits,
            ..ConfigSchema::default()
        }
    }

    #[test]
    fn test_required_validation() {
        let result = Validator::new().required("name", "").validate();
        assert!(!result.is_valid());
        assert_eq!(result.errors()[0].code, "REQUIRED");
    }

    #[test]
    fn test_blank_catalog_path_rejected() {
        let mut config = ConfigSchema::default();
        config.catalog.path = Some("  ".to_string());

        let result = validate_config(&config);
        assert!(!result.is_valid());
        assert_eq!(result.errors()[0].field, "catalog.path");
        assert_eq!(result.errors()[0].code, "REQUIRED");

        config.catalog.path = Some("recipes.json".to_string());
        assert!(validate_config(&config).is_valid());
    }

    #[test]
    fn test_range_validation() {
        let result = Validator::new().range("count", 150, 1, 100).validate();
        assert!(!result.is_valid());
        assert_eq!(result.errors()[0].code, "RANGE");
    }

    #[test]
    fn test_one_of_validation() {
        let result = Validator::new()
            .one_of("level", "loud", &["info", "warn"])
            .validate();
        assert_eq!(result.errors()[0].code, "ONE_OF");
    }

    #[test]
    fn test_default_config_is_valid() {
        let result = validate_config(&ConfigSchema::default());
        assert!(result.is_valid());
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn test_zero_limits_rejected() {
        let result = validate_config(&with_limits(SearchLimits {
            min_input: 0,
            max_results: 0,
            ..SearchLimits::default()
        }));
        assert_eq!(result.errors().len(), 2);
        assert_eq!(result.errors()[0].field, "limits.min_input");
        assert_eq!(result.errors()[1].field, "limits.max_results");
    }

    #[test]
    fn test_inverted_input_bounds_rejected() {
        let result = validate_config(&with_limits(SearchLimits {
            min_input: 8,
            max_input: 4,
            ..SearchLimits::default()
        }));
        assert!(!result.is_valid());
        assert_eq!(result.errors()[0].code, "CUSTOM");
    }

    #[test]
    fn test_unreachable_threshold_is_warning() {
        let result = validate_config(&with_limits(SearchLimits {
            min_match: 5,
            max_ingredients: 3,
            ..SearchLimits::default()
        }));
        assert!(result.is_valid());
        assert_eq!(result.warnings().len(), 1);
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let mut config = ConfigSchema::default();
        config.logging.level = "chatty".to_string();
        assert!(!validate_config(&config).is_valid());
    }

    #[test]
    fn test_to_result_error_code() {
        let err = validate_config(&with_limits(SearchLimits {
            max_ingredients: 0,
            ..SearchLimits::default()
        }))
        .to_result()
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigValidationError);
        assert!(err.message.contains("limits.max_ingredients"));
    }
}
