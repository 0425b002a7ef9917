//! Ingredient normalization.
//!
//! Raw user input is trimmed, checked for length and character class, and
//! lower-cased. Only ASCII letters and whitespace are accepted, so hyphens,
//! digits and accented letters are all rejected.

use crate::error::IngredientError;
use crate::limits::SearchLimits;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static ALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("ingredient pattern is valid"));

/// A trimmed, lower-cased ingredient that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedIngredient(String);

impl NormalizedIngredient {
    /// Borrow the normalized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the normalized text.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedIngredient {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<NormalizedIngredient> for String {
    fn from(value: NormalizedIngredient) -> Self {
        value.0
    }
}

/// Validate and normalize a raw ingredient with the default limits.
///
/// # Example
/// ```
/// use smartchef_search::{validate, IngredientError};
///
/// assert_eq!(validate("  Tomato ").unwrap().as_str(), "tomato");
/// assert_eq!(validate("ab"), Err(IngredientError::TooShort { min: 3 }));
/// ```
pub fn validate(raw: &str) -> Result<NormalizedIngredient, IngredientError> {
    validate_with(raw, &SearchLimits::default())
}

/// Validate and normalize a raw ingredient.
///
/// Checks run in order: too short, too long, invalid characters. Lengths
/// are counted in characters of the trimmed input.
pub fn validate_with(
    raw: &str,
    limits: &SearchLimits,
) -> Result<NormalizedIngredient, IngredientError> {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();

    if len < limits.min_input {
        return Err(IngredientError::TooShort {
            min: limits.min_input,
        });
    }
    if len > limits.max_input {
        return Err(IngredientError::TooLong {
            max: limits.max_input,
        });
    }
    if !ALLOWED.is_match(trimmed) {
        return Err(IngredientError::InvalidCharacters);
    }

    Ok(NormalizedIngredient(trimmed.to_lowercase()))
}
