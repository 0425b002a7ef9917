//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Reasons a raw ingredient is rejected by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngredientError {
    /// Trimmed input is shorter than the minimum length
    #[error("Ingredient must be at least {min} characters")]
    TooShort {
        /// Minimum accepted length
        min: usize,
    },

    /// Trimmed input is longer than the maximum length
    #[error("Ingredient must be no more than {max} characters")]
    TooLong {
        /// Maximum accepted length
        max: usize,
    },

    /// Input contains something other than ASCII letters and whitespace
    #[error("Ingredient can only contain letters and spaces")]
    InvalidCharacters,
}

/// Reasons an ingredient cannot be added to the working set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError {
    /// The set already holds the maximum number of ingredients
    #[error("Ingredient list is full ({max} ingredients)")]
    Full {
        /// Capacity of the set
        max: usize,
    },

    /// The input failed normalization
    #[error(transparent)]
    Invalid(#[from] IngredientError),
}

/// Errors raised while reading a recipe catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog document is not valid JSON
    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog document is valid JSON but not an array of recipes
    #[error("Catalog must be a JSON array, found {0}")]
    NotAnArray(&'static str),
}

/// Error code for integration with smartchef-core error handling.
/// Range: 11xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Ingredient too short
    TooShort = 11001,
    /// Ingredient too long
    TooLong = 11002,
    /// Ingredient has characters outside letters and spaces
    InvalidCharacters = 11003,
    /// Working set is full
    SetFull = 11010,
    /// Catalog JSON could not be parsed
    CatalogJson = 11020,
    /// Catalog JSON has the wrong shape
    CatalogShape = 11021,
}

impl IngredientError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            IngredientError::TooShort { .. } => SearchErrorCode::TooShort,
            IngredientError::TooLong { .. } => SearchErrorCode::TooLong,
            IngredientError::InvalidCharacters => SearchErrorCode::InvalidCharacters,
        }
    }
}

impl SetError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SetError::Full { .. } => SearchErrorCode::SetFull,
            SetError::Invalid(e) => e.code(),
        }
    }
}

impl CatalogError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            CatalogError::Json(_) => SearchErrorCode::CatalogJson,
            CatalogError::NotAnArray(_) => SearchErrorCode::CatalogShape,
        }
    }
}
