//! Ingredient-based recipe matching for SmartChef.
//!
//! This crate provides:
//! - Ingredient normalization (trim, length and character checks, lower-casing)
//! - Bidirectional substring matching between user and recipe ingredients
//! - Recipe scoring with a minimum-match threshold, stable ranking and a result cap
//! - A catalog boundary that shapes loosely-typed recipe JSON
//! - Value-typed working set and session state for interactive callers
//!
//! # Example
//!
//! ```
//! use smartchef_search::{parse_catalog, score, validate};
//!
//! let catalog = parse_catalog(r#"[
//!     {"id": "1", "title": "Caprese", "ingredients": [
//!         {"name": "Tomato", "amount": "2"},
//!         {"name": "Mozzarella", "amount": "125 g"},
//!         {"name": "Basil", "amount": "a handful"}
//!     ]}
//! ]"#).unwrap();
//!
//! let user = vec![validate("Tomato").unwrap(), validate("basil").unwrap()];
//! let results = score(&catalog.recipes, &user);
//!
//! assert_eq!(results[0].recipe.title, "Caprese");
//! assert_eq!(results[0].score, 2);
//! ```

mod catalog;
mod error;
pub mod limits;
mod matching;
mod model;
mod normalize;
mod scorer;
mod session;
mod working_set;

#[cfg(feature = "wasm")]
mod wasm;

pub use catalog::{catalog_from_value, parse_catalog, Catalog};
pub use error::{CatalogError, IngredientError, Result, SearchErrorCode, SetError};
pub use limits::SearchLimits;
pub use matching::{ingredient_matches, recipe_ingredient_names};
pub use model::{Ingredient, Recipe, ScoredRecipe};
pub use normalize::{validate, validate_with, NormalizedIngredient};
pub use scorer::{score, score_recipes};
pub use session::Session;
pub use working_set::IngredientSet;
