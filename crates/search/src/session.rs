//! Search session state for interactive callers.
//!
//! A [`Session`] bundles the working ingredient set with the results of the
//! last search. Like [`IngredientSet`] it is a value: each action returns the
//! next session.

use crate::error::SetError;
use crate::limits::SearchLimits;
use crate::model::{Recipe, ScoredRecipe};
use crate::scorer::score_recipes;
use crate::working_set::IngredientSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    limits: SearchLimits,
    ingredients: IngredientSet,
    results: Option<Vec<ScoredRecipe>>,
}

impl Session {
    /// Creates an empty session with the given limits.
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    pub fn ingredients(&self) -> &IngredientSet {
        &self.ingredients
    }

    /// Results of the last search, if one has run since the last clear.
    pub fn results(&self) -> Option<&[ScoredRecipe]> {
        self.results.as_deref()
    }

    pub fn has_searched(&self) -> bool {
        self.results.is_some()
    }

    /// Adds an ingredient. Previous results are kept until the next search.
    pub fn add(&self, raw: &str) -> Result<Self, SetError> {
        Ok(Self {
            ingredients: self.ingredients.with_added(raw, &self.limits)?,
            ..self.clone()
        })
    }

    /// Removes every entry equal to `name`.
    pub fn remove(&self, name: &str) -> Self {
        Self {
            ingredients: self.ingredients.without(name),
            ..self.clone()
        }
    }

    /// Scores `catalog` against the current ingredients and stores the results.
    pub fn search(&self, catalog: &[Recipe]) -> Self {
        let results = score_recipes(catalog, self.ingredients.as_slice(), &self.limits);
        Self {
            results: Some(results),
            ..self.clone()
        }
    }

    /// Drops both the ingredients and the results.
    pub fn clear(&self) -> Self {
        Self::new(self.limits)
    }
}
