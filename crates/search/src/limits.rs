//! Tunable bounds for input validation and result ranking.

use serde::{Deserialize, Serialize};

/// Minimum length of a trimmed ingredient.
pub const MIN_INPUT: usize = 3;
/// Maximum length of a trimmed ingredient.
pub const MAX_INPUT: usize = 30;
/// Capacity of the working ingredient set.
pub const MAX_INGREDIENTS: usize = 10;
/// Matched ingredients a recipe needs to be returned.
pub const MIN_MATCH: usize = 2;
/// Maximum number of recipes returned by a search.
pub const MAX_RESULTS: usize = 10;

/// Bounds applied by the normalizer, the working set and the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Minimum trimmed ingredient length
    #[serde(default = "default_min_input")]
    pub min_input: usize,

    /// Maximum trimmed ingredient length
    #[serde(default = "default_max_input")]
    pub max_input: usize,

    /// Capacity of the working ingredient set
    #[serde(default = "default_max_ingredients")]
    pub max_ingredients: usize,

    /// Minimum score for a recipe to be returned
    #[serde(default = "default_min_match")]
    pub min_match: usize,

    /// Maximum number of recipes returned
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            min_input: MIN_INPUT,
            max_input: MAX_INPUT,
            max_ingredients: MAX_INGREDIENTS,
            min_match: MIN_MATCH,
            max_results: MAX_RESULTS,
        }
    }
}

fn default_min_input() -> usize {
    MIN_INPUT
}

fn default_max_input() -> usize {
    MAX_INPUT
}

fn default_max_ingredients() -> usize {
    MAX_INGREDIENTS
}

fn default_min_match() -> usize {
    MIN_MATCH
}

fn default_max_results() -> usize {
    MAX_RESULTS
}
