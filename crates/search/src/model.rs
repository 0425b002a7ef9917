//! Recipe data types shared by the catalog boundary and the scorer.

use serde::{Deserialize, Serialize};

/// One line of a recipe's ingredient list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Free-text name as authored, e.g. "Cherry Tomatoes"
    #[serde(default)]
    pub name: String,
    /// Free-text quantity, e.g. "200 g"
    #[serde(default)]
    pub amount: String,
}

impl Ingredient {
    /// Creates an ingredient with a name and amount.
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
        }
    }

    /// Creates an ingredient with no amount.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, "")
    }
}

/// A catalog recipe. Read-only from the engine's point of view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Identifier, unique within a catalog
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    /// Image identifier, resolved to a URL elsewhere
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Cooking time in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default)]
    pub steps: Vec<String>,
}

impl Recipe {
    /// Creates a recipe with an id and title and nothing else.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Builder-style helper that appends named ingredients.
    pub fn with_ingredients<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients
            .extend(names.into_iter().map(Ingredient::named));
        self
    }
}

/// A recipe returned by a search, with the user ingredients it matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Matched user ingredients, in the order the user entered them
    pub used_ingredients: Vec<String>,
    /// Number of matched user ingredients; always `used_ingredients.len()`
    pub score: usize,
}

impl ScoredRecipe {
    /// Recipe id shortcut.
    pub fn id(&self) -> &str {
        &self.recipe.id
    }
}
