//! Ingredient match predicate.
//!
//! A user ingredient matches a recipe ingredient when either string contains
//! the other, ignoring case. "tomato" matches "cherry tomatoes" and the
//! reverse. Short tokens match loosely ("oil" matches "boiling"); that is
//! accepted behavior.

use crate::model::Recipe;

/// Lower-cased names of a recipe's ingredients.
///
/// Ingredients with an empty name are skipped. Names are not trimmed or
/// deduplicated.
pub fn recipe_ingredient_names(recipe: &Recipe) -> Vec<String> {
    recipe
        .ingredients
        .iter()
        .filter(|i| !i.name.is_empty())
        .map(|i| i.name.to_lowercase())
        .collect()
}

/// Returns true if the user ingredient and recipe ingredient name contain
/// one another.
///
/// Both sides are lower-cased and the user side is trimmed, so callers that
/// skipped normalization still get consistent results.
pub fn ingredient_matches(user: &str, recipe_name: &str) -> bool {
    let u = user.trim().to_lowercase();
    let r = recipe_name.to_lowercase();
    contains_either(&u, &r)
}

/// Bidirectional containment on already-canonical strings.
#[inline]
pub(crate) fn contains_either(user: &str, recipe_name: &str) -> bool {
    recipe_name.contains(user) || user.contains(recipe_name)
}

/// Returns true if the canonical user ingredient matches any name.
#[inline]
pub(crate) fn matches_any(user: &str, recipe_names: &[String]) -> bool {
    recipe_names.iter().any(|r| contains_either(user, r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredient;

    #[test]
    fn test_exact_match() {
        assert!(ingredient_matches("basil", "Basil"));
    }

    #[test]
    fn test_user_inside_recipe_name() {
        assert!(ingredient_matches("tomato", "Cherry Tomatoes"));
    }

    #[test]
    fn test_recipe_name_inside_user() {
        assert!(ingredient_matches("cherry tomatoes", "tomato"));
    }

    #[test]
    fn test_permissive_short_token() {
        assert!(ingredient_matches("oil", "boiling water"));
    }

    #[test]
    fn test_user_side_trimmed() {
        assert!(ingredient_matches("  Garlic ", "garlic cloves"));
    }

    #[test]
    fn test_no_match() {
        assert!(!ingredient_matches("beef", "chicken breast"));
    }

    #[test]
    fn test_recipe_names_skip_empty() {
        let mut recipe = Recipe::new("1", "Pasta").with_ingredients(["Penne", "", "Parmesan"]);
        recipe.ingredients.push(Ingredient::new("", "1 pinch"));
        assert_eq!(recipe_ingredient_names(&recipe), vec!["penne", "parmesan"]);
    }

    #[test]
    fn test_recipe_names_keep_duplicates() {
        let recipe = Recipe::new("1", "Omelette").with_ingredients(["Egg", "egg", " "]);
        assert_eq!(recipe_ingredient_names(&recipe), vec!["egg", "egg", " "]);
    }
}
