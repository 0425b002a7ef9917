//! Recipe scoring and ranking.
//!
//! Each recipe is scored by how many user ingredients match at least one of
//! its ingredient names. Recipes under the minimum score are dropped, the
//! rest are ordered by score (highest first, catalog order breaking ties)
//! and cut to the result limit.

use crate::limits::SearchLimits;
use crate::matching::{matches_any, recipe_ingredient_names};
use crate::model::{Recipe, ScoredRecipe};
use tracing::debug;

/// Indices of matched user ingredients for one catalog recipe.
#[derive(Debug)]
struct Candidate {
    index: usize,
    matched: Vec<usize>,
}

impl Candidate {
    #[inline]
    fn score(&self) -> usize {
        self.matched.len()
    }
}

/// Score a catalog with the default limits.
///
/// # Example
/// ```
/// use smartchef_search::{score, Recipe};
///
/// let catalog = vec![Recipe::new("1", "Bruschetta").with_ingredients(["Tomato", "Basil", "Olive Oil"])];
/// let results = score(&catalog, &["tomato", "basil"]);
///
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].used_ingredients, vec!["tomato", "basil"]);
/// assert_eq!(results[0].score, 2);
/// ```
pub fn score<S>(catalog: &[Recipe], user_ingredients: &[S]) -> Vec<ScoredRecipe>
where
    S: AsRef<str>,
{
    score_recipes(catalog, user_ingredients, &SearchLimits::default())
}

/// Score, filter, rank and truncate a catalog against user ingredients.
///
/// User ingredients are compared trimmed and lower-cased, but
/// `used_ingredients` in the output holds them exactly as given. Duplicate
/// user ingredients are scored independently. Never fails: an empty catalog
/// or ingredient list produces an empty result.
pub fn score_recipes<S>(
    catalog: &[Recipe],
    user_ingredients: &[S],
    limits: &SearchLimits,
) -> Vec<ScoredRecipe>
where
    S: AsRef<str>,
{
    let canonical: Vec<String> = user_ingredients
        .iter()
        .map(|u| u.as_ref().trim().to_lowercase())
        .collect();

    let mut candidates = match_catalog(catalog, &canonical);
    let scored = candidates.len();

    candidates.retain(|c| c.score() >= limits.min_match);
    let above_threshold = candidates.len();

    // Vec::sort_by is stable, so equal scores keep catalog order
    candidates.sort_by(|a, b| b.score().cmp(&a.score()));
    candidates.truncate(limits.max_results);

    debug!(
        recipes = scored,
        ingredients = canonical.len(),
        above_threshold,
        returned = candidates.len(),
        "Scored catalog"
    );

    candidates
        .into_iter()
        .map(|c| ScoredRecipe {
            recipe: catalog[c.index].clone(),
            used_ingredients: c
                .matched
                .iter()
                .map(|&i| user_ingredients[i].as_ref().to_string())
                .collect(),
            score: c.matched.len(),
        })
        .collect()
}

/// Match every recipe, keeping catalog order.
fn match_catalog(catalog: &[Recipe], canonical: &[String]) -> Vec<Candidate> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        catalog
            .par_iter()
            .enumerate()
            .map(|(index, recipe)| match_recipe(index, recipe, canonical))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        catalog
            .iter()
            .enumerate()
            .map(|(index, recipe)| match_recipe(index, recipe, canonical))
            .collect()
    }
}

#[inline]
fn match_recipe(index: usize, recipe: &Recipe, canonical: &[String]) -> Candidate {
    let names = recipe_ingredient_names(recipe);
    let matched = if names.is_empty() {
        Vec::new()
    } else {
        canonical
            .iter()
            .enumerate()
            .filter(|(_, u)| matches_any(u, &names))
            .map(|(i, _)| i)
            .collect()
    };

    Candidate { index, matched }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredient;
    use proptest::prelude::*;

    fn recipe(id: &str, names: &[&str]) -> Recipe {
        Recipe::new(id, format!("Recipe {}", id)).with_ingredients(names.iter().copied())
    }

    fn ids(results: &[ScoredRecipe]) -> Vec<&str> {
        results.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_two_matches_returned() {
        let catalog = vec![recipe("1", &["Tomato", "Basil", "Olive Oil"])];
        let results = score(&catalog, &["tomato", "basil"]);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id(), "1");
        assert_eq!(results[0].used_ingredients, vec!["tomato", "basil"]);
        assert_eq!(results[0].score, 2);
    }

    #[test]
    fn test_single_match_below_threshold() {
        let catalog = vec![recipe("1", &["Tomato", "Basil", "Olive Oil"])];
        assert!(score(&catalog, &["tomato"]).is_empty());
    }

    #[test]
    fn test_equal_scores_keep_catalog_order() {
        let catalog = vec![
            recipe("B", &["egg", "milk", "flour"]),
            recipe("A", &["egg", "milk", "flour", "sugar"]),
        ];
        let results = score(&catalog, &["egg", "milk", "flour"]);
        assert_eq!(ids(&results), vec!["B", "A"]);
        assert!(results.iter().all(|r| r.score == 3));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog: Vec<Recipe> = Vec::new();
        assert!(score(&catalog, &["tomato", "basil"]).is_empty());
    }

    #[test]
    fn test_empty_ingredients() {
        let catalog = vec![recipe("1", &["Tomato", "Basil"])];
        let none: [&str; 0] = [];
        assert!(score(&catalog, &none).is_empty());
    }

    #[test]
    fn test_user_phrase_contains_recipe_name() {
        let catalog = vec![recipe("1", &["tomato", "mozzarella"])];
        let results = score(&catalog, &["cherry tomatoes", "mozzarella"]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].used_ingredients, vec!["cherry tomatoes", "mozzarella"]);
    }

    #[test]
    fn test_sorted_by_score_descending() {
        let catalog = vec![
            recipe("low", &["egg", "milk"]),
            recipe("high", &["egg", "milk", "butter"]),
        ];
        let results = score(&catalog, &["egg", "milk", "butter"]);
        assert_eq!(ids(&results), vec!["high", "low"]);
        assert_eq!(results[0].score, 3);
        assert_eq!(results[1].score, 2);
    }

    #[test]
    fn test_used_ingredients_follow_input_order() {
        let catalog = vec![recipe("1", &["Basil", "Garlic", "Tomato"])];
        let results = score(&catalog, &["tomato", "garlic", "basil"]);
        assert_eq!(results[0].used_ingredients, vec!["tomato", "garlic", "basil"]);
    }

    #[test]
    fn test_used_ingredients_are_verbatim() {
        let catalog = vec![recipe("1", &["tomato", "basil"])];
        let results = score(&catalog, &["  Tomato ", "BASIL"]);
        assert_eq!(results[0].used_ingredients, vec!["  Tomato ", "BASIL"]);
    }

    #[test]
    fn test_one_match_per_user_ingredient() {
        let catalog = vec![recipe("1", &["Red Onion", "Spring Onion", "Onion Powder", "Salt"])];
        let results = score(&catalog, &["onion", "salt"]);
        assert_eq!(results[0].score, 2);
    }

    #[test]
    fn test_duplicate_user_ingredients_count_twice() {
        let catalog = vec![recipe("1", &["Egg"])];
        let results = score(&catalog, &["egg", "egg"]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].used_ingredients, vec!["egg", "egg"]);
        assert_eq!(results[0].score, 2);
    }

    #[test]
    fn test_recipe_without_named_ingredients_never_matches() {
        let mut unnamed = Recipe::new("1", "Mystery");
        unnamed.ingredients = vec![Ingredient::new("", "2 cups"), Ingredient::default()];
        let catalog = vec![unnamed, Recipe::new("2", "Empty")];
        assert!(score(&catalog, &["flour", "sugar", "egg"]).is_empty());
    }

    #[test]
    fn test_permissive_short_token_kept() {
        let catalog = vec![recipe("1", &["Boiling water", "Pasta"])];
        let results = score(&catalog, &["oil", "pasta"]);
        assert_eq!(results[0].used_ingredients, vec!["oil", "pasta"]);
    }

    #[test]
    fn test_truncated_to_max_results() {
        let catalog: Vec<Recipe> = (0..25)
            .map(|i| recipe(&i.to_string(), &["rice", "beans"]))
            .collect();
        let results = score(&catalog, &["rice", "beans"]);
        assert_eq!(results.len(), crate::limits::MAX_RESULTS);
        assert_eq!(results[0].id(), "0");
        assert_eq!(results[9].id(), "9");
    }

    #[test]
    fn test_custom_limits() {
        let limits = SearchLimits {
            min_match: 1,
            max_results: 2,
            ..SearchLimits::default()
        };
        let catalog = vec![
            recipe("1", &["rice"]),
            recipe("2", &["rice", "beans"]),
            recipe("3", &["beans"]),
        ];
        let results = score_recipes(&catalog, &["rice", "beans"], &limits);
        assert_eq!(ids(&results), vec!["2", "1"]);
    }

    #[test]
    fn test_accepts_owned_strings() {
        let catalog = vec![recipe("1", &["Leek", "Potato"])];
        let user = vec!["leek".to_string(), "potato".to_string()];
        assert_eq!(score(&catalog, &user).len(), 1);
    }

    #[test]
    fn test_deterministic() {
        let catalog = vec![
            recipe("1", &["Tomato", "Basil"]),
            recipe("2", &["Tomato", "Basil", "Garlic"]),
            recipe("3", &["Garlic", "Basil"]),
        ];
        let user = ["tomato", "basil", "garlic"];
        assert_eq!(score(&catalog, &user), score(&catalog, &user));
    }

    const VOCAB: &[&str] = &[
        "egg", "milk", "flour", "tomato", "cherry tomatoes", "basil", "oil", "olive oil",
        "garlic", "onion", "rice", "salt",
    ];

    fn arb_catalog() -> impl Strategy<Value = Vec<Recipe>> {
        prop::collection::vec(prop::collection::vec(0..VOCAB.len(), 0..6), 0..40).prop_map(
            |recipes| {
                recipes
                    .into_iter()
                    .enumerate()
                    .map(|(i, names)| {
                        Recipe::new(i.to_string(), "generated")
                            .with_ingredients(names.into_iter().map(|n| VOCAB[n]))
                    })
                    .collect()
            },
        )
    }

    fn arb_user() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(0..VOCAB.len(), 0..8)
            .prop_map(|idx| idx.into_iter().map(|i| VOCAB[i].to_string()).collect())
    }

    proptest! {
        #[test]
        fn prop_deterministic(catalog in arb_catalog(), user in arb_user()) {
            prop_assert_eq!(score(&catalog, &user), score(&catalog, &user));
        }

        #[test]
        fn prop_score_bounds(catalog in arb_catalog(), user in arb_user()) {
            for r in score(&catalog, &user) {
                prop_assert_eq!(r.score, r.used_ingredients.len());
                prop_assert!(r.score <= user.len());
                prop_assert!(r.score >= crate::limits::MIN_MATCH);
                for used in &r.used_ingredients {
                    prop_assert!(user.contains(used));
                }
            }
        }

        #[test]
        fn prop_bounded_output(catalog in arb_catalog(), user in arb_user()) {
            prop_assert!(score(&catalog, &user).len() <= crate::limits::MAX_RESULTS);
        }

        #[test]
        fn prop_sorted_with_stable_ties(catalog in arb_catalog(), user in arb_user()) {
            let results = score(&catalog, &user);
            for pair in results.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
                if pair[0].score == pair[1].score {
                    let a: usize = pair[0].id().parse().unwrap();
                    let b: usize = pair[1].id().parse().unwrap();
                    prop_assert!(a < b);
                }
            }
        }
    }
}
