//! WASM bindings for the matching engine.

use wasm_bindgen::prelude::*;

/// Validate and normalize one ingredient.
///
/// # Returns
/// The normalized ingredient, or the validation message prefixed with
/// `error:`.
#[wasm_bindgen]
pub fn validate_ingredient(raw: &str) -> String {
    match crate::validate(raw) {
        Ok(normalized) => normalized.into_inner(),
        Err(e) => format!("error:{}", e),
    }
}

/// Score a catalog against user ingredients and return ranked results as JSON.
///
/// # Arguments
/// * `catalog_json` - JSON array of recipe records
/// * `ingredients_json` - JSON array of ingredient strings; other elements are ignored
///
/// # Returns
/// JSON array of scored recipes with `usedIngredients` and `score` fields,
/// or `[]` if the catalog is malformed or the ingredients are not an array.
#[wasm_bindgen]
pub fn match_recipes(catalog_json: &str, ingredients_json: &str) -> String {
    let catalog = match crate::parse_catalog(catalog_json) {
        Ok(catalog) => catalog,
        Err(_) => return "[]".to_string(),
    };

    let ingredients: Vec<String> = match serde_json::from_str(ingredients_json) {
        Ok(serde_json::Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(text) => Some(text),
                _ => None,
            })
            .collect(),
        _ => return "[]".to_string(),
    };

    let results = crate::score(&catalog.recipes, &ingredients);

    serde_json::to_string(&results).unwrap_or_else(|_| "[]".to_string())
}
