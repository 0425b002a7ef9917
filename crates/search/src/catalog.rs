//! Catalog boundary: turns loosely-shaped recipe JSON into [`Recipe`] values.
//!
//! Records are shaped one at a time. A record that cannot be shaped is
//! skipped and counted, never fatal for the rest of the catalog.
//!
//! Coercions applied here (and nowhere else):
//! - `steps` given as one string is split on newlines
//! - `ingredients` that is not an array becomes an empty list, non-object entries are dropped
//! - `name`, `amount`, `image` and `title` that are not strings become empty strings
//! - `steps` entries that are not strings are dropped
//! - `cookingTime` and `servings` that are not non-negative integers become absent

use crate::error::{CatalogError, Result};
use crate::model::{Ingredient, Recipe};
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::warn;

/// Recipes that survived the boundary, plus how many records were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub recipes: Vec<Recipe>,
    /// Records skipped because they were not objects with a string `id`
    pub skipped: usize,
}

impl Catalog {
    /// Number of usable recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Returns true if no recipe survived.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Shape one record. Only a non-object record or a missing string `id`
/// rejects it; every other field falls back to an empty value.
fn shape_record(record: Value) -> std::result::Result<Recipe, &'static str> {
    let Value::Object(mut fields) = record else {
        return Err("record is not an object");
    };
    let id = match fields.remove("id") {
        Some(Value::String(id)) => id,
        _ => return Err("record has no string id"),
    };

    Ok(Recipe {
        id,
        title: take_string(&mut fields, "title"),
        overview: fields.remove("overview").and_then(into_string),
        image: take_string(&mut fields, "image"),
        ingredients: fields
            .remove("ingredients")
            .map(shape_ingredients)
            .unwrap_or_default(),
        cooking_time: fields.get("cookingTime").and_then(as_count),
        servings: fields.get("servings").and_then(as_count),
        steps: fields.remove("steps").map(shape_steps).unwrap_or_default(),
    })
}

fn into_string(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        _ => None,
    }
}

fn take_string(fields: &mut Map<String, Value>, key: &str) -> String {
    fields.remove(key).and_then(into_string).unwrap_or_default()
}

/// Non-object entries are dropped; non-string names and amounts become `""`.
fn shape_ingredients(value: Value) -> Vec<Ingredient> {
    let Value::Array(entries) = value else {
        return Vec::new();
    };

    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::Object(mut fields) => Some(Ingredient {
                name: take_string(&mut fields, "name"),
                amount: take_string(&mut fields, "amount"),
            }),
            _ => None,
        })
        .collect()
}

fn shape_steps(value: Value) -> Vec<String> {
    match value {
        Value::String(text) => text.split('\n').map(String::from).collect(),
        Value::Array(steps) => steps.into_iter().filter_map(into_string).collect(),
        _ => Vec::new(),
    }
}

fn as_count(value: &Value) -> Option<u32> {
    value.as_u64().and_then(|n| u32::try_from(n).ok())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parse a catalog document (a JSON array of recipe records).
///
/// # Errors
/// Fails only when the document is not JSON or not an array. Records that
/// are not objects with a string `id` are skipped and reported in
/// [`Catalog::skipped`].
///
/// # Example
/// ```
/// use smartchef_search::parse_catalog;
///
/// let catalog = parse_catalog(r#"[
///     {"id": "1", "title": "Toast", "steps": "Slice\nToast", "ingredients": [{"name": "Bread"}]},
///     {"title": "no id"}
/// ]"#).unwrap();
///
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.skipped, 1);
/// assert_eq!(catalog.recipes[0].steps, vec!["Slice", "Toast"]);
/// ```
pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let document: Value = serde_json::from_str(json)?;
    catalog_from_value(document)
}

/// Shape an already-parsed JSON document into a catalog.
pub fn catalog_from_value(document: Value) -> Result<Catalog> {
    let records = match document {
        Value::Array(records) => records,
        other => return Err(CatalogError::NotAnArray(kind_of(&other))),
    };

    let mut catalog = Catalog {
        recipes: Vec::with_capacity(records.len()),
        skipped: 0,
    };
    let mut seen = HashSet::new();

    for (position, record) in records.into_iter().enumerate() {
        match shape_record(record) {
            Ok(recipe) => {
                if !seen.insert(recipe.id.clone()) {
                    warn!(id = %recipe.id, position, "Duplicate recipe id in catalog");
                }
                catalog.recipes.push(recipe);
            }
            Err(reason) => {
                warn!(position, reason, "Skipping malformed catalog record");
                catalog.skipped += 1;
            }
        }
    }

    Ok(catalog)
}
