//! Search command - rank catalog recipes against ingredients

use crate::OutputFormat;
use anyhow::Result;
use smartchef_cli::output::{format_count, format_duration, format_results, Status};
use smartchef_search::{score_recipes, Catalog, IngredientSet, SearchLimits};
use smartchef_telemetry::{metrics, Timer};
use tracing::debug;

/// Build the working set from raw input, reporting entries that were turned away.
pub fn collect_ingredients(raw: &[String], limits: &SearchLimits) -> IngredientSet {
    raw.iter().fold(IngredientSet::new(), |set, input| {
        match set.with_added(input, limits) {
            Ok(next) => next,
            Err(e) => {
                Status::warning(&format!("Skipping {:?}: {}", input, e));
                set
            }
        }
    })
}

/// Run search command
pub fn run(
    catalog: &Catalog,
    raw_ingredients: &[String],
    limits: &SearchLimits,
    format: OutputFormat,
    show_metrics: bool,
) -> Result<()> {
    let ingredients = collect_ingredients(raw_ingredients, limits);
    debug!(ingredients = ?ingredients.as_slice(), "Working set ready");

    let timer = Timer::start("score_ms");
    let results = score_recipes(&catalog.recipes, ingredients.as_slice(), limits);
    let elapsed = timer.stop();

    metrics().increment("searches");
    metrics().increment_by("recipes_returned", results.len() as u64);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Text => {
            Status::header(&format!(
                "Recipes for {}",
                ingredients.as_slice().join(", ")
            ));
            if results.is_empty() {
                Status::info(&format!(
                    "No recipe uses at least {} of your ingredients",
                    limits.min_match
                ));
            } else {
                print!("{}", format_results(&results));
            }
            println!();
            Status::info(&format!(
                "{} matched out of {} in {}",
                format_count(results.len(), "recipe", "recipes"),
                catalog.len(),
                format_duration(elapsed)
            ));
        }
    }

    if show_metrics {
        eprintln!("{}", serde_json::to_string_pretty(&metrics().export_json())?);
    }

    Ok(())
}
