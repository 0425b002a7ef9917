//! Check command - validate ingredients without searching

use crate::OutputFormat;
use anyhow::Result;
use serde::Serialize;
use smartchef_cli::output::{format_count, Status};
use smartchef_core::Error;
use smartchef_search::{validate_with, SearchLimits};

#[derive(Debug, Serialize)]
struct CheckOutcome {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    normalized: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run check command
pub fn run(ingredients: &[String], limits: &SearchLimits, format: OutputFormat) -> Result<()> {
    let outcomes: Vec<CheckOutcome> = ingredients
        .iter()
        .map(|raw| match validate_with(raw, limits) {
            Ok(normalized) => CheckOutcome {
                input: raw.clone(),
                normalized: Some(normalized.into_inner()),
                error: None,
            },
            Err(e) => CheckOutcome {
                input: raw.clone(),
                normalized: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcomes)?),
        OutputFormat::Text => {
            for outcome in &outcomes {
                match (&outcome.normalized, &outcome.error) {
                    (Some(normalized), _) => Status::success(normalized),
                    (_, Some(error)) => Status::error(&format!("{:?}: {}", outcome.input, error)),
                    _ => {}
                }
            }
        }
    }

    let rejected = outcomes.iter().filter(|o| o.error.is_some()).count();
    if rejected > 0 {
        return Err(Error::validation(format!(
            "{} of {} rejected",
            format_count(rejected, "ingredient", "ingredients"),
            ingredients.len()
        ))
        .into());
    }

    Ok(())
}
