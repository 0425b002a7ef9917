//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use owo_colors::OwoColorize;
use smartchef_search::ScoredRecipe;
use std::fmt::Write;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs % 60.0;
        format!("{}m {:.0}s", mins, remaining_secs)
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Render ranked results as plain text, one block per recipe.
///
/// Ranking starts at 1. Optional fields are shown only when present.
pub fn format_results(results: &[ScoredRecipe]) -> String {
    let mut out = String::new();

    for (rank, scored) in results.iter().enumerate() {
        let recipe = &scored.recipe;
        let _ = writeln!(
            out,
            "{:>2}. {} [{}] ({} of {})",
            rank + 1,
            recipe.title,
            recipe.id,
            format_count(scored.score, "match", "matches"),
            format_count(recipe.ingredients.len(), "ingredient", "ingredients"),
        );

        let mut details = Vec::new();
        if let Some(minutes) = recipe.cooking_time {
            details.push(format!("{} min", minutes));
        }
        if let Some(servings) = recipe.servings {
            details.push(format_count(servings as usize, "serving", "servings"));
        }
        if !details.is_empty() {
            let _ = writeln!(out, "    {}", details.join(", "));
        }

        let _ = writeln!(out, "    uses: {}", scored.used_ingredients.join(", "));
    }

    out
}
