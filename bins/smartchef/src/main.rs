//! smartchef - find recipes you can cook with what is in the kitchen
//!
//! Validates ingredient input, loads a recipe catalog and ranks recipes by
//! how many of the given ingredients they use.

use clap::{Parser, Subcommand, ValueEnum};
use smartchef_cli::output::Status;
use smartchef_core::config::Config;
use smartchef_core::error::exit_codes;
use smartchef_telemetry::TelemetryConfig;
use std::path::PathBuf;
use std::process::ExitCode;

mod catalog;
mod commands;

use commands::{check, repl, search};

/// Ingredient-based recipe finder
#[derive(Parser)]
#[command(name = "smartchef")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Configuration file (defaults to .smartchef.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate ingredients and show their normalized form
    Check {
        /// Ingredients to validate
        #[arg(required = true)]
        ingredients: Vec<String>,
    },

    /// Rank catalog recipes against a list of ingredients
    Search {
        /// Recipe catalog (JSON array)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Ingredient to search with (repeatable)
        #[arg(short, long = "ingredient", required = true)]
        ingredients: Vec<String>,

        /// Print collected metrics to stderr after the search
        #[arg(long)]
        metrics: bool,
    },

    /// Interactive session: add and remove ingredients, then search
    Repl {
        /// Recipe catalog (JSON array)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report_failure(&e.into(), cli.format),
    };

    let logging = &config.schema.logging;
    let telemetry = TelemetryConfig {
        log_level: if cli.verbose {
            "debug".to_string()
        } else {
            logging.level.clone()
        },
        show_target: logging.show_target,
    };
    if let Err(e) = smartchef_telemetry::init_with_config(telemetry) {
        Status::warning(&format!("Logging disabled: {}", e));
    }

    for warning in &config.warnings {
        tracing::warn!("{}", warning);
    }

    let limits = config.schema.limits;
    let result = match cli.command {
        Commands::Check { ingredients } => check::run(&ingredients, &limits, cli.format),

        Commands::Search { catalog, ingredients, metrics } => {
            catalog::resolve(catalog, &config).and_then(|catalog| {
                search::run(&catalog, &ingredients, &limits, cli.format, metrics)
            })
        }

        Commands::Repl { catalog } => catalog::resolve(catalog, &config).and_then(|catalog| {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            repl::run(&catalog.recipes, limits, stdin.lock(), &mut stdout)
                .map_err(anyhow::Error::from)
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(&e, cli.format),
    }
}

/// Print a failure on stderr and map it to an exit code.
///
/// With `--format json`, coded errors are written as a JSON report.
fn report_failure(e: &anyhow::Error, format: OutputFormat) -> ExitCode {
    let coded = e.downcast_ref::<smartchef_core::Error>();

    match (format, coded) {
        (OutputFormat::Json, Some(err)) => match serde_json::to_string_pretty(&err.to_report()) {
            Ok(json) => eprintln!("{}", json),
            Err(_) => Status::error(&e.to_string()),
        },
        _ => Status::error(&e.to_string()),
    }

    let code = coded
        .map(|err| err.exit_code())
        .unwrap_or(exit_codes::FAILURE);
    ExitCode::from(code as u8)
}
