//! Locating and loading the recipe catalog.

use smartchef_core::config::Config;
use smartchef_core::error::{Error, ErrorCode, Result, ResultExt};
use smartchef_search::{parse_catalog, Catalog};
use smartchef_telemetry::Timer;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Resolve the catalog from the command line or the configuration, then load it.
pub fn resolve(cli_path: Option<PathBuf>, config: &Config) -> anyhow::Result<Catalog> {
    let path = cli_path
        .or_else(|| config.schema.catalog.path.as_ref().map(PathBuf::from))
        .ok_or_else(|| {
            Error::new(ErrorCode::CatalogNotFound, "No recipe catalog given")
                .with_suggestion("Pass --catalog or set [catalog] path in .smartchef.toml")
        })?;

    Ok(load(&path)?)
}

/// Read and shape a catalog file.
pub fn load(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(Error::catalog_not_found(path));
    }

    let timer = Timer::start("catalog_load_ms");
    let content = std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(format!("Reading {}", path.display()))?;
    let catalog = parse_catalog(&content)
        .map_err(Error::from)
        .context(format!("Parsing {}", path.display()))?;
    timer.stop();

    if catalog.skipped > 0 {
        warn!(
            path = %path.display(),
            skipped = catalog.skipped,
            "Some catalog records could not be read"
        );
    }
    info!(path = %path.display(), recipes = catalog.len(), "Catalog loaded");

    Ok(catalog)
}
