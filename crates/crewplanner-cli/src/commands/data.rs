//! Catalog location and loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crewplanner_lib::Catalog;

/// Environment variable naming the catalog file when `--data` is absent.
pub const DATA_ENV_VAR: &str = "CREWPLANNER_DATA";

/// Load the catalog.
///
/// Resolution order:
/// 1. The explicit `--data` path (must exist)
/// 2. `CREWPLANNER_DATA` environment variable
/// 3. Debug fixture path (only in debug builds)
pub fn load_catalog(explicit: Option<&Path>) -> Result<Catalog> {
    if let Some(path) = explicit {
        return Catalog::from_path(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()));
    }

    let path = catalog_candidates()
        .into_iter()
        .find(|p| p.exists())
        .ok_or_else(|| {
            anyhow::anyhow!("catalog not found; pass --data or set {}", DATA_ENV_VAR)
        })?;

    Catalog::from_path(&path)
        .with_context(|| format!("failed to load catalog from {}", path.display()))
}

fn catalog_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(env_path) = std::env::var(DATA_ENV_VAR) {
        candidates.push(PathBuf::from(env_path));
    }

    if cfg!(debug_assertions) {
        let fixture =
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/catalog.json");
        candidates.push(fixture);
    }

    candidates
}
