//! Shared fixture helpers for integration tests.

use std::path::PathBuf;

use crewplanner_lib::{Catalog, Planet, Starship};

/// Path to fixtures directory used by tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Load the fixture catalog.
pub fn fixture_catalog() -> Catalog {
    Catalog::from_path(&fixtures_dir().join("catalog.json")).expect("fixture catalog loads")
}

#[allow(dead_code)]
pub fn planet(name: &str) -> Planet {
    fixture_catalog()
        .find_planet(name)
        .expect("planet present in fixture")
        .clone()
}

#[allow(dead_code)]
pub fn ships(names: &[&str]) -> Vec<Starship> {
    let catalog = fixture_catalog();
    names
        .iter()
        .map(|name| {
            catalog
                .find_starship(name)
                .expect("starship present in fixture")
                .clone()
        })
        .collect()
}
