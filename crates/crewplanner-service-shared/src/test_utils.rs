//! Test utilities for service handler testing.
//!
//! Handlers are exercised against the fixture catalog shared with the
//! library and CLI tests.

use std::path::PathBuf;
use std::sync::OnceLock;

use crate::state::AppState;

/// Path to the fixture catalog.
pub const TEST_FIXTURE_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../docs/fixtures/catalog.json"
);

static TEST_STATE: OnceLock<AppState> = OnceLock::new();

/// Shared `AppState` loaded from the fixture catalog, cached after first use.
///
/// # Panics
///
/// Panics if the fixture cannot be loaded, which means the test setup is
/// broken.
pub fn test_state() -> AppState {
    TEST_STATE
        .get_or_init(|| {
            let path = fixture_catalog_path();
            AppState::load(&path)
                .unwrap_or_else(|e| panic!("failed to load test fixture from {:?}: {}", path, e))
        })
        .clone()
}

pub fn fixture_catalog_path() -> PathBuf {
    PathBuf::from(TEST_FIXTURE_PATH)
}

/// Record ids present in the fixture catalog.
pub mod fixture_ids {
    use crewplanner_lib::{PlanetId, StarshipId};

    /// Tatooine: desert/arid, distance factor 5.
    pub const TATOOINE: PlanetId = 1;
    /// Hoth: tundra/frozen, distance factor 6.
    pub const HOTH: PlanetId = 4;
    /// Hyperdrive 0.5, MGLT 75.
    pub const MILLENNIUM_FALCON: StarshipId = 10;
    /// Hyperdrive 1.0, MGLT 100, cost 149,999.
    pub const X_WING: StarshipId = 12;
    /// Hyperdrive "n/a".
    pub const V_WING: StarshipId = 75;
}
