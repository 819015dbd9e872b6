//! Application state for HTTP services.
//!
//! Handlers reach the loaded catalog through [`AppState`].

use std::path::Path;
use std::sync::Arc;

use crewplanner_lib::{Catalog, Error as LibError};

/// Error during application state initialization.
#[derive(Debug)]
pub enum AppStateError {
    /// The catalog file exists but could not be parsed or validated.
    CatalogLoad(LibError),

    /// Catalog file not found.
    CatalogNotFound(String),
}

impl std::fmt::Display for AppStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CatalogLoad(e) => write!(f, "failed to load catalog: {}", e),
            Self::CatalogNotFound(path) => write!(f, "catalog not found: {}", path),
        }
    }
}

impl std::error::Error for AppStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CatalogLoad(e) => Some(e),
            Self::CatalogNotFound(_) => None,
        }
    }
}

impl From<LibError> for AppStateError {
    fn from(err: LibError) -> Self {
        match err {
            LibError::CatalogNotFound { path } => Self::CatalogNotFound(path.display().to_string()),
            other => Self::CatalogLoad(other),
        }
    }
}

/// Shared application state for all axum handlers.
///
/// Cheap to clone; the catalog sits behind an `Arc` and is never mutated
/// after startup.
///
/// ```ignore
/// use axum::{Router, routing::post, extract::State};
/// use crewplanner_service_shared::AppState;
///
/// async fn handler(State(state): State<AppState>) {
///     let catalog = state.catalog();
///     // ... resolve records
/// }
///
/// let state = AppState::load("/data/catalog.json").unwrap();
/// let app = Router::new()
///     .route("/api/v1/feasibility", post(handler))
///     .with_state(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
}

impl AppState {
    /// Load application state from a catalog JSON file.
    pub fn load(catalog_path: impl AsRef<Path>) -> Result<Self, AppStateError> {
        let catalog_path = catalog_path.as_ref();

        if !catalog_path.exists() {
            return Err(AppStateError::CatalogNotFound(
                catalog_path.display().to_string(),
            ));
        }

        tracing::info!(path = %catalog_path.display(), "loading catalog");
        let catalog = Catalog::from_path(catalog_path)?;

        Ok(Self::from_catalog(catalog))
    }

    /// Create application state from an already loaded catalog.
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// True when the catalog can serve at least one evaluation.
    pub fn is_ready(&self) -> bool {
        self.catalog.planet_count() > 0 && self.catalog.starship_count() > 0
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("planet_count", &self.catalog.planet_count())
            .field("starship_count", &self.catalog.starship_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewplanner_lib::{Planet, Starship};

    fn small_catalog() -> Catalog {
        Catalog::from_records(
            vec![Planet::new(1, "Tatooine").with_terrain("desert")],
            vec![Starship::new(12, "X-wing").with_hyperdrive(1.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_app_state_from_catalog() {
        let state = AppState::from_catalog(small_catalog());
        assert_eq!(state.catalog().planet_count(), 1);
        assert!(state.is_ready());
    }

    #[test]
    fn test_app_state_clone_shares_catalog() {
        let state1 = AppState::from_catalog(small_catalog());
        let state2 = state1.clone();
        assert!(std::ptr::eq(state1.catalog(), state2.catalog()));
    }

    #[test]
    fn test_empty_catalog_is_not_ready() {
        let state = AppState::from_catalog(Catalog::default());
        assert!(!state.is_ready());

        let planets_only = Catalog::from_records(vec![Planet::new(1, "Hoth")], vec![]).unwrap();
        assert!(!AppState::from_catalog(planets_only).is_ready());
    }

    #[test]
    fn test_app_state_debug() {
        let state = AppState::from_catalog(small_catalog());
        let debug = format!("{:?}", state);
        assert!(debug.contains("planet_count"));
        assert!(debug.contains("starship_count"));
    }

    #[test]
    fn test_app_state_load_nonexistent() {
        match AppState::load("/nonexistent/path/catalog.json") {
            Err(AppStateError::CatalogNotFound(path)) => assert!(path.contains("nonexistent")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
