use std::path::PathBuf;

use thiserror::Error;

use crate::model::{PlanetId, StarshipId};

/// Convenient result alias for the crew planner library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// The feasibility engine itself never fails; these errors come from the
/// boundary pieces that load catalogs and resolve records for it.
#[derive(Debug, Error)]
pub enum Error {
    /// Catalog file could not be located at the resolved path.
    #[error("catalog not found at {path}")]
    CatalogNotFound { path: PathBuf },

    /// Raised when a catalog record fails validation.
    #[error("invalid catalog data: {message}")]
    CatalogValidation { message: String },

    /// Raised when two planets share an identifier.
    #[error("duplicate planet id encountered: {id}")]
    DuplicatePlanetId { id: PlanetId },

    /// Raised when two starships share an identifier.
    #[error("duplicate starship id encountered: {id}")]
    DuplicateStarshipId { id: StarshipId },

    /// Raised when a planet id or name could not be found in the catalog.
    #[error("unknown planet: {query}{}", format_suggestions(.suggestions))]
    UnknownPlanet {
        query: String,
        suggestions: Vec<String>,
    },

    /// Raised when a starship id or name could not be found in the catalog.
    #[error("unknown starship: {query}{}", format_suggestions(.suggestions))]
    UnknownStarship {
        query: String,
        suggestions: Vec<String>,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for catalog JSON decoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
