//! Read-only catalog of planets and starships.
//!
//! The feasibility engine works on records that have already been fetched.
//! The catalog is the boundary piece that loads them from a JSON dataset and
//! resolves the identifiers or names a caller supplies.
//!
//! Dataset layout:
//!
//! ```json
//! {
//!   "planets": [{ "id": 1, "name": "Tatooine", "terrain": "desert", "climate": "arid" }],
//!   "starships": [{ "id": 12, "name": "X-wing", "hyperdrive_rating": "1.0", "MGLT": "100" }]
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::error::{Error, Result};
use crate::model::{Planet, PlanetId, Starship, StarshipId};

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Maximum number of suggestions attached to an unknown-record error.
const MAX_SUGGESTIONS: usize = 3;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    planets: Vec<Planet>,
    #[serde(default)]
    starships: Vec<Starship>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    planets: HashMap<PlanetId, Planet>,
    starships: HashMap<StarshipId, Starship>,
    source: Option<PathBuf>,
}

impl Catalog {
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::CatalogNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());

        info!(
            path = %path.display(),
            planets = catalog.planets.len(),
            starships = catalog.starships.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let file: CatalogFile = serde_json::from_reader(reader)?;
        Self::from_records(file.planets, file.starships)
    }

    /// Build a catalog from in-memory records, validating names and ids.
    pub fn from_records(planets: Vec<Planet>, starships: Vec<Starship>) -> Result<Self> {
        let mut planet_map = HashMap::with_capacity(planets.len());
        for mut planet in planets {
            planet.name = validated_name(&planet.name, "planet", planet.id)?;
            let id = planet.id;
            if planet_map.insert(id, planet).is_some() {
                return Err(Error::DuplicatePlanetId { id });
            }
        }

        let mut starship_map = HashMap::with_capacity(starships.len());
        for mut ship in starships {
            ship.name = validated_name(&ship.name, "starship", ship.id)?;
            let id = ship.id;
            if starship_map.insert(id, ship).is_some() {
                return Err(Error::DuplicateStarshipId { id });
            }
        }

        Ok(Self {
            planets: planet_map,
            starships: starship_map,
            source: None,
        })
    }

    pub fn planet(&self, id: PlanetId) -> Option<&Planet> {
        self.planets.get(&id)
    }

    pub fn starship(&self, id: StarshipId) -> Option<&Starship> {
        self.starships.get(&id)
    }

    /// Resolve a planet by numeric id or case-insensitive name.
    pub fn find_planet(&self, query: &str) -> Result<&Planet> {
        let query = query.trim();
        let by_id = query.parse::<PlanetId>().ok().and_then(|id| self.planet(id));
        by_id
            .or_else(|| {
                self.planets
                    .values()
                    .find(|p| p.name.eq_ignore_ascii_case(query))
            })
            .ok_or_else(|| Error::UnknownPlanet {
                query: query.to_string(),
                suggestions: suggest(query, self.planets.values().map(|p| p.name.as_str())),
            })
    }

    /// Resolve a starship by numeric id or case-insensitive name.
    pub fn find_starship(&self, query: &str) -> Result<&Starship> {
        let query = query.trim();
        let by_id = query
            .parse::<StarshipId>()
            .ok()
            .and_then(|id| self.starship(id));
        by_id
            .or_else(|| {
                self.starships
                    .values()
                    .find(|s| s.name.eq_ignore_ascii_case(query))
            })
            .ok_or_else(|| Error::UnknownStarship {
                query: query.to_string(),
                suggestions: suggest(query, self.starships.values().map(|s| s.name.as_str())),
            })
    }

    /// Resolve every starship id, failing on the first unknown one.
    pub fn resolve_fleet(&self, ids: &[StarshipId]) -> Result<Vec<Starship>> {
        ids.iter()
            .map(|id| {
                self.starship(*id)
                    .cloned()
                    .ok_or_else(|| Error::UnknownStarship {
                        query: id.to_string(),
                        suggestions: Vec::new(),
                    })
            })
            .collect()
    }

    pub fn planets_sorted(&self) -> Vec<&Planet> {
        let mut planets: Vec<&Planet> = self.planets.values().collect();
        planets.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        planets
    }

    pub fn starships_sorted(&self) -> Vec<&Starship> {
        let mut ships: Vec<&Starship> = self.starships.values().collect();
        ships.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        ships
    }

    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }

    pub fn starship_count(&self) -> usize {
        self.starships.len()
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn validated_name(name: &str, kind: &str, id: i64) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::CatalogValidation {
            message: format!("{kind} {id} must have a non-empty name"),
        });
    }
    Ok(trimmed.to_string())
}

fn suggest<'a>(query: &str, names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let needle = query.to_lowercase();
    let mut scored: Vec<(f64, &str)> = names
        .map(|name| (strsim::jaro_winkler(&needle, &name.to_lowercase()), name))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, name)| name.to_string())
        .collect()
}
