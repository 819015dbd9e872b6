//! Heuristic distance model derived from planet terrain and climate.
//!
//! Journey length is not simulated. Instead each environmental keyword carries
//! a hand-tuned difficulty factor and a destination's distance factor is the
//! highest factor among its descriptors, never lower than
//! [`BASELINE_DISTANCE_FACTOR`].

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Factor applied when no descriptor is present or none is recognised.
pub const BASELINE_DISTANCE_FACTOR: u32 = 5;

const ENVIRONMENT_FACTORS: [(&str, u32); 11] = [
    ("desert", 5),
    ("arid", 5),
    ("frozen", 6),
    ("tundra", 6),
    ("swamp", 4),
    ("jungle", 4),
    ("temperate", 3),
    ("grasslands", 3),
    ("forests", 3),
    ("oceanic", 4),
    ("water", 4),
];

/// Terrain keyword factors, keyed by lower-case single words.
pub static TERRAIN_FACTORS: Lazy<HashMap<&'static str, u32>> =
    Lazy::new(|| ENVIRONMENT_FACTORS.into_iter().collect());

/// Climate keyword factors, keyed by lower-case single words.
pub static CLIMATE_FACTORS: Lazy<HashMap<&'static str, u32>> =
    Lazy::new(|| ENVIRONMENT_FACTORS.into_iter().collect());

/// Estimate the distance factor for a destination's descriptors.
///
/// ```
/// use crewplanner_lib::distance::distance_factor;
///
/// assert_eq!(distance_factor(Some("desert"), Some("arid")), 5);
/// assert_eq!(distance_factor(Some("tundra, ice caves"), Some("frozen")), 6);
/// assert_eq!(distance_factor(None, None), 5);
/// ```
pub fn distance_factor(terrain: Option<&str>, climate: Option<&str>) -> u32 {
    let terrain_factor = terrain.and_then(|t| strongest_factor(t, &TERRAIN_FACTORS));
    let climate_factor = climate.and_then(|c| strongest_factor(c, &CLIMATE_FACTORS));

    [terrain_factor, climate_factor]
        .into_iter()
        .flatten()
        .fold(BASELINE_DISTANCE_FACTOR, u32::max)
}

fn strongest_factor(descriptor: &str, table: &HashMap<&'static str, u32>) -> Option<u32> {
    descriptor
        .to_lowercase()
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .filter_map(|word| table.get(word).copied())
        .max()
}
