//! Crew planner library entry points.
//!
//! This crate holds the mission feasibility engine: numeric normalization of
//! loosely-typed starship data, the terrain/climate distance heuristic, and
//! the evaluator that checks a fleet against mission constraints. It also
//! provides a read-only [`Catalog`] for resolving planet and starship records.
//! Higher-level consumers (CLI, HTTP service) should only depend on the
//! functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod catalog;
pub mod distance;
pub mod error;
pub mod feasibility;
pub mod format;
pub mod model;
pub mod numeric;

pub use catalog::Catalog;
pub use distance::{distance_factor, BASELINE_DISTANCE_FACTOR};
pub use error::{Error, Result};
pub use feasibility::{
    evaluate, ConstraintViolation, Constraints, FeasibilityResult, FleetTotals, RouteStop,
    UNREACHABLE_HOPS,
};
pub use model::{NumericField, Planet, PlanetId, Starship, StarshipId};
pub use numeric::normalize_numeric;
