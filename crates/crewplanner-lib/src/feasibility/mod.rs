//! Mission feasibility evaluation.
//!
//! This module is organized into focused submodules:
//!
//! - [`fleet`] - Fleet capacity aggregation over normalized starship fields
//! - [`journey`] - Hop and refuel estimation from the distance factor
//! - [`route`] - Suggested waypoint synthesis
//! - [`evaluate`](mod@evaluate) - Constraint checks and result assembly
//! - [`constants`] - Fixed heuristics shared by the above
//!
//! Evaluation is a pure function of its inputs. It performs no I/O and holds
//! no state between calls, so it can be invoked concurrently without
//! coordination.

pub mod constants;
pub mod evaluate;
pub mod fleet;
pub mod journey;
pub mod route;

pub use constants::{
    MAX_INTERMEDIATE_WAYPOINTS, MGLT_PER_REFUEL_CREDIT, UNREACHABLE_HOPS, WAYPOINT_ID_STRIDE,
    WAYPOINT_POOL,
};
pub use evaluate::{evaluate, ConstraintViolation, Constraints, FeasibilityResult};
pub use fleet::{Capabilities, FleetSummary, FleetTotals};
pub use journey::JourneyEstimate;
pub use route::{suggest_route, RouteStop};
