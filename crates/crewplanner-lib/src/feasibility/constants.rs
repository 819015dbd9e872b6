//! Fixed heuristics used by the feasibility evaluator.

/// Hop count reported when no fleet member can make a hyperspace jump.
pub const UNREACHABLE_HOPS: u64 = 999;

/// Every full multiple of this average MGLT removes one refuel stop.
pub const MGLT_PER_REFUEL_CREDIT: f64 = 50.0;

/// Upper bound on synthesized waypoints ahead of the destination.
pub const MAX_INTERMEDIATE_WAYPOINTS: u32 = 3;

/// Named staging worlds used for synthesized waypoints, in draw order.
pub const WAYPOINT_POOL: [&str; 5] = ["Coruscant", "Naboo", "Tatooine", "Alderaan", "Yavin 4"];

/// Placeholder planet ids for waypoints are `draw index * WAYPOINT_ID_STRIDE`.
pub const WAYPOINT_ID_STRIDE: i64 = 100;
