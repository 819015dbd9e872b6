//! Suggested waypoint route synthesis.
//!
//! This is a placeholder for real routing: intermediate stops are drawn from a
//! fixed pool of staging worlds rather than computed from any star chart.

use serde::{Deserialize, Serialize};

use crate::model::{Planet, PlanetId};

use super::constants::{MAX_INTERMEDIATE_WAYPOINTS, WAYPOINT_ID_STRIDE, WAYPOINT_POOL};

/// One entry of a suggested route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStop {
    pub planet_id: PlanetId,
    pub name: String,
}

impl RouteStop {
    pub fn destination(planet: &Planet) -> Self {
        Self {
            planet_id: planet.id,
            name: planet.name.clone(),
        }
    }

    /// The `draw`-th synthesized waypoint (1-based).
    fn waypoint(draw: u32) -> Self {
        let name = WAYPOINT_POOL
            .get(draw as usize - 1)
            .map(|name| name.to_string())
            .unwrap_or_else(|| format!("Stop {draw}"));
        Self {
            planet_id: i64::from(draw) * WAYPOINT_ID_STRIDE,
            name,
        }
    }
}

/// Build the suggested route for a journey of `hops` jumps.
///
/// The destination is always the final entry. Each newly drawn waypoint is
/// placed at the front, so the first pool entry sits closest to the
/// destination.
pub fn suggest_route(destination: &Planet, hops: u64) -> Vec<RouteStop> {
    suggest_route_with_limit(destination, hops, MAX_INTERMEDIATE_WAYPOINTS)
}

pub(crate) fn suggest_route_with_limit(
    destination: &Planet,
    hops: u64,
    max_waypoints: u32,
) -> Vec<RouteStop> {
    let waypoints = u32::try_from(hops.saturating_sub(1))
        .unwrap_or(u32::MAX)
        .min(max_waypoints);

    let mut route: Vec<RouteStop> = (1..=waypoints).rev().map(RouteStop::waypoint).collect();
    route.push(RouteStop::destination(destination));
    route
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hoth() -> Planet {
        Planet::new(4, "Hoth")
    }

    fn names(route: &[RouteStop]) -> Vec<&str> {
        route.iter().map(|stop| stop.name.as_str()).collect()
    }

    #[test]
    fn single_hop_goes_direct() {
        let route = suggest_route(&hoth(), 1);
        assert_eq!(route, vec![RouteStop::destination(&hoth())]);
    }

    #[test]
    fn zero_hops_still_ends_at_destination() {
        assert_eq!(names(&suggest_route(&hoth(), 0)), vec!["Hoth"]);
    }

    #[test]
    fn waypoints_precede_destination_in_reverse_draw_order() {
        let route = suggest_route(&hoth(), 3);
        assert_eq!(names(&route), vec!["Naboo", "Coruscant", "Hoth"]);
        assert_eq!(route[0].planet_id, 200);
        assert_eq!(route[1].planet_id, 100);
        assert_eq!(route[2].planet_id, 4);
    }

    #[test]
    fn waypoint_count_is_capped() {
        let route = suggest_route(&hoth(), 999);
        assert_eq!(names(&route), vec!["Tatooine", "Naboo", "Coruscant", "Hoth"]);
    }

    #[test]
    fn exhausted_pool_falls_back_to_numbered_stops() {
        let route = suggest_route_with_limit(&hoth(), 8, 7);
        assert_eq!(
            names(&route),
            vec![
                "Stop 7",
                "Stop 6",
                "Yavin 4",
                "Alderaan",
                "Tatooine",
                "Naboo",
                "Coruscant",
                "Hoth"
            ]
        );
        assert_eq!(route[0].planet_id, 700);
    }
}
