//! The feasibility evaluator.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distance::distance_factor;
use crate::format::format_quantity;
use crate::model::{Planet, Starship};

use super::fleet::{FleetSummary, FleetTotals};
use super::journey::JourneyEstimate;
use super::route::{suggest_route, RouteStop};

/// Mission constraints supplied by the caller.
///
/// Every constraint is optional. A value of zero counts as "not set", matching
/// how the crew builder submits untouched form fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    /// Maximum combined cost in credits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    /// Minimum combined passenger capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_passengers: Option<f64>,
    /// Minimum combined cargo capacity in kilograms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_kg: Option<f64>,
    /// Maximum number of intermediate stops.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_stops: Option<u32>,
}

impl Constraints {
    fn active_budget(&self) -> Option<f64> {
        active(self.budget)
    }

    fn active_min_passengers(&self) -> Option<f64> {
        active(self.min_passengers)
    }

    fn active_cargo_kg(&self) -> Option<f64> {
        active(self.cargo_kg)
    }

    fn active_max_stops(&self) -> Option<u32> {
        self.max_stops.filter(|stops| *stops != 0)
    }
}

fn active(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// A violated mission constraint.
///
/// The `Display` form is the user-facing diagnostic placed in
/// [`FeasibilityResult::reasons`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstraintViolation {
    BudgetExceeded { total: f64, budget: f64 },
    InsufficientPassengers { total: f64, required: f64 },
    InsufficientCargo { total: f64, required: f64 },
    NoHyperdrive,
    TooManyStops { stops: u64, allowed: u32 },
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BudgetExceeded { total, budget } => write!(
                f,
                "Total cost ({} credits) exceeds budget ({} credits)",
                format_quantity(*total),
                format_quantity(*budget)
            ),
            Self::InsufficientPassengers { total, required } => write!(
                f,
                "Passenger capacity ({}) is below minimum requirement ({})",
                total, required
            ),
            Self::InsufficientCargo { total, required } => write!(
                f,
                "Cargo capacity ({} kg) is below minimum requirement ({} kg)",
                format_quantity(*total),
                format_quantity(*required)
            ),
            Self::NoHyperdrive => f.write_str(
                "No starships with hyperdrive capability - cannot reach target planet",
            ),
            Self::TooManyStops { stops, allowed } => write!(
                f,
                "Estimated stops ({}) exceeds maximum allowed ({})",
                stops, allowed
            ),
        }
    }
}

/// Outcome of a feasibility evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityResult {
    /// True iff no constraint was violated.
    pub ok: bool,
    /// Violation diagnostics in check order.
    pub reasons: Vec<String>,
    pub totals: FleetTotals,
    /// Estimated hyperspace jumps, or `UNREACHABLE_HOPS`.
    pub hops: u64,
    pub refuels: u64,
    /// Waypoints in journey order, ending at the destination.
    pub suggested_route: Vec<RouteStop>,
    #[serde(skip)]
    journey: JourneyEstimate,
}

impl FeasibilityResult {
    /// The journey estimate behind `hops` and `refuels`.
    pub fn journey(&self) -> JourneyEstimate {
        self.journey
    }

    /// Whether any fleet member can jump. A reachable journey can still report
    /// a hop count equal to `UNREACHABLE_HOPS`.
    pub fn is_reachable(&self) -> bool {
        self.journey.is_reachable()
    }
}

/// Evaluate whether `fleet` can carry out a mission to `destination`.
///
/// Never fails: malformed ship data degrades to zero and every problem is
/// reported through [`FeasibilityResult::reasons`].
///
/// ```
/// use crewplanner_lib::feasibility::{evaluate, Constraints};
/// use crewplanner_lib::model::{Planet, Starship};
///
/// let tatooine = Planet::new(1, "Tatooine")
///     .with_terrain("desert")
///     .with_climate("arid");
/// let fleet = vec![Starship::new(12, "X-wing").with_hyperdrive(1.0).with_mglt(100.0)];
///
/// let result = evaluate(&tatooine, &fleet, &Constraints::default());
/// assert!(result.ok);
/// assert_eq!(result.hops, 5);
/// assert_eq!(result.refuels, 3);
/// assert_eq!(result.suggested_route.len(), 4);
/// ```
pub fn evaluate(
    destination: &Planet,
    fleet: &[Starship],
    constraints: &Constraints,
) -> FeasibilityResult {
    let summary = FleetSummary::from_fleet(fleet);
    let mut violations = capacity_violations(&summary.totals, constraints);

    if !summary.has_hyperdrive() {
        violations.push(ConstraintViolation::NoHyperdrive);
    }

    let distance = distance_factor(destination.terrain.as_deref(), destination.climate.as_deref());
    let journey = JourneyEstimate::estimate(distance, summary.max_hyperdrive, summary.average_mglt);

    if let Some(allowed) = constraints.active_max_stops() {
        let stops = journey.stops();
        if stops > u64::from(allowed) {
            violations.push(ConstraintViolation::TooManyStops { stops, allowed });
        }
    }

    let suggested_route = suggest_route(destination, journey.hops());

    debug!(
        destination = %destination.name,
        fleet_size = fleet.len(),
        distance_factor = distance,
        hops = journey.hops(),
        refuels = journey.refuels(),
        reachable = journey.is_reachable(),
        violations = violations.len(),
        "evaluated mission feasibility"
    );

    let reasons: Vec<String> = violations.iter().map(ToString::to_string).collect();
    FeasibilityResult {
        ok: reasons.is_empty(),
        reasons,
        totals: summary.totals,
        hops: journey.hops(),
        refuels: journey.refuels(),
        suggested_route,
        journey,
    }
}

fn capacity_violations(totals: &FleetTotals, constraints: &Constraints) -> Vec<ConstraintViolation> {
    let mut violations = Vec::new();

    if let Some(budget) = constraints.active_budget() {
        if totals.cost > budget {
            violations.push(ConstraintViolation::BudgetExceeded {
                total: totals.cost,
                budget,
            });
        }
    }

    if let Some(required) = constraints.active_min_passengers() {
        if totals.passengers < required {
            violations.push(ConstraintViolation::InsufficientPassengers {
                total: totals.passengers,
                required,
            });
        }
    }

    if let Some(required) = constraints.active_cargo_kg() {
        if totals.cargo < required {
            violations.push(ConstraintViolation::InsufficientCargo {
                total: totals.cargo,
                required,
            });
        }
    }

    violations
}
