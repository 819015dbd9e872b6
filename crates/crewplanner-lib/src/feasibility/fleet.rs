//! Fleet aggregation.

use serde::{Deserialize, Serialize};

use crate::model::{NumericField, Starship};
use crate::numeric::normalize_numeric;

/// Aggregated capacity across a fleet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetTotals {
    /// Combined purchase cost in credits.
    pub cost: f64,
    /// Combined passenger capacity.
    pub passengers: f64,
    /// Combined cargo capacity in kilograms.
    pub cargo: f64,
}

/// Normalized capabilities of a single starship. Unknown values read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Capabilities {
    pub cost: f64,
    pub passengers: f64,
    pub cargo: f64,
    pub hyperdrive_rating: f64,
    pub mglt: f64,
}

impl Capabilities {
    pub fn of(ship: &Starship) -> Self {
        Self {
            cost: quantity(ship.cost_in_credits.as_ref()),
            passengers: quantity(ship.passengers.as_ref()),
            cargo: quantity(ship.cargo_capacity.as_ref()),
            hyperdrive_rating: quantity(ship.hyperdrive_rating.as_ref()),
            mglt: quantity(ship.mglt.as_ref()),
        }
    }

    pub fn has_hyperdrive(&self) -> bool {
        self.hyperdrive_rating > 0.0
    }
}

/// Capacities are never negative; missing, unparseable or negative values count as zero.
fn quantity(field: Option<&NumericField>) -> f64 {
    normalize_numeric(field).filter(|v| *v > 0.0).unwrap_or(0.0)
}

/// Totals plus the propulsion figures the journey estimate needs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FleetSummary {
    pub totals: FleetTotals,
    /// Highest positive hyperdrive rating in the fleet, `0.0` if none.
    pub max_hyperdrive: f64,
    /// Mean of the positive MGLT values, `0.0` if none.
    pub average_mglt: f64,
}

impl FleetSummary {
    pub fn from_fleet(fleet: &[Starship]) -> Self {
        let mut totals = FleetTotals::default();
        let mut max_hyperdrive: f64 = 0.0;
        let mut mglt_sum = 0.0;
        let mut mglt_count = 0usize;

        for ship in fleet {
            let caps = Capabilities::of(ship);
            totals.cost += caps.cost;
            totals.passengers += caps.passengers;
            totals.cargo += caps.cargo;

            if caps.has_hyperdrive() {
                max_hyperdrive = max_hyperdrive.max(caps.hyperdrive_rating);
            }
            if caps.mglt > 0.0 {
                mglt_sum += caps.mglt;
                mglt_count += 1;
            }
        }

        let average_mglt = if mglt_count > 0 {
            mglt_sum / mglt_count as f64
        } else {
            0.0
        };

        Self {
            totals,
            max_hyperdrive,
            average_mglt,
        }
    }

    pub fn has_hyperdrive(&self) -> bool {
        self.max_hyperdrive > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fleet_has_zero_totals() {
        let summary = FleetSummary::from_fleet(&[]);
        assert_eq!(summary, FleetSummary::default());
        assert!(!summary.has_hyperdrive());
    }

    #[test]
    fn totals_sum_normalized_values() {
        let fleet = vec![
            Starship::new(1, "A")
                .with_cost("1,000")
                .with_passengers(4.0)
                .with_cargo("unknown"),
            Starship::new(2, "B")
                .with_cost(250.0)
                .with_passengers("n/a")
                .with_cargo("2,500"),
            Starship::new(3, "C"),
        ];
        let summary = FleetSummary::from_fleet(&fleet);

        assert_eq!(summary.totals.cost, 1250.0);
        assert_eq!(summary.totals.passengers, 4.0);
        assert_eq!(summary.totals.cargo, 2500.0);
    }

    #[test]
    fn negative_values_do_not_reduce_totals() {
        let fleet = vec![
            Starship::new(1, "A").with_cost(100.0),
            Starship::new(2, "B").with_cost("-40"),
        ];
        assert_eq!(FleetSummary::from_fleet(&fleet).totals.cost, 100.0);
    }

    #[test]
    fn tracks_highest_hyperdrive_and_mean_positive_mglt() {
        let fleet = vec![
            Starship::new(1, "A").with_hyperdrive(1.0).with_mglt(100.0),
            Starship::new(2, "B").with_hyperdrive("4.0").with_mglt("unknown"),
            Starship::new(3, "C").with_hyperdrive(0.0).with_mglt(50.0),
        ];
        let summary = FleetSummary::from_fleet(&fleet);

        assert_eq!(summary.max_hyperdrive, 4.0);
        assert_eq!(summary.average_mglt, 75.0);
    }
}
