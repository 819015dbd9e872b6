//! Hop and refuel estimation.

use super::constants::{MGLT_PER_REFUEL_CREDIT, UNREACHABLE_HOPS};

/// Outcome of the journey heuristic.
///
/// Unreachable journeys still report a refuel count so the serialized result
/// keeps its numeric shape; it is derived from [`UNREACHABLE_HOPS`]. A
/// reachable journey may compute the same hop count as the sentinel, so
/// callers distinguish the two with [`JourneyEstimate::is_reachable`].
///
/// Counts saturate at `u64::MAX` for vanishingly small hyperdrive ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JourneyEstimate {
    Reachable { hops: u64, refuels: u64 },
    Unreachable { refuels: u64 },
}

impl JourneyEstimate {
    /// Estimate the journey for a destination distance factor.
    ///
    /// `hops = ceil(distance / max_hyperdrive)` and
    /// `refuels = max(0, hops - floor(average_mglt / 50))`.
    ///
    /// ```
    /// use crewplanner_lib::feasibility::JourneyEstimate;
    ///
    /// let journey = JourneyEstimate::estimate(5, 1.0, 100.0);
    /// assert_eq!(journey, JourneyEstimate::Reachable { hops: 5, refuels: 3 });
    /// ```
    pub fn estimate(distance_factor: u32, max_hyperdrive: f64, average_mglt: f64) -> Self {
        if max_hyperdrive > 0.0 && max_hyperdrive.is_finite() {
            let hops = (f64::from(distance_factor) / max_hyperdrive).ceil() as u64;
            Self::Reachable {
                hops,
                refuels: refuels_for(hops, average_mglt),
            }
        } else {
            Self::Unreachable {
                refuels: refuels_for(UNREACHABLE_HOPS, average_mglt),
            }
        }
    }

    pub fn hops(&self) -> u64 {
        match self {
            Self::Reachable { hops, .. } => *hops,
            Self::Unreachable { .. } => UNREACHABLE_HOPS,
        }
    }

    pub fn refuels(&self) -> u64 {
        match self {
            Self::Reachable { refuels, .. } | Self::Unreachable { refuels } => *refuels,
        }
    }

    /// Intermediate stops implied by the hop count.
    pub fn stops(&self) -> u64 {
        self.hops().saturating_sub(1)
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Reachable { .. })
    }
}

fn refuels_for(hops: u64, average_mglt: f64) -> u64 {
    let speed_credit = (average_mglt / MGLT_PER_REFUEL_CREDIT).floor() as u64;
    hops.saturating_sub(speed_credit)
}
