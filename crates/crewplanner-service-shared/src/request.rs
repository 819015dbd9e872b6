//! Request types and validation for HTTP endpoints.

use serde::{Deserialize, Serialize};

use crewplanner_lib::{Constraints, PlanetId, StarshipId};

use crate::ProblemDetails;

/// Largest fleet accepted in a single feasibility request.
pub const MAX_FLEET_SIZE: usize = 100;

/// Validation trait for request types.
///
/// Implementations check every field and return a `ProblemDetails` for the
/// first invalid one. The `request_id` populates its `instance` field.
pub trait Validate {
    /// Returns a boxed `ProblemDetails` to avoid large `Result::Err` variants.
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

/// Request body for `POST /api/v1/feasibility`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityRequest {
    pub target_planet_id: PlanetId,

    /// Fleet members, in the order they should be reported. An empty fleet is
    /// evaluated and comes back infeasible.
    pub starship_ids: Vec<StarshipId>,

    /// Crew selected in the builder. Accepted for compatibility; crew does
    /// not influence feasibility.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub people_ids: Vec<i64>,

    #[serde(default)]
    pub constraints: Constraints,
}

impl Validate for FeasibilityRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        if self.starship_ids.len() > MAX_FLEET_SIZE {
            return Err(Box::new(ProblemDetails::bad_request(
                format!(
                    "The 'starshipIds' field cannot contain more than {} starships",
                    MAX_FLEET_SIZE
                ),
                request_id,
            )));
        }

        let limits = [
            ("budget", self.constraints.budget),
            ("minPassengers", self.constraints.min_passengers),
            ("cargoKg", self.constraints.cargo_kg),
        ];
        for (field, value) in limits {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(Box::new(ProblemDetails::bad_request(
                        format!(
                            "The 'constraints.{}' field must be a non-negative number",
                            field
                        ),
                        request_id,
                    )));
                }
            }
        }

        Ok(())
    }
}
