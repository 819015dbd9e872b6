//! Response wrapper for successful HTTP responses.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Successful payload flattened next to a `content_type` field, mirroring
/// the shape of [`ProblemDetails`](crate::ProblemDetails).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse<T> {
    #[serde(flatten)]
    pub data: T,

    pub content_type: String,
}

impl<T> ServiceResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            content_type: "application/json".to_string(),
        }
    }
}

impl<T> From<T> for ServiceResponse<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}

impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewplanner_lib::{evaluate, Constraints, FeasibilityResult, Planet, Starship};

    fn result() -> FeasibilityResult {
        let planet = Planet::new(1, "Tatooine").with_terrain("desert");
        let fleet = [Starship::new(12, "X-wing").with_hyperdrive(1.0)];
        evaluate(&planet, &fleet, &Constraints::default())
    }

    #[test]
    fn test_result_fields_are_flattened() {
        let response = ServiceResponse::new(result());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["ok"], true);
        assert_eq!(json["hops"], 5);
        assert!(json["suggestedRoute"].is_array());
        assert_eq!(json["content_type"], "application/json");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_response_round_trips() {
        let response: ServiceResponse<FeasibilityResult> = result().into();
        let json = serde_json::to_string(&response).unwrap();
        let back: ServiceResponse<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.data, serde_json::to_value(&response.data).unwrap());
        assert_eq!(back.content_type, "application/json");
    }
}
