//! Health check handlers for Kubernetes probes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// "ok" or "not_ready: <reason>".
    pub status: String,

    pub service: String,

    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub planets_loaded: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub starships_loaded: Option<usize>,
}

impl HealthStatus {
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            planets_loaded: None,
            starships_loaded: None,
        }
    }

    pub fn ready(service: &str, version: &str, planets: usize, starships: usize) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            planets_loaded: Some(planets),
            starships_loaded: Some(starships),
        }
    }

    pub fn not_ready(service: &str, version: &str, reason: &str) -> Self {
        Self {
            status: format!("not_ready: {}", reason),
            service: service.to_string(),
            version: version.to_string(),
            planets_loaded: None,
            starships_loaded: None,
        }
    }
}

/// Liveness probe handler. Always 200 while the process serves requests.
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"crewplanner-service-shared","version":"0.1.0"}
/// ```
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// Ready once the catalog holds at least one planet and one starship;
/// otherwise 503.
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let service = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");
    let catalog = state.catalog();

    if !state.is_ready() {
        let reason = if catalog.planet_count() == 0 {
            "no planets loaded"
        } else {
            "no starships loaded"
        };
        let status = HealthStatus::not_ready(service, version, reason);
        return (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response();
    }

    let status = HealthStatus::ready(
        service,
        version,
        catalog.planet_count(),
        catalog.starship_count(),
    );
    (StatusCode::OK, Json(status)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewplanner_lib::{Catalog, Planet};

    #[test]
    fn test_health_status_ready() {
        let status = HealthStatus::ready("feasibility", "1.0.0", 10, 9);
        assert_eq!(status.status, "ok");
        assert_eq!(status.planets_loaded, Some(10));
        assert_eq!(status.starships_loaded, Some(9));
    }

    #[test]
    fn test_health_status_serialization_skips_counts() {
        let json = serde_json::to_string(&HealthStatus::alive("feasibility", "0.1.0")).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(!json.contains("planets_loaded"));
    }

    #[tokio::test]
    async fn test_ready_reports_missing_starships() {
        let catalog = Catalog::from_records(vec![Planet::new(1, "Hoth")], vec![]).unwrap();
        let response = health_ready(State(AppState::from_catalog(catalog))).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_ready_with_fixture_catalog() {
        let response = health_ready(State(crate::test_utils::test_state())).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
