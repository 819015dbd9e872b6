//! Crew planner mission feasibility HTTP service.
//!
//! # Endpoints
//!
//! - `POST /api/v1/feasibility` - Evaluate a fleet against a target planet
//! - `GET /metrics` - Prometheus metrics endpoint (path set by `METRICS_PATH`)
//! - `GET /health/live` - Kubernetes liveness probe
//! - `GET /health/ready` - Kubernetes readiness probe
//!
//! # Configuration
//!
//! - `CREWPLANNER_DATA_PATH` - Path to the catalog JSON file (default: `/data/catalog.json`)
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `SERVICE_NAME` - Service name reported in logs
//! - `METRICS_ENABLED` / `METRICS_PATH` - Prometheus endpoint settings

use std::env;
use std::net::SocketAddr;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crewplanner_lib::{evaluate, Error as LibError, FeasibilityResult};
use crewplanner_service_shared::{
    from_lib_error, health_live, health_ready, init_logging, init_metrics, metrics_handler,
    record_evaluation, record_evaluation_failed, record_fleet_size, record_journey_hops,
    record_violations, AppState, FeasibilityRequest, LoggingConfig, MetricsConfig, MetricsLayer,
    ProblemDetails, RequestId, ServiceResponse, Validate,
};

const SERVICE: &str = "feasibility";
const DEFAULT_DATA_PATH: &str = "/data/catalog.json";
const DEFAULT_PORT: u16 = 8080;

/// HTTP response - either success or RFC 9457 error.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Response {
    Success(ServiceResponse<FeasibilityResult>),
    Error(ProblemDetails),
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::Success(data) => (StatusCode::OK, Json(data)).into_response(),
            Response::Error(problem) => problem.into_response(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service(SERVICE);
    init_logging(&logging_config);

    let metrics_config = MetricsConfig::from_env();
    if metrics_config.enabled {
        if let Err(e) = init_metrics(&metrics_config) {
            warn!(error = %e, "failed to initialize metrics, continuing without metrics");
        }
    }

    let data_path =
        env::var("CREWPLANNER_DATA_PATH").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());
    let port = parse_port(env::var("SERVICE_PORT").ok().as_deref());

    info!(data_path = %data_path, port, "starting feasibility service");

    let state = AppState::load(&data_path).map_err(|e| {
        error!(error = %e, path = %data_path, "failed to load application state");
        e
    })?;

    info!(
        planets = state.catalog().planet_count(),
        starships = state.catalog().starship_count(),
        "application state loaded"
    );

    let app = router(state, &metrics_config);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("feasibility service stopped");
    Ok(())
}

fn router(state: AppState, metrics_config: &MetricsConfig) -> Router {
    let mut app = Router::new()
        .route("/api/v1/feasibility", post(feasibility_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready));

    if metrics_config.enabled {
        app = app.route(&metrics_config.path, get(metrics_handler));
    }

    app.layer(CorsLayer::permissive())
        .layer(MetricsLayer)
        .with_state(state)
}

fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|p| p.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Handle POST /api/v1/feasibility requests.
async fn feasibility_handler(
    State(state): State<AppState>,
    request_id: Option<Extension<RequestId>>,
    payload: Result<Json<FeasibilityRequest>, JsonRejection>,
) -> Response {
    let request_id = request_id
        .map(|Extension(id)| id)
        .unwrap_or_else(RequestId::generate);
    let request_id = request_id.as_str();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(request_id, error = %rejection.body_text(), "rejected request body");
            record_evaluation_failed("invalid_body", SERVICE);
            return Response::Error(ProblemDetails::bad_request(
                rejection.body_text(),
                request_id,
            ));
        }
    };

    info!(
        request_id,
        target_planet_id = request.target_planet_id,
        starships = request.starship_ids.len(),
        "handling feasibility request"
    );

    if let Err(problem) = request.validate(request_id) {
        record_evaluation_failed("validation_error", SERVICE);
        return Response::Error(*problem);
    }

    let catalog = state.catalog();

    let Some(destination) = catalog.planet(request.target_planet_id) else {
        record_evaluation_failed("unknown_planet", SERVICE);
        let err = LibError::UnknownPlanet {
            query: request.target_planet_id.to_string(),
            suggestions: Vec::new(),
        };
        return Response::Error(from_lib_error(&err, request_id));
    };

    let fleet = match catalog.resolve_fleet(&request.starship_ids) {
        Ok(fleet) => fleet,
        Err(e) => {
            warn!(request_id, error = %e, "fleet resolution failed");
            let reason = match &e {
                LibError::UnknownStarship { .. } => "unknown_starship",
                _ => "internal_error",
            };
            record_evaluation_failed(reason, SERVICE);
            return Response::Error(from_lib_error(&e, request_id));
        }
    };

    let result = evaluate(destination, &fleet, &request.constraints);

    record_evaluation(if result.ok { "feasible" } else { "infeasible" }, SERVICE);
    record_violations(result.reasons.len());
    record_journey_hops(result.hops, result.is_reachable());
    record_fleet_size(fleet.len());

    info!(
        request_id,
        ok = result.ok,
        hops = result.hops,
        refuels = result.refuels,
        reasons = result.reasons.len(),
        "feasibility evaluated"
    );

    Response::Success(ServiceResponse::new(result))
}
