//! Shared infrastructure for crew planner HTTP services.
//!
//! - [`AppState`]: the catalog loaded once at startup
//! - [`health`]: liveness/readiness handlers
//! - [`ProblemDetails`]: RFC 9457 error responses
//! - [`ServiceResponse`]: success wrapper with content type
//! - [`metrics`]: Prometheus recorder and business helpers
//! - [`logging`]: JSON or pretty tracing output
//! - [`middleware`]: request IDs and HTTP metrics
//! - [`FeasibilityRequest`] with [`Validate`]
//!
//! Handlers stay thin: parse, validate, resolve records through the catalog,
//! call `crewplanner_lib::evaluate`, format the response.
//!
//! Enable the `test-utils` feature to use [`test_utils`] from dependent crates.

#![deny(warnings)]

pub mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;
mod problem;
mod request;
mod response;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{
    init_metrics, metrics_handler, record_evaluation, record_evaluation_failed,
    record_fleet_size, record_journey_hops, record_violations, MetricsConfig, MetricsError,
};
pub use middleware::{extract_or_generate_request_id, MetricsLayer, RequestId, REQUEST_ID_HEADER};
pub use problem::{
    from_lib_error, ProblemDetails, PROBLEM_INTERNAL_ERROR, PROBLEM_INVALID_REQUEST,
    PROBLEM_SERVICE_UNAVAILABLE, PROBLEM_UNKNOWN_PLANET, PROBLEM_UNKNOWN_STARSHIP,
};
pub use request::{FeasibilityRequest, Validate, MAX_FLEET_SIZE};
pub use response::ServiceResponse;
pub use state::{AppState, AppStateError};
