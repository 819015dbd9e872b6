//! Prometheus metrics for crew planner services.
//!
//! - [`MetricsConfig`]: `METRICS_ENABLED` / `METRICS_PATH` settings
//! - [`init_metrics`]: install the Prometheus recorder once at startup
//! - [`metrics_handler`]: axum handler rendering the exposition text
//! - business helpers for feasibility evaluations
//!
//! ```no_run
//! use crewplanner_service_shared::metrics::{MetricsConfig, init_metrics, metrics_handler};
//! use axum::{Router, routing::get};
//!
//! let config = MetricsConfig::from_env();
//! init_metrics(&config).expect("failed to initialize metrics");
//!
//! let app: Router = Router::new().route(&config.path, get(metrics_handler));
//! ```

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

static PROMETHEUS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    pub enabled: bool,
    /// Route the metrics endpoint is mounted on.
    pub path: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/metrics".to_string(),
        }
    }
}

impl MetricsConfig {
    /// - `METRICS_ENABLED`: anything but "false" enables metrics (default: true)
    /// - `METRICS_PATH`: endpoint path (default: "/metrics")
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("METRICS_ENABLED").ok().as_deref(),
            std::env::var("METRICS_PATH").ok().as_deref(),
        )
    }

    fn from_values(enabled: Option<&str>, path: Option<&str>) -> Self {
        let enabled = enabled
            .map(|v| !v.trim().eq_ignore_ascii_case("false"))
            .unwrap_or(true);
        let path = match path.map(str::trim) {
            Some(p) if p.starts_with('/') && p.len() > 1 => p.to_string(),
            _ => "/metrics".to_string(),
        };
        Self { enabled, path }
    }
}

/// Install the Prometheus recorder.
///
/// # Errors
///
/// Fails when metrics are disabled, the recorder is already installed, or
/// the builder cannot install it.
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    if !config.enabled {
        return Err(MetricsError::Disabled);
    }
    if PROMETHEUS_HANDLE.get().is_some() {
        return Err(MetricsError::AlreadyInitialized);
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| MetricsError::InstallFailed(e.to_string()))?;

    PROMETHEUS_HANDLE
        .set(handle)
        .map_err(|_| MetricsError::AlreadyInitialized)
}

/// Returns `None` until [`init_metrics`] succeeds.
pub fn prometheus_handle() -> Option<&'static PrometheusHandle> {
    PROMETHEUS_HANDLE.get()
}

/// Axum handler for the metrics endpoint (Prometheus exposition format).
pub async fn metrics_handler() -> String {
    PROMETHEUS_HANDLE
        .get()
        .map(|h| h.render())
        .unwrap_or_else(|| "# Metrics not initialized\n".to_string())
}

#[derive(Debug, Clone)]
pub enum MetricsError {
    Disabled,
    AlreadyInitialized,
    InstallFailed(String),
}

impl std::fmt::Display for MetricsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricsError::Disabled => write!(f, "metrics are disabled"),
            MetricsError::AlreadyInitialized => write!(f, "metrics recorder already initialized"),
            MetricsError::InstallFailed(e) => {
                write!(f, "failed to install metrics recorder: {}", e)
            }
        }
    }
}

impl std::error::Error for MetricsError {}

// =============================================================================
// Business Metrics Helpers
// =============================================================================

/// Increment `crewplanner_feasibility_evaluations_total`.
///
/// `outcome` is "feasible" or "infeasible".
pub fn record_evaluation(outcome: &str, service: &str) {
    metrics::counter!(
        "crewplanner_feasibility_evaluations_total",
        "outcome" => outcome.to_string(),
        "service" => service.to_string()
    )
    .increment(1);
}

/// Increment `crewplanner_feasibility_failures_total` for requests that
/// never reached the evaluator.
///
/// `reason` is e.g. "validation_error", "unknown_planet", "unknown_starship".
pub fn record_evaluation_failed(reason: &str, service: &str) {
    metrics::counter!(
        "crewplanner_feasibility_failures_total",
        "reason" => reason.to_string(),
        "service" => service.to_string()
    )
    .increment(1);
}

/// Record the violation count of one evaluation in
/// `crewplanner_feasibility_reasons`.
pub fn record_violations(count: usize) {
    metrics::histogram!("crewplanner_feasibility_reasons").record(count as f64);
}

/// Record estimated hops in `crewplanner_journey_hops`. Unreachable
/// journeys are labelled separately so the sentinel does not skew buckets.
pub fn record_journey_hops(hops: u64, reachable: bool) {
    if reachable {
        metrics::histogram!("crewplanner_journey_hops").record(hops as f64);
    } else {
        metrics::counter!("crewplanner_journey_unreachable_total").increment(1);
    }
}

/// Record the number of starships evaluated in `crewplanner_fleet_size`.
pub fn record_fleet_size(size: usize) {
    metrics::histogram!("crewplanner_fleet_size").record(size as f64);
}
