//! RFC 9457 Problem Details for HTTP APIs.
//!
//! See: <https://www.rfc-editor.org/rfc/rfc9457.html>

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crewplanner_lib::Error as LibError;

/// Problem type URI for unknown planet ids.
pub const PROBLEM_UNKNOWN_PLANET: &str = "/problems/unknown-planet";

/// Problem type URI for unknown starship ids.
pub const PROBLEM_UNKNOWN_STARSHIP: &str = "/problems/unknown-starship";

/// Problem type URI for invalid request parameters.
pub const PROBLEM_INVALID_REQUEST: &str = "/problems/invalid-request";

/// Problem type URI for internal server errors.
pub const PROBLEM_INTERNAL_ERROR: &str = "/problems/internal-error";

/// Problem type URI for a catalog that is not available.
pub const PROBLEM_SERVICE_UNAVAILABLE: &str = "/problems/service-unavailable";

/// RFC 9457 Problem Details response structure.
///
/// # Example
///
/// ```
/// use crewplanner_service_shared::{ProblemDetails, PROBLEM_UNKNOWN_PLANET};
/// use axum::http::StatusCode;
///
/// let problem = ProblemDetails::new(
///     PROBLEM_UNKNOWN_PLANET,
///     "Unknown Planet",
///     StatusCode::NOT_FOUND,
/// )
/// .with_detail("Planet '42' not found")
/// .with_request_id("req-12345");
/// assert_eq!(problem.status, 404);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// URI reference identifying the problem type (relative).
    #[serde(rename = "type")]
    pub type_uri: String,

    /// Short, human-readable summary of the problem.
    pub title: String,

    pub status: u16,

    /// Human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Identifies the specific occurrence (the request ID).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,

    /// Always "application/problem+json".
    pub content_type: String,
}

impl ProblemDetails {
    pub fn new(type_uri: impl Into<String>, title: impl Into<String>, status: StatusCode) -> Self {
        Self {
            type_uri: type_uri.into(),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
            content_type: "application/problem+json".to_string(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.instance = Some(request_id.into());
        self
    }

    /// Create a 400 Bad Request problem for invalid input.
    pub fn bad_request(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INVALID_REQUEST,
            "Invalid Request",
            StatusCode::BAD_REQUEST,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }

    /// Create a 404 Not Found problem for an unknown target planet.
    pub fn unknown_planet(
        query: &str,
        suggestions: &[String],
        request_id: impl Into<String>,
    ) -> Self {
        Self::new(
            PROBLEM_UNKNOWN_PLANET,
            "Unknown Planet",
            StatusCode::NOT_FOUND,
        )
        .with_detail(not_found_detail("Planet", query, suggestions))
        .with_request_id(request_id)
    }

    /// Create a 404 Not Found problem for an unknown fleet member.
    pub fn unknown_starship(
        query: &str,
        suggestions: &[String],
        request_id: impl Into<String>,
    ) -> Self {
        Self::new(
            PROBLEM_UNKNOWN_STARSHIP,
            "Unknown Starship",
            StatusCode::NOT_FOUND,
        )
        .with_detail(not_found_detail("Starship", query, suggestions))
        .with_request_id(request_id)
    }

    /// Create a 500 Internal Server Error problem.
    pub fn internal_error(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INTERNAL_ERROR,
            "Internal Error",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }

    /// Create a 503 Service Unavailable problem.
    pub fn service_unavailable(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_SERVICE_UNAVAILABLE,
            "Service Unavailable",
            StatusCode::SERVICE_UNAVAILABLE,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }
}

fn not_found_detail(kind: &str, query: &str, suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        format!("{} '{}' not found", kind, query)
    } else {
        format!(
            "{} '{}' not found. Did you mean: {}?",
            kind,
            query,
            suggestions.join(", ")
        )
    }
}

impl std::fmt::Display for ProblemDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.title,
            self.detail.as_deref().unwrap_or("")
        )
    }
}

impl std::error::Error for ProblemDetails {}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = Json(&self).into_response();
        response.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderValue::from_static("application/problem+json"),
        );
        *response.status_mut() = status;
        response
    }
}

/// Convert library errors to ProblemDetails.
///
/// The `request_id` must be provided separately since library errors don't have it.
pub fn from_lib_error(error: &LibError, request_id: &str) -> ProblemDetails {
    match error {
        LibError::UnknownPlanet { query, suggestions } => {
            ProblemDetails::unknown_planet(query, suggestions, request_id)
        }
        LibError::UnknownStarship { query, suggestions } => {
            ProblemDetails::unknown_starship(query, suggestions, request_id)
        }
        LibError::CatalogNotFound { path } => ProblemDetails::service_unavailable(
            format!("Catalog not available at {}", path.display()),
            request_id,
        ),
        _ => ProblemDetails::internal_error(error.to_string(), request_id),
    }
}
