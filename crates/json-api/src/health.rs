//! Liveness and readiness handlers

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::extensions::*;

/// Health marker response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HealthResponse {
    pub message: String,
}

/// Liveness handler
///
/// Answers as long as the process serves requests.
#[endpoint(tags("health"), summary = "Liveness probe")]
pub(crate) async fn isalive() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Alive".to_string(),
    })
}

/// Readiness handler
///
/// Succeeds only while the database answers.
#[endpoint(
    tags("health"),
    summary = "Readiness probe",
    responses(
        (status_code = StatusCode::OK, description = "Ready"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Not Ready"),
    ),
)]
pub(crate) async fn isready(depot: &mut Depot) -> Result<Json<HealthResponse>, StatusError> {
    let state = depot.state_or_500()?;

    state
        .app
        .readiness
        .check()
        .await
        .or_503("readiness check failed", "Not Ready")?;

    Ok(Json(HealthResponse {
        message: "Ready".to_string(),
    }))
}
