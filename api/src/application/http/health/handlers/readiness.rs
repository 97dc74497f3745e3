use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ladle_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ReadinessResponse {
    pub status: String,
    pub database: Option<DatabaseHealthStatus>,
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness",
    description = "Pings the database.",
    responses(
        (status = 200, body = ReadinessResponse),
        (status = 503, body = ReadinessResponse),
    ),
)]
pub async fn readiness(State(state): State<AppState>) -> Response {
    match state.service.readiness().await {
        Ok(database) => (
            StatusCode::OK,
            Json(ReadinessResponse {
                status: "ready".to_string(),
                database: Some(database),
            }),
        )
            .into_response(),
        Err(e) => {
            warn!("database is not ready: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessResponse {
                    status: "unavailable".to_string(),
                    database: None,
                }),
            )
                .into_response()
        }
    }
}
