use axum::extract::State;
use ladle_core::domain::recommendation::{
    ports::RecommendationService, value_objects::Recommendations,
};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "recommendation",
    summary = "Get recommendations",
    description = "Recipes sharing tags with the ones the caller rated 4 or more, excluding recipes already rated.",
    security(("bearer" = [])),
    responses(
        (status = 200, body = Recommendations),
        (status = 401, description = "Missing or invalid token"),
    ),
)]
pub async fn get_recommendations(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<Recommendations>, ApiError> {
    let recommendations = state
        .service
        .get_recommendations(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(recommendations))
}
