use axum::extract::State;
use ladle_core::domain::user::{ports::UserService, value_objects::UserProfile};

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
    tag = "profile",
    summary = "Get profile",
    description = "Returns the caller's account, meal history, ratings and nutrition totals.",
    security(("bearer" = [])),
    responses(
        (status = 200, body = UserProfile),
        (status = 401, description = "Missing or invalid token"),
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<UserProfile>, ApiError> {
    let profile = state
        .service
        .get_profile(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(profile))
}
