use axum::extract::State;
use ladle_core::domain::meal::{ports::MealService, value_objects::MealLog};

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
    tag = "meal",
    summary = "Get meal log",
    description = "The caller's meals grouped by day, newest first, with daily and overall nutrition totals.",
    security(("bearer" = [])),
    responses(
        (status = 200, body = MealLog),
        (status = 401, description = "Missing or invalid token"),
    ),
)]
pub async fn get_meal_log(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<MealLog>, ApiError> {
    let log = state
        .service
        .get_meal_log(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(log))
}
