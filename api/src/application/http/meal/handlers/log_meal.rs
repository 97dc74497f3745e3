use axum::extract::State;
use ladle_core::domain::meal::{
    ports::MealService,
    value_objects::{LogMealInput, MealEntry},
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        meal::validators::LogMealValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "meal",
    summary = "Log meal",
    description = "Records that the caller ate a recipe just now.",
    security(("bearer" = [])),
    request_body = LogMealValidator,
    responses(
        (status = 201, body = MealEntry),
        (status = 404, description = "Recipe not found"),
    ),
)]
pub async fn log_meal(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<LogMealValidator>,
) -> Result<Response<MealEntry>, ApiError> {
    let entry = state
        .service
        .log_meal(
            identity,
            LogMealInput {
                recipe_id: payload.recipe_id,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(entry))
}
