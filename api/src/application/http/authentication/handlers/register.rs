use axum::extract::State;
use ladle_core::domain::authentication::{
    entities::AuthenticationOutput, ports::AuthService, value_objects::RegisterInput,
};

use crate::application::http::{
    authentication::validators::RegisterValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    summary = "Register",
    description = "Creates an account and signs the new user in.",
    request_body = RegisterValidator,
    responses(
        (status = 201, body = AuthenticationOutput),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Username or email already taken"),
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterValidator>,
) -> Result<Response<AuthenticationOutput>, ApiError> {
    let output = state
        .service
        .register(RegisterInput {
            username: payload.username,
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(output))
}
