use axum::extract::State;
use ladle_core::domain::authentication::{
    entities::AuthenticationOutput, ports::AuthService, value_objects::LoginInput,
};

use crate::application::http::{
    authentication::validators::LoginValidator,
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
    path = "/login",
    tag = "auth",
    summary = "Log in",
    description = "Exchanges a username and password for a bearer token.",
    request_body = LoginValidator,
    responses(
        (status = 200, body = AuthenticationOutput),
        (status = 401, description = "Invalid credentials"),
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginValidator>,
) -> Result<Response<AuthenticationOutput>, ApiError> {
    let output = state
        .service
        .login(LoginInput {
            username: payload.username,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(output))
}
