use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ladle_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    InternalServerError(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Validation(String),
}

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub message: String,
    pub status: u16,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "E_NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED"),
            ApiError::Forbidden(_) => (StatusCode::FORBIDDEN, "E_FORBIDDEN"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "E_CONFLICT"),
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "E_VALIDATION"),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound(error.to_string()),
            CoreError::Forbidden(message) => ApiError::Forbidden(message),
            CoreError::InvalidCredentials => ApiError::Unauthorized("invalid credentials".to_string()),
            CoreError::InvalidToken => ApiError::Unauthorized("invalid token".to_string()),
            CoreError::SessionExpired => ApiError::Unauthorized("session expired".to_string()),
            CoreError::UsernameTaken => ApiError::Conflict(error.to_string()),
            CoreError::EmailTaken => ApiError::Conflict(error.to_string()),
            CoreError::AlreadyRated => ApiError::Conflict(error.to_string()),
            CoreError::Invalid(message) => ApiError::Validation(message),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let body = ApiErrorResponse {
            code: code.to_string(),
            message: self.to_string(),
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that also runs the `validator` rules of `T`.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::Validation(errors.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_http_statuses() {
        let cases = [
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (CoreError::Forbidden("no".to_string()), StatusCode::FORBIDDEN),
            (CoreError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (CoreError::SessionExpired, StatusCode::UNAUTHORIZED),
            (CoreError::UsernameTaken, StatusCode::CONFLICT),
            (CoreError::EmailTaken, StatusCode::CONFLICT),
            (CoreError::AlreadyRated, StatusCode::CONFLICT),
            (CoreError::Invalid("bad".to_string()), StatusCode::BAD_REQUEST),
            (CoreError::InternalServerError, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (core_error, expected) in cases {
            let response = ApiError::from(core_error).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn token_failures_share_one_message() {
        assert_eq!(
            ApiError::from(CoreError::InvalidToken),
            ApiError::Unauthorized("invalid token".to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::SessionExpired),
            ApiError::Unauthorized("session expired".to_string())
        );
    }

    #[test]
    fn validation_errors_use_their_own_code() {
        let (status, code) = ApiError::Validation("score".to_string()).status_and_code();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "E_VALIDATION");
    }
}
