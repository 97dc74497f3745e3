use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use ladle_core::domain::{
    authentication::{
        entities::AuthorizeRequestInput, ports::AuthService, value_objects::Identity,
    },
    common::entities::app_errors::CoreError,
};
use tracing::debug;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Why a bearer token was rejected, kept in the request extensions so that
/// routes requiring a caller can report it.
#[derive(Debug, Clone)]
pub struct AuthFailure(pub CoreError);

/// Resolves the bearer token, when present, into an [`Identity`].
///
/// Requests without a valid token still reach the handler: public routes
/// serve anonymous callers and [`RequiredIdentity`] rejects them.
pub async fn auth(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let bearer = req.headers().typed_get::<Authorization<Bearer>>();

    if let Some(Authorization(bearer)) = bearer {
        let result = state
            .service
            .authorize_request(AuthorizeRequestInput {
                token: bearer.token().to_string(),
            })
            .await;

        match result {
            Ok(output) => {
                req.extensions_mut().insert(output.identity);
            }
            Err(e) => {
                debug!("rejected bearer token: {}", e);
                req.extensions_mut().insert(AuthFailure(e));
            }
        }
    }

    next.run(req).await
}

/// Caller that must be authenticated, 401 otherwise.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>().cloned() {
            return Ok(RequiredIdentity(identity));
        }

        match parts.extensions.get::<AuthFailure>() {
            Some(AuthFailure(e)) => Err(ApiError::from(e.clone())),
            None => Err(ApiError::Unauthorized(
                "authentication required".to_string(),
            )),
        }
    }
}

/// Caller that may be anonymous.
pub struct OptionalIdentity(pub Option<Identity>);

impl<S> FromRequestParts<S> for OptionalIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalIdentity(parts.extensions.get::<Identity>().cloned()))
    }
}
