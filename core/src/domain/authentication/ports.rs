use chrono::{DateTime, Utc};
use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::{
        entities::{
            AuthenticationOutput, AuthorizeRequestInput, AuthorizeRequestOutput, Session,
        },
        value_objects::{Identity, LoginInput, RegisterInput},
    },
    common::entities::app_errors::CoreError,
};

pub trait AuthService: Send + Sync {
    fn register(
        &self,
        input: RegisterInput,
    ) -> impl Future<Output = Result<AuthenticationOutput, CoreError>> + Send;

    fn login(
        &self,
        input: LoginInput,
    ) -> impl Future<Output = Result<AuthenticationOutput, CoreError>> + Send;

    fn logout(&self, identity: Identity) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> impl Future<Output = Result<AuthorizeRequestOutput, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait SessionRepository: Send + Sync {
    fn create_session(
        &self,
        session: Session,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn get_by_id(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Option<Session>, CoreError>> + Send;

    fn revoke_session(
        &self,
        session_id: Uuid,
        revoked_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
