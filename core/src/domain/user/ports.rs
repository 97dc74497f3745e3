use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    user::{entities::User, value_objects::UserProfile},
};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn create_user(
        &self,
        user: User,
        password_hash: String,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_by_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_username(
        &self,
        username: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_password_hash(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;
}

pub trait UserService: Send + Sync {
    fn get_profile(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;
}
