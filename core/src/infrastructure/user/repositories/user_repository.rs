use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QuerySelect, SqlErr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        user::{entities::User, ports::UserRepository},
    },
    entity::users::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn map_insert_error(e: DbErr) -> CoreError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) if message.contains("email") => {
            CoreError::EmailTaken
        }
        Some(SqlErr::UniqueConstraintViolation(_)) => CoreError::UsernameTaken,
        _ => {
            error!("Failed to create user: {}", e);
            CoreError::InternalServerError
        }
    }
}

impl UserRepository for PostgresUserRepository {
    async fn create_user(&self, user: User, password_hash: String) -> Result<User, CoreError> {
        let active_model = ActiveModel {
            id: Set(user.id),
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(password_hash),
            is_admin: Set(user.is_admin),
            created_at: Set(user.created_at.fixed_offset()),
            updated_at: Set(user.updated_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(map_insert_error)?;

        Ok(User::from(created))
    }

    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        let user = Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by id: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(user.map(User::from))
    }

    async fn get_by_username(&self, username: String) -> Result<Option<User>, CoreError> {
        let user = Entity::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by username: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(user.map(User::from))
    }

    async fn get_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        let user = Entity::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by email: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(user.map(User::from))
    }

    async fn get_password_hash(&self, user_id: Uuid) -> Result<Option<String>, CoreError> {
        Entity::find_by_id(user_id)
            .select_only()
            .column(Column::PasswordHash)
            .into_tuple::<String>()
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get password hash: {}", e);
                CoreError::InternalServerError
            })
    }
}
