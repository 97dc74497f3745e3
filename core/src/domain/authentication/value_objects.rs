use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::entities::User;

/// The authenticated caller of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user: User,
    pub session_id: Uuid,
}

impl Identity {
    pub fn id(&self) -> Uuid {
        self.user.id
    }

    pub fn username(&self) -> &str {
        &self.user.username
    }

    pub fn is_admin(&self) -> bool {
        self.user.is_admin
    }
}

pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub struct LoginInput {
    pub username: String,
    pub password: String,
}
