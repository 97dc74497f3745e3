use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{authentication::entities::Session, user::entities::User};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaim {
    pub sub: Uuid,
    pub sid: Uuid,
    pub preferred_username: String,
    pub iat: i64,
    pub exp: i64,
}

impl JwtClaim {
    pub fn new(user: &User, session: &Session) -> Self {
        Self {
            sub: user.id,
            sid: session.id,
            preferred_username: user.username.clone(),
            iat: session.created_at.timestamp(),
            exp: session.expires_at.timestamp(),
        }
    }
}
