use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity, common::generate_timestamp, user::entities::User,
};

/// A login. Access tokens carry the session id so that logging out can
/// invalidate them before they expire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(user_id: Uuid, ttl: Duration) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            created_at: now,
            expires_at: now + ttl,
            revoked_at: None,
        }
    }

    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.revoked_at.is_none() && now < self.expires_at
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthenticationOutput {
    pub user: User,
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

pub struct AuthorizeRequestInput {
    pub token: String,
}

pub struct AuthorizeRequestOutput {
    pub identity: Identity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_expires_after_ttl() {
        let session = Session::new(Uuid::new_v4(), Duration::minutes(30));

        assert!(session.is_active(session.created_at));
        assert!(session.is_active(session.created_at + Duration::minutes(29)));
        assert!(!session.is_active(session.created_at + Duration::minutes(30)));
    }

    #[test]
    fn revoked_session_is_inactive() {
        let mut session = Session::new(Uuid::new_v4(), Duration::hours(1));
        session.revoked_at = Some(session.created_at);

        assert!(!session.is_active(session.created_at));
    }
}
