use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// One consumption of a recipe by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Meal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recipe_id: Uuid,
    pub logged_at: DateTime<Utc>,
}

impl Meal {
    pub fn new(user_id: Uuid, recipe_id: Uuid) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            recipe_id,
            logged_at: now,
        }
    }
}
