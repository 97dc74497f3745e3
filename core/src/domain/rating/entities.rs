use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::app_errors::CoreError, generate_timestamp};

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 5.0;
pub const MAX_COMMENT_LENGTH: usize = 2000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Rating {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recipe_id: Uuid,
    pub score: f64,
    pub comment: Option<String>,
    pub rated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rating {
    pub fn new(user_id: Uuid, recipe_id: Uuid, score: f64, comment: Option<String>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            recipe_id,
            score,
            comment: normalize_comment(comment),
            rated_at: now,
            updated_at: now,
        }
    }

    /// Replaces score and comment. `rated_at` keeps the time of the first rating.
    pub fn update(&mut self, score: f64, comment: Option<String>) {
        let (now, _) = generate_timestamp();

        self.score = score;
        self.comment = normalize_comment(comment);
        self.updated_at = now;
    }
}

fn normalize_comment(comment: Option<String>) -> Option<String> {
    comment
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}

/// Scores go from 1 to 5 in half-point steps.
pub fn validate_score(score: f64) -> Result<(), CoreError> {
    if !score.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(CoreError::Invalid(format!(
            "score must be between {MIN_SCORE} and {MAX_SCORE}"
        )));
    }
    if (score * 2.0).fract() != 0.0 {
        return Err(CoreError::Invalid(
            "score must be a multiple of 0.5".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_comment(comment: Option<&str>) -> Result<(), CoreError> {
    match comment {
        Some(c) if c.chars().count() > MAX_COMMENT_LENGTH => Err(CoreError::Invalid(format!(
            "comment must be at most {MAX_COMMENT_LENGTH} characters"
        ))),
        _ => Ok(()),
    }
}
