use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal::value_objects::MealEntry,
    nutrition::NutritionFacts,
    rating::value_objects::RatedRecipe,
    user::entities::User,
};

pub const MAX_USERNAME_LENGTH: usize = 150;
pub const MIN_PASSWORD_LENGTH: usize = 8;

static USERNAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w.@+-]+$").expect("username pattern is a valid regex")
});

/// Everything the profile page shows about the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub user: User,
    pub meals: Vec<MealEntry>,
    /// The user's ratings, newest first, each with the rated recipe.
    pub ratings: Vec<RatedRecipe>,
    pub average_rating: f64,
    pub total_meal_logs: usize,
    pub nutrition_summary: NutritionFacts,
}

pub fn validate_username(username: &str) -> Result<(), CoreError> {
    if username.is_empty() {
        return Err(CoreError::Invalid("username is required".to_string()));
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(CoreError::Invalid(format!(
            "username must be at most {MAX_USERNAME_LENGTH} characters"
        )));
    }
    if !USERNAME_PATTERN.is_match(username) {
        return Err(CoreError::Invalid(
            "username may only contain letters, digits and @/./+/-/_".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), CoreError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(CoreError::Invalid("email address is invalid".to_string()))
    }
}

pub fn validate_password(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Invalid(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    if password.chars().all(|c| c.is_ascii_digit()) {
        return Err(CoreError::Invalid(
            "password cannot be entirely numeric".to_string(),
        ));
    }
    Ok(())
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
