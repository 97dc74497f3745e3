use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{rating::entities::Rating, recipe::entities::Recipe};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct RatingSummary {
    /// Mean score, 0 when the recipe has no rating.
    pub average_rating: f64,
    pub rating_count: u64,
}

impl RatingSummary {
    pub fn from_scores<I>(scores: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let (sum, count) = scores
            .into_iter()
            .fold((0.0, 0u64), |(sum, count), score| (sum + score, count + 1));

        if count == 0 {
            return Self::default();
        }

        Self {
            average_rating: sum / count as f64,
            rating_count: count,
        }
    }
}

/// A rating as shown on a recipe page, with the reviewer's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeReview {
    #[serde(flatten)]
    pub rating: Rating,
    pub username: String,
}

/// A rating as shown on the reviewer's profile, with the rated recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RatedRecipe {
    pub rating: Rating,
    pub recipe: Recipe,
}

pub struct RateRecipeInput {
    pub recipe_id: Uuid,
    pub score: f64,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RateRecipeOutput {
    pub rating: Rating,
    pub created: bool,
}
