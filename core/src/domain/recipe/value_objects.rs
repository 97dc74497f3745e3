use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    nutrition::NutritionFacts,
    rating::{
        entities::Rating,
        value_objects::{RatingSummary, RecipeReview},
    },
    recipe::{entities::Recipe, tags::parse_tags},
};

pub const DEFAULT_PER_PAGE: u64 = 12;
pub const MAX_PER_PAGE: u64 = 100;
/// Highest page whose offset still fits a Postgres `BIGINT`.
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_PER_PAGE;

pub struct CreateRecipeInput {
    pub name: String,
    pub instructions: String,
    pub cooking_time: i32,
    pub image_url: Option<String>,
    pub nutrition: NutritionFacts,
    pub ingredients: String,
    pub tags: String,
}

/// Fields left to `None` are kept as they are.
#[derive(Debug, Clone, Default)]
pub struct RecipeChanges {
    pub name: Option<String>,
    pub instructions: Option<String>,
    pub cooking_time: Option<i32>,
    pub image_url: Option<String>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub calories: Option<f64>,
    pub ingredients: Option<String>,
    pub tags: Option<String>,
}

pub struct UpdateRecipeInput {
    pub recipe_id: Uuid,
    pub changes: RecipeChanges,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeSearchFilter {
    /// Matched against name and ingredients.
    pub query: Option<String>,
    /// Every tag has to be present.
    pub tags: Vec<String>,
    pub min_protein: Option<f64>,
    pub max_calories: Option<f64>,
}

impl RecipeSearchFilter {
    pub fn new(
        query: Option<String>,
        tags: Option<String>,
        min_protein: Option<f64>,
        max_calories: Option<f64>,
    ) -> Self {
        let query = query
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());
        let tags = tags.as_deref().map(parse_tags).unwrap_or_default();

        Self {
            query,
            tags,
            min_protein,
            max_calories,
        }
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(query) = &self.query {
            let in_name = recipe.name.to_lowercase().contains(query);
            let in_ingredients = recipe.ingredients.to_lowercase().contains(query);
            if !in_name && !in_ingredients {
                return false;
            }
        }

        let tags = recipe.tags.to_lowercase();
        if !self.tags.iter().all(|tag| tags.contains(tag.as_str())) {
            return false;
        }

        if let Some(min_protein) = self.min_protein {
            if recipe.protein < min_protein {
                return false;
            }
        }

        if let Some(max_calories) = self.max_calories {
            if recipe.calories > max_calories {
                return false;
            }
        }

        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based.
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    pub fn new(page: Option<u64>, per_page: Option<u64>) -> Self {
        Self {
            page: page.unwrap_or(1).clamp(1, MAX_PAGE),
            per_page: per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE),
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeSummary {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub average_rating: f64,
    pub rating_count: u64,
}

impl RecipeSummary {
    pub fn new(recipe: Recipe, summary: RatingSummary) -> Self {
        Self {
            recipe,
            average_rating: summary.average_rating,
            rating_count: summary.rating_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeSearchResult {
    pub items: Vec<RecipeSummary>,
    pub page: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HomeRecipes {
    pub popular_recipes: Vec<RecipeSummary>,
    pub newest_recipes: Vec<RecipeSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeDetail {
    pub recipe: Recipe,
    pub author_username: String,
    pub average_rating: f64,
    pub rating_count: u64,
    pub ratings: Vec<RecipeReview>,
    /// The caller's own rating, when authenticated and rated.
    pub user_rating: Option<Rating>,
    pub similar_recipes: Vec<Recipe>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeLookup {
    pub id: Uuid,
    pub name: String,
}
