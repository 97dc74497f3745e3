use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp},
    nutrition::NutritionFacts,
    recipe::{
        tags::{has_tag, normalize_tags, parse_tags},
        value_objects::RecipeChanges,
    },
};

pub const MAX_RECIPE_NAME_LENGTH: usize = 30;
pub const MAX_IMAGE_URL_LENGTH: usize = 2048;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    pub author_id: Uuid,
    pub name: String,
    pub instructions: String,
    /// Minutes.
    pub cooking_time: i32,
    pub image_url: Option<String>,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub calories: f64,
    /// One ingredient per line.
    pub ingredients: String,
    /// Normalized comma separated tags, see [`crate::domain::recipe::tags`].
    pub tags: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RecipeConfig {
    pub author_id: Uuid,
    pub name: String,
    pub instructions: String,
    pub cooking_time: i32,
    pub image_url: Option<String>,
    pub nutrition: NutritionFacts,
    pub ingredients: String,
    pub tags: String,
}

impl Recipe {
    pub fn new(config: RecipeConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            author_id: config.author_id,
            name: config.name.trim().to_string(),
            instructions: config.instructions,
            cooking_time: config.cooking_time,
            image_url: config.image_url,
            protein: config.nutrition.protein,
            carbs: config.nutrition.carbs,
            fat: config.nutrition.fat,
            calories: config.nutrition.calories,
            ingredients: config.ingredients,
            tags: normalize_tags(&config.tags),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, changes: RecipeChanges) {
        let (now, _) = generate_timestamp();

        if let Some(name) = changes.name {
            self.name = name.trim().to_string();
        }
        if let Some(instructions) = changes.instructions {
            self.instructions = instructions;
        }
        if let Some(cooking_time) = changes.cooking_time {
            self.cooking_time = cooking_time;
        }
        if let Some(image_url) = changes.image_url {
            self.image_url = Some(image_url);
        }
        if let Some(protein) = changes.protein {
            self.protein = protein;
        }
        if let Some(carbs) = changes.carbs {
            self.carbs = carbs;
        }
        if let Some(fat) = changes.fat {
            self.fat = fat;
        }
        if let Some(calories) = changes.calories {
            self.calories = calories;
        }
        if let Some(ingredients) = changes.ingredients {
            self.ingredients = ingredients;
        }
        if let Some(tags) = changes.tags {
            self.tags = normalize_tags(&tags);
        }
        self.updated_at = now;
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.is_empty() {
            return Err(CoreError::Invalid("name is required".to_string()));
        }
        if self.name.chars().count() > MAX_RECIPE_NAME_LENGTH {
            return Err(CoreError::Invalid(format!(
                "name must be at most {MAX_RECIPE_NAME_LENGTH} characters"
            )));
        }
        if self.instructions.trim().is_empty() {
            return Err(CoreError::Invalid("instructions are required".to_string()));
        }
        if self.ingredients.trim().is_empty() {
            return Err(CoreError::Invalid("ingredients are required".to_string()));
        }
        if self.cooking_time < 0 {
            return Err(CoreError::Invalid(
                "cooking_time must not be negative".to_string(),
            ));
        }
        if let Some(image_url) = &self.image_url {
            let is_http = image_url.starts_with("http://") || image_url.starts_with("https://");
            if !is_http || image_url.len() > MAX_IMAGE_URL_LENGTH {
                return Err(CoreError::Invalid(
                    "image_url must be an http(s) URL".to_string(),
                ));
            }
        }
        self.nutrition().validate()
    }

    pub fn nutrition(&self) -> NutritionFacts {
        NutritionFacts::new(self.calories, self.protein, self.carbs, self.fat)
    }

    pub fn tag_list(&self) -> Vec<String> {
        parse_tags(&self.tags)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        has_tag(&self.tags, tag)
    }

    pub fn ingredient_lines(&self) -> Vec<&str> {
        self.ingredients
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }
}

#[cfg(test)]
pub(crate) fn sample_recipe(author_id: Uuid, name: &str, tags: &str) -> Recipe {
    Recipe::new(RecipeConfig {
        author_id,
        name: name.to_string(),
        instructions: "Mix and cook.".to_string(),
        cooking_time: 20,
        image_url: None,
        nutrition: NutritionFacts::new(400.0, 25.0, 50.0, 10.0),
        ingredients: "flour\neggs".to_string(),
        tags: tags.to_string(),
    })
}
