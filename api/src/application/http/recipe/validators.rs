use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, de};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRecipeValidator {
    #[validate(length(min = 1, max = 30, message = "name must be 1 to 30 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "instructions are required"))]
    pub instructions: String,

    /// Minutes.
    #[validate(range(min = 0, message = "cooking_time must not be negative"))]
    pub cooking_time: i32,

    #[serde(default)]
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,

    #[validate(range(min = 0.0, message = "protein must not be negative"))]
    pub protein: f64,

    #[validate(range(min = 0.0, message = "carbs must not be negative"))]
    pub carbs: f64,

    #[validate(range(min = 0.0, message = "fat must not be negative"))]
    pub fat: f64,

    #[validate(range(min = 0.0, message = "calories must not be negative"))]
    pub calories: f64,

    /// One ingredient per line.
    #[validate(length(min = 1, message = "ingredients are required"))]
    pub ingredients: String,

    /// Comma separated.
    #[serde(default)]
    pub tags: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRecipeValidator {
    #[serde(default)]
    #[validate(length(min = 1, max = 30, message = "name must be 1 to 30 characters"))]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "instructions must not be empty"))]
    pub instructions: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, message = "cooking_time must not be negative"))]
    pub cooking_time: Option<i32>,

    #[serde(default)]
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "protein must not be negative"))]
    pub protein: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "carbs must not be negative"))]
    pub carbs: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "fat must not be negative"))]
    pub fat: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "calories must not be negative"))]
    pub calories: Option<f64>,

    #[serde(default)]
    #[validate(length(min = 1, message = "ingredients must not be empty"))]
    pub ingredients: Option<String>,

    #[serde(default)]
    pub tags: Option<String>,
}

/// Query of the recipe search form. Empty fields count as absent.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SearchRecipesQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub query: Option<String>,

    /// Comma separated, every tag has to match.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub tags: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub min_protein: Option<f64>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub max_calories: Option<f64>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub page: Option<u64>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub per_page: Option<u64>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct QuickSearchQuery {
    #[serde(default)]
    pub q: String,
}

fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_validator() -> CreateRecipeValidator {
        CreateRecipeValidator {
            name: "Pancakes".to_string(),
            instructions: "Mix and fry.".to_string(),
            cooking_time: 15,
            image_url: None,
            protein: 12.0,
            carbs: 40.0,
            fat: 8.0,
            calories: 310.0,
            ingredients: "flour\nmilk\neggs".to_string(),
            tags: "breakfast, sweet".to_string(),
        }
    }

    #[test]
    fn accepts_a_complete_recipe() {
        assert!(create_validator().validate().is_ok());
    }

    #[test]
    fn rejects_long_names_and_negative_values() {
        let mut validator = create_validator();
        validator.name = "x".repeat(31);
        validator.calories = -1.0;
        validator.cooking_time = -5;

        let errors = validator.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("calories"));
        assert!(fields.contains_key("cooking_time"));
    }

    #[test]
    fn update_validates_only_present_fields() {
        assert!(UpdateRecipeValidator::default().validate().is_ok());

        let validator = UpdateRecipeValidator {
            image_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(validator.validate().is_err());
    }

    #[test]
    fn search_query_treats_empty_fields_as_absent() {
        let query: SearchRecipesQuery =
            parse_query("query=&tags=vegan&min_protein=&max_calories=500&page=2");

        assert_eq!(query.query, None);
        assert_eq!(query.tags.as_deref(), Some("vegan"));
        assert_eq!(query.min_protein, None);
        assert_eq!(query.max_calories, Some(500.0));
        assert_eq!(query.page, Some(2));
        assert_eq!(query.per_page, None);
    }

    fn parse_query(raw: &str) -> SearchRecipesQuery {
        let uri: axum::http::Uri = format!("/recipes?{raw}").parse().unwrap();
        axum::extract::Query::<SearchRecipesQuery>::try_from_uri(&uri)
            .unwrap()
            .0
    }
}
