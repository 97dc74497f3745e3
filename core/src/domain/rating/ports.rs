use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    rating::{
        entities::Rating,
        value_objects::{RateRecipeInput, RateRecipeOutput, RatedRecipe, RecipeReview},
    },
};

pub trait RatingService: Send + Sync {
    /// Creates the caller's rating for a recipe or replaces score and comment
    /// of the existing one.
    fn rate_recipe(
        &self,
        identity: Identity,
        input: RateRecipeInput,
    ) -> impl Future<Output = Result<RateRecipeOutput, CoreError>> + Send;

    fn get_my_rating(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Rating, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RatingRepository: Send + Sync {
    /// Fails with `CoreError::AlreadyRated` when the user already rated the recipe.
    fn create_rating(
        &self,
        rating: Rating,
    ) -> impl Future<Output = Result<Rating, CoreError>> + Send;

    fn update_rating(
        &self,
        rating: Rating,
    ) -> impl Future<Output = Result<Rating, CoreError>> + Send;

    fn get_by_user_and_recipe(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Option<Rating>, CoreError>> + Send;

    /// Ratings of a recipe, newest first.
    fn get_reviews_by_recipe(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Vec<RecipeReview>, CoreError>> + Send;

    fn get_by_recipes(
        &self,
        recipe_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Vec<Rating>, CoreError>> + Send;

    /// Ratings given by a user, newest first.
    fn get_by_user_with_recipes(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<RatedRecipe>, CoreError>> + Send;
}
