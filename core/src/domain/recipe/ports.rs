use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Recipe,
        value_objects::{
            CreateRecipeInput, HomeRecipes, PageRequest, RecipeDetail, RecipeLookup,
            RecipeSearchFilter, RecipeSearchResult, UpdateRecipeInput,
        },
    },
};

pub trait RecipeService: Send + Sync {
    fn get_home(&self) -> impl Future<Output = Result<HomeRecipes, CoreError>> + Send;

    fn search_recipes(
        &self,
        filter: RecipeSearchFilter,
        page: PageRequest,
    ) -> impl Future<Output = Result<RecipeSearchResult, CoreError>> + Send;

    fn get_recipe(
        &self,
        identity: Option<Identity>,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<RecipeDetail, CoreError>> + Send;

    fn create_recipe(
        &self,
        identity: Identity,
        input: CreateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn update_recipe(
        &self,
        identity: Identity,
        input: UpdateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn share_recipe(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn quick_search(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Vec<RecipeLookup>, CoreError>> + Send;
}

pub trait RecipePolicy: Send + Sync {
    fn can_update_recipe(&self, identity: &Identity, recipe: &Recipe) -> Result<bool, CoreError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn create_recipe(
        &self,
        recipe: Recipe,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn update_recipe(
        &self,
        recipe: Recipe,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn get_by_id(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    /// Matching recipes newest first, with the total number of matches.
    fn search_recipes(
        &self,
        filter: RecipeSearchFilter,
        page: PageRequest,
    ) -> impl Future<Output = Result<(Vec<Recipe>, u64), CoreError>> + Send;

    fn fetch_newest(
        &self,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    /// Highest average rating first. Unrated recipes come after rated ones,
    /// ties go to the newest.
    fn fetch_popular(
        &self,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    /// Recipes carrying at least one of the normalized `tags`, newest first,
    /// at most `limit` when given.
    fn fetch_by_tags(
        &self,
        tags: Vec<String>,
        exclude_ids: Vec<Uuid>,
        limit: Option<u64>,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    /// Name lookups ordered by name.
    fn search_by_name(
        &self,
        query: String,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<RecipeLookup>, CoreError>> + Send;
}
