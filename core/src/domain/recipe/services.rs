use std::collections::HashMap;

use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::SessionRepository, value_objects::Identity},
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    jwt::ports::KeyStoreRepository,
    meal::ports::MealRepository,
    rating::{ports::RatingRepository, value_objects::RatingSummary},
    recipe::{
        entities::{Recipe, RecipeConfig},
        ports::{RecipePolicy, RecipeRepository, RecipeService},
        printable::render_printable,
        value_objects::{
            CreateRecipeInput, HomeRecipes, PageRequest, RecipeDetail, RecipeLookup,
            RecipeSearchFilter, RecipeSearchResult, RecipeSummary, UpdateRecipeInput,
        },
    },
    user::ports::UserRepository,
};

pub const HOME_SECTION_SIZE: u64 = 6;
pub const SIMILAR_RECIPES_LIMIT: usize = 4;
pub const QUICK_SEARCH_LIMIT: u64 = 10;

/// Attaches the rating summary of each recipe, keeping the order of `recipes`.
pub(crate) async fn summarize_recipes<RT: RatingRepository>(
    rating_repository: &RT,
    recipes: Vec<Recipe>,
) -> Result<Vec<RecipeSummary>, CoreError> {
    if recipes.is_empty() {
        return Ok(Vec::new());
    }

    let ids = recipes.iter().map(|r| r.id).collect();
    let ratings = rating_repository.get_by_recipes(ids).await?;

    let mut scores: HashMap<Uuid, Vec<f64>> = HashMap::new();
    for rating in ratings {
        scores.entry(rating.recipe_id).or_default().push(rating.score);
    }

    Ok(recipes
        .into_iter()
        .map(|recipe| {
            let summary =
                RatingSummary::from_scores(scores.remove(&recipe.id).unwrap_or_default());
            RecipeSummary::new(recipe, summary)
        })
        .collect())
}

impl<U, S, H, K, R, M, RT, HC> RecipeService for Service<U, S, H, K, R, M, RT, HC>
where
    U: UserRepository,
    S: SessionRepository,
    H: HasherRepository,
    K: KeyStoreRepository,
    R: RecipeRepository,
    M: MealRepository,
    RT: RatingRepository,
    HC: HealthCheckRepository,
{
    async fn get_home(&self) -> Result<HomeRecipes, CoreError> {
        let popular = self.recipe_repository.fetch_popular(HOME_SECTION_SIZE).await?;
        let newest = self.recipe_repository.fetch_newest(HOME_SECTION_SIZE).await?;

        Ok(HomeRecipes {
            popular_recipes: summarize_recipes(&self.rating_repository, popular).await?,
            newest_recipes: summarize_recipes(&self.rating_repository, newest).await?,
        })
    }

    async fn search_recipes(
        &self,
        filter: RecipeSearchFilter,
        page: PageRequest,
    ) -> Result<RecipeSearchResult, CoreError> {
        let (recipes, total_items) = self.recipe_repository.search_recipes(filter, page).await?;
        let items = summarize_recipes(&self.rating_repository, recipes).await?;

        Ok(RecipeSearchResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total_items,
            total_pages: total_items.div_ceil(page.per_page),
        })
    }

    async fn get_recipe(
        &self,
        identity: Option<Identity>,
        recipe_id: Uuid,
    ) -> Result<RecipeDetail, CoreError> {
        let recipe = self
            .recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let author_username = self
            .user_repository
            .get_by_id(recipe.author_id)
            .await?
            .map(|user| user.username)
            .unwrap_or_default();

        let ratings = self.rating_repository.get_reviews_by_recipe(recipe.id).await?;
        let summary = RatingSummary::from_scores(ratings.iter().map(|r| r.rating.score));

        let user_rating = match identity {
            Some(identity) => {
                self.rating_repository
                    .get_by_user_and_recipe(identity.id(), recipe.id)
                    .await?
            }
            None => None,
        };

        let similar_recipes = match recipe.tag_list().into_iter().next() {
            Some(first_tag) => self
                .recipe_repository
                .fetch_by_tags(
                    vec![first_tag.clone()],
                    vec![recipe.id],
                    Some(SIMILAR_RECIPES_LIMIT as u64),
                )
                .await?
                .into_iter()
                .filter(|candidate| candidate.has_tag(&first_tag))
                .take(SIMILAR_RECIPES_LIMIT)
                .collect(),
            None => Vec::new(),
        };

        Ok(RecipeDetail {
            recipe,
            author_username,
            average_rating: summary.average_rating,
            rating_count: summary.rating_count,
            ratings,
            user_rating,
            similar_recipes,
        })
    }

    #[instrument(skip(self, identity, input), fields(author_id = %identity.id()))]
    async fn create_recipe(
        &self,
        identity: Identity,
        input: CreateRecipeInput,
    ) -> Result<Recipe, CoreError> {
        let recipe = Recipe::new(RecipeConfig {
            author_id: identity.id(),
            name: input.name,
            instructions: input.instructions,
            cooking_time: input.cooking_time,
            image_url: input.image_url,
            nutrition: input.nutrition,
            ingredients: input.ingredients,
            tags: input.tags,
        });
        recipe.validate()?;

        let recipe = self.recipe_repository.create_recipe(recipe).await?;

        tracing::info!(recipe_id = %recipe.id, "recipe created");

        Ok(recipe)
    }

    #[instrument(skip(self, identity, input), fields(recipe_id = %input.recipe_id))]
    async fn update_recipe(
        &self,
        identity: Identity,
        input: UpdateRecipeInput,
    ) -> Result<Recipe, CoreError> {
        let mut recipe = self
            .recipe_repository
            .get_by_id(input.recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            self.policy.can_update_recipe(&identity, &recipe),
            "only the author can edit this recipe",
        )?;

        recipe.update(input.changes);
        recipe.validate()?;

        self.recipe_repository.update_recipe(recipe).await
    }

    async fn share_recipe(&self, recipe_id: Uuid) -> Result<String, CoreError> {
        let recipe = self
            .recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let author = self
            .user_repository
            .get_by_id(recipe.author_id)
            .await?
            .map(|user| user.username)
            .unwrap_or_default();

        Ok(render_printable(&recipe, &author))
    }

    async fn quick_search(&self, query: String) -> Result<Vec<RecipeLookup>, CoreError> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        self.recipe_repository
            .search_by_name(query, QUICK_SEARCH_LIMIT)
            .await
    }
}
