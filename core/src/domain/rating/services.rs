use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::SessionRepository, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    jwt::ports::KeyStoreRepository,
    meal::ports::MealRepository,
    rating::{
        entities::{Rating, validate_comment, validate_score},
        ports::{RatingRepository, RatingService},
        value_objects::{RateRecipeInput, RateRecipeOutput},
    },
    recipe::ports::RecipeRepository,
    user::ports::UserRepository,
};

impl<U, S, H, K, R, M, RT, HC> Service<U, S, H, K, R, M, RT, HC>
where
    RT: RatingRepository,
{
    async fn replace_rating(
        &self,
        mut rating: Rating,
        input: RateRecipeInput,
    ) -> Result<RateRecipeOutput, CoreError> {
        rating.update(input.score, input.comment);
        let rating = self.rating_repository.update_rating(rating).await?;

        Ok(RateRecipeOutput {
            rating,
            created: false,
        })
    }
}

impl<U, S, H, K, R, M, RT, HC> RatingService for Service<U, S, H, K, R, M, RT, HC>
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
    #[instrument(skip(self, identity, input), fields(user_id = %identity.id(), recipe_id = %input.recipe_id))]
    async fn rate_recipe(
        &self,
        identity: Identity,
        input: RateRecipeInput,
    ) -> Result<RateRecipeOutput, CoreError> {
        validate_score(input.score)?;
        validate_comment(input.comment.as_deref())?;

        let recipe = self
            .recipe_repository
            .get_by_id(input.recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let existing = self
            .rating_repository
            .get_by_user_and_recipe(identity.id(), recipe.id)
            .await?;

        if let Some(rating) = existing {
            return self.replace_rating(rating, input).await;
        }

        let rating = Rating::new(
            identity.id(),
            recipe.id,
            input.score,
            input.comment.clone(),
        );

        match self.rating_repository.create_rating(rating).await {
            Ok(rating) => Ok(RateRecipeOutput {
                rating,
                created: true,
            }),
            Err(CoreError::AlreadyRated) => {
                let rating = self
                    .rating_repository
                    .get_by_user_and_recipe(identity.id(), recipe.id)
                    .await?
                    .ok_or(CoreError::InternalServerError)?;

                self.replace_rating(rating, input).await
            }
            Err(e) => Err(e),
        }
    }

    async fn get_my_rating(&self, identity: Identity, recipe_id: Uuid) -> Result<Rating, CoreError> {
        self.rating_repository
            .get_by_user_and_recipe(identity.id(), recipe_id)
            .await?
            .ok_or(CoreError::NotFound)
    }
}
