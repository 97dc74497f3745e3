use tracing::instrument;

use crate::domain::{
    authentication::{ports::SessionRepository, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    jwt::ports::KeyStoreRepository,
    meal::{
        entities::Meal,
        ports::{MealRepository, MealService},
        value_objects::{LogMealInput, MealEntry, MealLog},
    },
    rating::ports::RatingRepository,
    recipe::ports::RecipeRepository,
    user::ports::UserRepository,
};

impl<U, S, H, K, R, M, RT, HC> MealService for Service<U, S, H, K, R, M, RT, HC>
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
    async fn log_meal(
        &self,
        identity: Identity,
        input: LogMealInput,
    ) -> Result<MealEntry, CoreError> {
        let recipe = self
            .recipe_repository
            .get_by_id(input.recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let meal = self
            .meal_repository
            .create_meal(Meal::new(identity.id(), recipe.id))
            .await?;

        Ok(MealEntry { meal, recipe })
    }

    async fn get_meal_log(&self, identity: Identity) -> Result<MealLog, CoreError> {
        let entries = self.meal_repository.get_by_user(identity.id()).await?;

        Ok(MealLog::from_entries(entries))
    }
}
