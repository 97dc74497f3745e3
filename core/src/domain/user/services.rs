use crate::domain::{
    authentication::{ports::SessionRepository, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    jwt::ports::KeyStoreRepository,
    meal::ports::MealRepository,
    nutrition::NutritionFacts,
    rating::{ports::RatingRepository, value_objects::RatingSummary},
    recipe::ports::RecipeRepository,
    user::{
        ports::{UserRepository, UserService},
        value_objects::UserProfile,
    },
};

impl<U, S, H, K, R, M, RT, HC> UserService for Service<U, S, H, K, R, M, RT, HC>
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
    async fn get_profile(&self, identity: Identity) -> Result<UserProfile, CoreError> {
        let meals = self.meal_repository.get_by_user(identity.id()).await?;
        let ratings = self
            .rating_repository
            .get_by_user_with_recipes(identity.id())
            .await?;

        let average_rating =
            RatingSummary::from_scores(ratings.iter().map(|r| r.rating.score)).average_rating;
        let nutrition_summary: NutritionFacts =
            meals.iter().map(|entry| entry.recipe.nutrition()).sum();

        Ok(UserProfile {
            user: identity.user,
            total_meal_logs: meals.len(),
            meals,
            ratings,
            average_rating,
            nutrition_summary,
        })
    }
}
