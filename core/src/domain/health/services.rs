use crate::domain::{
    authentication::ports::SessionRepository,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    jwt::ports::KeyStoreRepository,
    meal::ports::MealRepository,
    rating::ports::RatingRepository,
    recipe::ports::RecipeRepository,
    user::ports::UserRepository,
};

impl<U, S, H, K, R, M, RT, HC> HealthCheckService for Service<U, S, H, K, R, M, RT, HC>
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
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
