use chrono::Duration;
use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::{
    domain::common::{AuthConfig, LadleConfig, generate_random_string, services::Service},
    infrastructure::{
        crypto::repositories::argon2_hasher_repository::Argon2HasherRepository,
        db::postgres::{Postgres, PostgresConfig},
        health::repositories::health_check_repository::PostgresHealthCheckRepository,
        jwt::repositories::keystore_repository::JwtKeyStoreRepository,
        meal::repositories::meal_repository::PostgresMealRepository,
        rating::repositories::rating_repository::PostgresRatingRepository,
        recipe::repositories::recipe_repository::PostgresRecipeRepository,
        session::repositories::session_repository::PostgresSessionRepository,
        user::repositories::user_repository::PostgresUserRepository,
    },
};

const GENERATED_SECRET_LENGTH: usize = 64;
const MAX_DATABASE_CONNECTIONS: u32 = 10;

pub type LadleService = Service<
    PostgresUserRepository,
    PostgresSessionRepository,
    Argon2HasherRepository,
    JwtKeyStoreRepository,
    PostgresRecipeRepository,
    PostgresMealRepository,
    PostgresRatingRepository,
    PostgresHealthCheckRepository,
>;

/// Connects to Postgres, runs migrations and wires every repository.
pub async fn create_service(config: LadleConfig) -> Result<LadleService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
        max_connections: MAX_DATABASE_CONNECTIONS,
    })
    .await?;

    Ok(build_service(postgres.get_db(), &config.auth))
}

/// Wires the service over an existing connection. A disconnected one is
/// enough for code paths that never reach storage.
pub fn build_service(db: DatabaseConnection, auth: &AuthConfig) -> LadleService {
    let secret = if auth.jwt_secret.is_empty() {
        warn!("JWT_SECRET is not set, tokens will not survive a restart");
        generate_random_string(GENERATED_SECRET_LENGTH)
    } else {
        auth.jwt_secret.clone()
    };

    Service::new(
        PostgresUserRepository::new(db.clone()),
        PostgresSessionRepository::new(db.clone()),
        Argon2HasherRepository::new(),
        JwtKeyStoreRepository::new(&secret),
        PostgresRecipeRepository::new(db.clone()),
        PostgresMealRepository::new(db.clone()),
        PostgresRatingRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
        Duration::seconds(auth.access_token_ttl_secs),
    )
}
