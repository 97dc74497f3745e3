use chrono::Utc;
use tracing::instrument;

use crate::domain::{
    authentication::{
        entities::{
            AuthenticationOutput, AuthorizeRequestInput, AuthorizeRequestOutput, Session,
        },
        ports::{AuthService, SessionRepository},
        value_objects::{Identity, LoginInput, RegisterInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    jwt::{entities::JwtClaim, ports::KeyStoreRepository},
    meal::ports::MealRepository,
    rating::ports::RatingRepository,
    recipe::ports::RecipeRepository,
    user::{
        entities::User,
        ports::UserRepository,
        value_objects::{normalize_email, validate_email, validate_password, validate_username},
    },
};

pub const TOKEN_TYPE: &str = "Bearer";

impl<U, S, H, K, R, M, RT, HC> Service<U, S, H, K, R, M, RT, HC>
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
    async fn open_session(&self, user: User) -> Result<AuthenticationOutput, CoreError> {
        let session = self
            .session_repository
            .create_session(Session::new(user.id, self.session_ttl))
            .await?;

        let access_token = self.keystore_repository.sign(&JwtClaim::new(&user, &session))?;

        Ok(AuthenticationOutput {
            user,
            access_token,
            token_type: TOKEN_TYPE.to_string(),
            expires_at: session.expires_at,
        })
    }
}

impl<U, S, H, K, R, M, RT, HC> AuthService for Service<U, S, H, K, R, M, RT, HC>
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
    #[instrument(skip(self, input), fields(username = %input.username))]
    async fn register(&self, input: RegisterInput) -> Result<AuthenticationOutput, CoreError> {
        let username = input.username.trim().to_string();
        let email = normalize_email(&input.email);

        validate_username(&username)?;
        validate_email(&email)?;
        validate_password(&input.password)?;

        if self
            .user_repository
            .get_by_username(username.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::UsernameTaken);
        }

        if self
            .user_repository
            .get_by_email(email.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::EmailTaken);
        }

        let password_hash = self.hasher_repository.hash_password(&input.password)?;
        let user = self
            .user_repository
            .create_user(User::new(username, email), password_hash)
            .await?;

        tracing::info!(user_id = %user.id, "user registered");

        self.open_session(user).await
    }

    #[instrument(skip(self, input), fields(username = %input.username))]
    async fn login(&self, input: LoginInput) -> Result<AuthenticationOutput, CoreError> {
        let user = self
            .user_repository
            .get_by_username(input.username.trim().to_string())
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        let password_hash = self
            .user_repository
            .get_password_hash(user.id)
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        if !self
            .hasher_repository
            .verify_password(&input.password, &password_hash)?
        {
            return Err(CoreError::InvalidCredentials);
        }

        self.open_session(user).await
    }

    async fn logout(&self, identity: Identity) -> Result<(), CoreError> {
        self.session_repository
            .revoke_session(identity.session_id, Utc::now())
            .await
    }

    async fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> Result<AuthorizeRequestOutput, CoreError> {
        let claims = self.keystore_repository.verify(&input.token)?;

        let session = self
            .session_repository
            .get_by_id(claims.sid)
            .await?
            .ok_or(CoreError::InvalidToken)?;

        if session.user_id != claims.sub || session.revoked_at.is_some() {
            return Err(CoreError::InvalidToken);
        }
        if !session.is_active(Utc::now()) {
            return Err(CoreError::SessionExpired);
        }

        let user = self
            .user_repository
            .get_by_id(claims.sub)
            .await?
            .ok_or(CoreError::InvalidToken)?;

        Ok(AuthorizeRequestOutput {
            identity: Identity {
                user,
                session_id: session.id,
            },
        })
    }
}
