use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Resource not found")]
    NotFound,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Session expired")]
    SessionExpired,

    #[error("Username already taken")]
    UsernameTaken,

    #[error("Email already registered")]
    EmailTaken,

    /// A rating for this user and recipe was stored concurrently.
    #[error("Recipe already rated")]
    AlreadyRated,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Internal server error")]
    InternalServerError,
}
