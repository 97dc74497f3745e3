use crate::domain::{common::entities::app_errors::CoreError, jwt::entities::JwtClaim};

/// Signs and verifies access tokens.
#[cfg_attr(test, mockall::automock)]
pub trait KeyStoreRepository: Send + Sync {
    fn sign(&self, claims: &JwtClaim) -> Result<String, CoreError>;

    /// Checks the signature and the expiry, then returns the claims.
    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError>;
}
