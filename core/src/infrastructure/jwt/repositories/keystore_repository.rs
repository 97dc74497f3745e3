use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    jwt::{entities::JwtClaim, ports::KeyStoreRepository},
};

/// HS256 signing with a shared secret.
#[derive(Clone)]
pub struct JwtKeyStoreRepository {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtKeyStoreRepository {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

impl KeyStoreRepository for JwtKeyStoreRepository {
    fn sign(&self, claims: &JwtClaim) -> Result<String, CoreError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            error!("Failed to sign access token: {}", e);
            CoreError::InternalServerError
        })
    }

    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<JwtClaim>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => CoreError::SessionExpired,
                _ => CoreError::InvalidToken,
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn claims(exp_offset_secs: i64) -> JwtClaim {
        let now = Utc::now().timestamp();
        JwtClaim {
            sub: Uuid::new_v4(),
            sid: Uuid::new_v4(),
            preferred_username: "alice".to_string(),
            iat: now,
            exp: now + exp_offset_secs,
        }
    }

    #[test]
    fn signed_token_verifies() {
        let keystore = JwtKeyStoreRepository::new("secret");
        let claims = claims(3600);

        let token = keystore.sign(&claims).unwrap();

        assert_eq!(keystore.verify(&token), Ok(claims));
    }

    #[test]
    fn expired_token_is_rejected() {
        let keystore = JwtKeyStoreRepository::new("secret");
        let token = keystore.sign(&claims(-60)).unwrap();

        assert_eq!(keystore.verify(&token), Err(CoreError::SessionExpired));
    }

    #[test]
    fn token_from_another_secret_is_rejected() {
        let token = JwtKeyStoreRepository::new("secret")
            .sign(&claims(3600))
            .unwrap();

        assert_eq!(
            JwtKeyStoreRepository::new("other").verify(&token),
            Err(CoreError::InvalidToken)
        );
    }
}
