use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterValidator {
    #[validate(length(min = 1, max = 150, message = "username must be 1 to 150 characters"))]
    pub username: String,

    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "passwords do not match"))]
    pub password_confirmation: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginValidator {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(password_confirmation: &str) -> RegisterValidator {
        RegisterValidator {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "correct horse".to_string(),
            password_confirmation: password_confirmation.to_string(),
        }
    }

    #[test]
    fn registration_requires_matching_passwords() {
        assert!(register("correct horse").validate().is_ok());

        let errors = register("wrong horse").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password_confirmation"));
    }

    #[test]
    fn registration_rejects_malformed_email() {
        let mut validator = register("correct horse");
        validator.email = "not-an-email".to_string();

        let errors = validator.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn login_requires_both_fields() {
        let validator = LoginValidator {
            username: String::new(),
            password: "secret".to_string(),
        };

        assert!(validator.validate().is_err());
    }
}
