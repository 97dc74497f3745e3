use ladle_core::domain::{
    common::entities::app_errors::CoreError, rating::entities::validate_score,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RateRecipeValidator {
    /// 1 to 5 in steps of 0.5.
    #[validate(custom(function = "validate_half_step_score"))]
    pub score: f64,

    #[serde(default)]
    #[validate(length(max = 2000, message = "comment must be at most 2000 characters"))]
    pub comment: Option<String>,
}

fn validate_half_step_score(score: &f64) -> Result<(), ValidationError> {
    validate_score(*score).map_err(|e| {
        let message = match e {
            CoreError::Invalid(message) => message,
            other => other.to_string(),
        };
        ValidationError::new("score").with_message(message.into())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(score: f64) -> RateRecipeValidator {
        RateRecipeValidator {
            score,
            comment: None,
        }
    }

    #[test]
    fn accepts_half_steps_within_bounds() {
        for score in [1.0, 1.5, 3.0, 4.5, 5.0] {
            assert!(rate(score).validate().is_ok(), "{score} should be valid");
        }
    }

    #[test]
    fn rejects_out_of_range_or_off_step_scores() {
        for score in [0.0, 0.5, 5.5, 3.25, 4.9] {
            assert!(rate(score).validate().is_err(), "{score} should be invalid");
        }
    }

    #[test]
    fn off_step_score_reports_the_domain_message() {
        let errors = rate(3.25).validate().unwrap_err();
        let score_errors = errors.field_errors()["score"];

        assert_eq!(
            score_errors[0].message.as_deref(),
            Some("score must be a multiple of 0.5")
        );
    }

    #[test]
    fn rejects_overlong_comments() {
        let validator = RateRecipeValidator {
            score: 4.0,
            comment: Some("a".repeat(2001)),
        };

        assert!(validator.validate().is_err());
    }
}
