use crate::domain::common::entities::app_errors::CoreError;

/// Authorization rules shared by the services. Ownership checks only need the
/// identity and the target resource, so the policy carries no repositories.
#[derive(Debug, Clone, Copy, Default)]
pub struct LadlePolicy;

impl LadlePolicy {
    pub fn new() -> Self {
        Self
    }
}

pub fn ensure_policy(
    result_has_permission: Result<bool, CoreError>,
    error_message: &str,
) -> Result<(), CoreError> {
    match result_has_permission {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(error_message.to_string())),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_policy_maps_denial_to_forbidden() {
        assert_eq!(ensure_policy(Ok(true), "nope"), Ok(()));
        assert_eq!(
            ensure_policy(Ok(false), "nope"),
            Err(CoreError::Forbidden("nope".to_string()))
        );
        assert_eq!(
            ensure_policy(Err(CoreError::NotFound), "nope"),
            Err(CoreError::NotFound)
        );
    }
}
