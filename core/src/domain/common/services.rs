use chrono::Duration;

use crate::domain::common::policies::LadlePolicy;

/// Dependency container behind every `*Service` trait. Each domain module
/// implements its service trait for this struct in its own `services.rs`.
#[derive(Clone)]
pub struct Service<U, S, H, K, R, M, RT, HC> {
    pub(crate) user_repository: U,
    pub(crate) session_repository: S,
    pub(crate) hasher_repository: H,
    pub(crate) keystore_repository: K,
    pub(crate) recipe_repository: R,
    pub(crate) meal_repository: M,
    pub(crate) rating_repository: RT,
    pub(crate) health_check_repository: HC,
    pub(crate) policy: LadlePolicy,
    pub(crate) session_ttl: Duration,
}

impl<U, S, H, K, R, M, RT, HC> Service<U, S, H, K, R, M, RT, HC> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repository: U,
        session_repository: S,
        hasher_repository: H,
        keystore_repository: K,
        recipe_repository: R,
        meal_repository: M,
        rating_repository: RT,
        health_check_repository: HC,
        session_ttl: Duration,
    ) -> Self {
        Self {
            user_repository,
            session_repository,
            hasher_repository,
            keystore_repository,
            recipe_repository,
            meal_repository,
            rating_repository,
            health_check_repository,
            policy: LadlePolicy::new(),
            session_ttl,
        }
    }
}
