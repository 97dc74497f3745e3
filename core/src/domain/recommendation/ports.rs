use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
    recommendation::value_objects::Recommendations,
};

pub trait RecommendationService: Send + Sync {
    fn get_recommendations(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Recommendations, CoreError>> + Send;
}
