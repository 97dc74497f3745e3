use std::collections::HashSet;

use crate::domain::{
    authentication::{ports::SessionRepository, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    jwt::ports::KeyStoreRepository,
    meal::ports::MealRepository,
    rating::ports::RatingRepository,
    recipe::ports::RecipeRepository,
    recommendation::{
        ports::RecommendationService,
        ranking::{
            FAVORITE_TAG_LIMIT, HIGH_RATING_THRESHOLD, RECOMMENDATION_LIMIT, favorite_tags,
            rank_recommendations,
        },
        value_objects::Recommendations,
    },
    user::ports::UserRepository,
};

impl<U, S, H, K, R, M, RT, HC> RecommendationService for Service<U, S, H, K, R, M, RT, HC>
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
    async fn get_recommendations(&self, identity: Identity) -> Result<Recommendations, CoreError> {
        let rated = self
            .rating_repository
            .get_by_user_with_recipes(identity.id())
            .await?;

        let favorite_tags = favorite_tags(&rated, HIGH_RATING_THRESHOLD, FAVORITE_TAG_LIMIT);
        if favorite_tags.is_empty() {
            return Ok(Recommendations::default());
        }

        let rated_ids: HashSet<_> = rated.iter().map(|r| r.recipe.id).collect();
        let candidates = self
            .recipe_repository
            .fetch_by_tags(
                favorite_tags.clone(),
                rated_ids.iter().copied().collect(),
                None,
            )
            .await?;

        let recommended_recipes =
            rank_recommendations(&favorite_tags, candidates, &rated_ids, RECOMMENDATION_LIMIT);

        Ok(Recommendations {
            favorite_tags,
            recommended_recipes,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::domain::{common::fakes::fake_service, recipe::entities::sample_recipe};

    #[tokio::test]
    async fn user_without_high_ratings_gets_nothing() {
        let (service, store) = fake_service();
        let identity = store.insert_user("alice", false);
        let recipe = store.insert_recipe(sample_recipe(identity.id(), "Soup", "soup"));
        store.insert_rating(identity.id(), recipe.id, 3.0);

        let recommendations = service.get_recommendations(identity).await.unwrap();

        assert_eq!(recommendations, Recommendations::default());
    }

    #[tokio::test]
    async fn recommends_unrated_recipes_with_favorite_tags() {
        let (service, store) = fake_service();
        let identity = store.insert_user("alice", false);
        let author = store.insert_user("bob", false);

        let base = Utc::now() - Duration::days(1);
        let insert = |name: &str, tags: &str, minutes: i64| {
            let mut recipe = sample_recipe(author.id(), name, tags);
            recipe.created_at = base + Duration::minutes(minutes);
            store.insert_recipe(recipe)
        };

        let loved = insert("Green curry", "Thai, curry", 0);
        let disliked = insert("Tom yum", "thai, soup", 1);
        let candidate_old = insert("Pad thai", "thai, noodles", 2);
        let candidate_new = insert("Massaman", "curry, thai", 3);
        let unrelated = insert("Brownies", "dessert", 4);
        let substring_only = insert("Thai-ish", "thailand", 5);

        store.insert_rating(identity.id(), loved.id, 5.0);
        store.insert_rating(identity.id(), disliked.id, 2.0);

        let recommendations = service.get_recommendations(identity).await.unwrap();

        assert_eq!(recommendations.favorite_tags, vec!["thai", "curry"]);
        let ids: Vec<_> = recommendations
            .recommended_recipes
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![candidate_new.id, candidate_old.id]);
        assert!(!ids.contains(&disliked.id));
        assert!(!ids.contains(&unrelated.id));
        assert!(!ids.contains(&substring_only.id));
    }
}
