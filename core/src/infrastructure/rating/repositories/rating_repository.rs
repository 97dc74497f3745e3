use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{Set, Unchanged},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, SqlErr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        rating::{
            entities::Rating,
            ports::RatingRepository,
            value_objects::{RatedRecipe, RecipeReview},
        },
    },
    entity::{
        ratings::{ActiveModel, Column, Entity},
        recipes, users,
    },
    infrastructure::rating::mappers::{map_rated_recipes, map_reviews},
};

#[derive(Debug, Clone)]
pub struct PostgresRatingRepository {
    pub db: DatabaseConnection,
}

impl PostgresRatingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RatingRepository for PostgresRatingRepository {
    async fn create_rating(&self, rating: Rating) -> Result<Rating, CoreError> {
        let active_model = ActiveModel {
            id: Set(rating.id),
            user_id: Set(rating.user_id),
            recipe_id: Set(rating.recipe_id),
            score: Set(rating.score),
            comment: Set(rating.comment),
            rated_at: Set(rating.rated_at.fixed_offset()),
            updated_at: Set(rating.updated_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => CoreError::AlreadyRated,
                _ => {
                    error!("Failed to create rating: {}", e);
                    CoreError::InternalServerError
                }
            })?;

        Ok(Rating::from(created))
    }

    async fn update_rating(&self, rating: Rating) -> Result<Rating, CoreError> {
        let active_model = ActiveModel {
            id: Unchanged(rating.id),
            score: Set(rating.score),
            comment: Set(rating.comment),
            updated_at: Set(rating.updated_at.fixed_offset()),
            ..Default::default()
        };

        let updated = active_model.update(&self.db).await.map_err(|e| {
            error!("Failed to update rating: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Rating::from(updated))
    }

    async fn get_by_user_and_recipe(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
    ) -> Result<Option<Rating>, CoreError> {
        let rating = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::RecipeId.eq(recipe_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get rating: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rating.map(Rating::from))
    }

    async fn get_reviews_by_recipe(&self, recipe_id: Uuid) -> Result<Vec<RecipeReview>, CoreError> {
        let rows = Entity::find()
            .filter(Column::RecipeId.eq(recipe_id))
            .order_by_desc(Column::RatedAt)
            .find_also_related(users::Entity)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe ratings: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(map_reviews(rows))
    }

    async fn get_by_recipes(&self, recipe_ids: Vec<Uuid>) -> Result<Vec<Rating>, CoreError> {
        if recipe_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ratings = Entity::find()
            .filter(Column::RecipeId.is_in(recipe_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ratings by recipes: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ratings.into_iter().map(Rating::from).collect())
    }

    async fn get_by_user_with_recipes(&self, user_id: Uuid) -> Result<Vec<RatedRecipe>, CoreError> {
        let rows = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::RatedAt)
            .find_also_related(recipes::Entity)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user ratings: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(map_rated_recipes(rows))
    }
}
