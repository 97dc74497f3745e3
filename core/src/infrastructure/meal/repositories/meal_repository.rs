use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        meal::{entities::Meal, ports::MealRepository, value_objects::MealEntry},
    },
    entity::{
        meals::{ActiveModel, Column, Entity},
        recipes,
    },
    infrastructure::meal::mappers::map_meal_entries,
};

#[derive(Debug, Clone)]
pub struct PostgresMealRepository {
    pub db: DatabaseConnection,
}

impl PostgresMealRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl MealRepository for PostgresMealRepository {
    async fn create_meal(&self, meal: Meal) -> Result<Meal, CoreError> {
        let active_model = ActiveModel {
            id: Set(meal.id),
            user_id: Set(meal.user_id),
            recipe_id: Set(meal.recipe_id),
            logged_at: Set(meal.logged_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to log meal: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Meal::from(created))
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<MealEntry>, CoreError> {
        let rows = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::LoggedAt)
            .find_also_related(recipes::Entity)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get meals: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(map_meal_entries(rows))
    }
}
