use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    meal::{
        entities::Meal,
        value_objects::{LogMealInput, MealEntry, MealLog},
    },
};

pub trait MealService: Send + Sync {
    fn log_meal(
        &self,
        identity: Identity,
        input: LogMealInput,
    ) -> impl Future<Output = Result<MealEntry, CoreError>> + Send;

    fn get_meal_log(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<MealLog, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MealRepository: Send + Sync {
    fn create_meal(&self, meal: Meal) -> impl Future<Output = Result<Meal, CoreError>> + Send;

    /// Meals of a user with their recipe, newest first.
    fn get_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<MealEntry>, CoreError>> + Send;
}
