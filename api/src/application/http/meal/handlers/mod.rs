pub mod get_meal_log;
pub mod log_meal;
