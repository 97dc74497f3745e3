pub mod get_my_rating;
pub mod rate_recipe;
