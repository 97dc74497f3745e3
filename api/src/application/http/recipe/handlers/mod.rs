pub mod create_recipe;
pub mod get_home;
pub mod get_recipe;
pub mod quick_search;
pub mod search_recipes;
pub mod share_recipe;
pub mod update_recipe;
