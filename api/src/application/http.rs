pub mod authentication;
pub mod health;
pub mod meal;
pub mod rating;
pub mod recipe;
pub mod recommendation;
pub mod server;
pub mod user;
