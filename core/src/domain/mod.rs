pub mod authentication;
pub mod common;
pub mod crypto;
pub mod health;
pub mod jwt;
pub mod meal;
pub mod nutrition;
pub mod rating;
pub mod recipe;
pub mod recommendation;
pub mod user;
