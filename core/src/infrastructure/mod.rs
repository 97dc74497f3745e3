pub mod crypto;
pub mod db;
pub mod health;
pub mod jwt;
pub mod meal;
pub mod rating;
pub mod recipe;
pub mod session;
pub mod user;
