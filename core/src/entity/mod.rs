//! sea-orm table definitions, mirrored by `migrations/`.

pub mod meals;
pub mod ratings;
pub mod recipes;
pub mod sessions;
pub mod users;
