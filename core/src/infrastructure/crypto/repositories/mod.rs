pub mod argon2_hasher_repository;
