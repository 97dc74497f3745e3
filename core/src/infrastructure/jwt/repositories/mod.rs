pub mod keystore_repository;
