// src/infrastructure/mod.rs
//
// Infrastructure Layer
//
// Contains implementation details that support the domain
// but are not part of the domain itself.
//
// RULES:
// - Infrastructure serves the domain
// - Infrastructure never dictates domain behavior
// - Infrastructure is replaceable

pub mod json_storage;

pub use json_storage::{CatalogStorage, JsonFileStorage, BOOKS_FILE, USERS_FILE};
