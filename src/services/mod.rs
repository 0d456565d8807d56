// src/services/mod.rs
//
// Services Module - Orchestration Layer
//
// Services build entities from raw input and forward to the repository.
// They never re-check catalog rules.

pub mod library_service;

pub use library_service::{AddBookRequest, LibraryService};
