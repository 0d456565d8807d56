// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - The repository is the only owner of catalog state
// - Collection-level invariants (uniqueness, existence, borrow ownership)
//   are enforced here and nowhere else
// - Every successful mutation is written through before returning
// - Callers only ever receive copies

pub mod library_repository;


pub use library_repository::{InMemoryLibraryRepository, LibraryRepository};

#[cfg(test)]
pub use library_repository::MockLibraryRepository;
