// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod book;
pub mod borrowing;
pub mod user;
pub mod validation;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Book Domain
pub use book::{contains_ignore_case, isbn_matches, validate_book, Book};

// User Domain
pub use user::{validate_user, User, MAX_NAME_LENGTH, RESTRICTED_NAME_CHARS};

// Borrowing (Derived Data)
pub use borrowing::{BorrowTransition, UserWithBooks};

// Validation capability
pub use validation::Validate;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;
use uuid::Uuid;

/// Domain-level errors
/// These represent violations of catalog rules and entity invariants
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("The book is invalid. {0}")]
    InvalidBook(String),

    #[error("The user name is invalid. {0}")]
    InvalidUser(String),

    #[error("A book with ISBN '{0}' already exists")]
    DuplicateIsbn(String),

    #[error("User '{name}' with ID '{id}' already exists")]
    UserAlreadyExists { id: Uuid, name: String },

    #[error("Book with ISBN '{0}' not found")]
    BookNotFound(String),

    #[error("User with ID '{0}' not found")]
    UserNotFound(Uuid),

    #[error("Book with ISBN '{0}' is borrowed")]
    BookIsBorrowed(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
