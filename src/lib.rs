// src/lib.rs
// SmartBook - Single-user library catalog manager
//
// Architecture:
// - Domain-centric: entities validate themselves, nothing else does
// - Repository owns the catalog: every rule is enforced there, once
// - Write-through: each successful mutation rewrites its JSON document
// - Thin service: builds entities from raw input and forwards
// - Console: the only user-facing surface

// ============================================================================
// CORE
// ============================================================================

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod repositories;
pub mod services;

// ============================================================================
// CONSOLE
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_book,
    validate_user,
    // Book
    Book,
    // Borrowing
    BorrowTransition,
    DomainError,
    DomainResult,
    // User
    User,
    UserWithBooks,
    Validate,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Storage & Repositories
// ============================================================================

pub use infrastructure::{CatalogStorage, JsonFileStorage};
pub use repositories::{InMemoryLibraryRepository, LibraryRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{AddBookRequest, LibraryService};

// ============================================================================
// PUBLIC API - Console
// ============================================================================

pub use application::{LibraryShell, MenuOption};
pub use config::AppConfig;
