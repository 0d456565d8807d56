// src/application/error_handling.rs
//
// Error Handling for the Console
//
// ARCHITECTURE:
// - Maps AppError → categorized response shown to the user
// - Rule violations are shown verbatim, they are written for people
// - Storage failures are logged in full and shown with a short summary

use crate::domain::DomainError;
use crate::error::AppError;

/// What the console prints when an operation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Book or user does not exist
    NotFound,

    /// Entity failed its own validation
    Validation,

    /// Request clashes with current catalog state
    Conflict,

    /// Persisted data breaks a catalog invariant
    CorruptData,

    /// Catalog files could not be read or written
    FileSystem,

    /// Anything else
    Internal,
}

impl ErrorResponse {
    pub fn from_app_error(error: &AppError) -> Self {
        match error {
            AppError::Domain(domain_error) => Self::from_domain_error(domain_error),

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);

                Self {
                    error_type: ErrorType::Internal,
                    message: "Catalog data could not be encoded or decoded".to_string(),
                    details: Some(serde_error.to_string()),
                }
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);

                Self {
                    error_type: ErrorType::FileSystem,
                    message: "File system operation failed".to_string(),
                    details: Some(io_error.to_string()),
                }
            }

            AppError::Other(message) => Self {
                error_type: ErrorType::Internal,
                message: message.clone(),
                details: None,
            },
        }
    }

    fn from_domain_error(error: &DomainError) -> Self {
        let error_type = match error {
            DomainError::InvalidBook(_) | DomainError::InvalidUser(_) => ErrorType::Validation,
            DomainError::DuplicateIsbn(_)
            | DomainError::UserAlreadyExists { .. }
            | DomainError::BookIsBorrowed(_) => ErrorType::Conflict,
            DomainError::BookNotFound(_) | DomainError::UserNotFound(_) => ErrorType::NotFound,
            DomainError::InvariantViolation(_) => ErrorType::CorruptData,
        };

        Self {
            error_type,
            message: error.to_string(),
            details: None,
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "Error: {} ({})", self.message, details),
            None => write!(f, "Error: {}", self.message),
        }
    }
}
