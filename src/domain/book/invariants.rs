use super::entity::Book;
use crate::domain::{DomainError, DomainResult, Validate};

/// Validates the Book text fields
/// Checked in the order Title, Author, ISBN, Category; the first blank one wins
pub fn validate_book(book: &Book) -> DomainResult<()> {
    require_field("Title", &book.title)?;
    require_field("Author", &book.author)?;
    require_field("ISBN", &book.isbn)?;
    require_field("Category", &book.category)?;
    Ok(())
}

/// Field cannot be empty or whitespace only
fn require_field(name: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidBook(format!("{} is required.", name)));
    }
    Ok(())
}

/// Borrow pair must agree: a borrower is recorded iff the book is borrowed
///
/// Only data read back from disk can break this, since the pair is private
/// to the entity.
pub fn validate_borrow_state(book: &Book) -> DomainResult<()> {
    match (book.is_borrowed(), book.borrowed_by()) {
        (true, None) => Err(DomainError::InvariantViolation(format!(
            "Book '{}' is marked as borrowed without a borrower",
            book.isbn
        ))),
        (false, Some(user_id)) => Err(DomainError::InvariantViolation(format!(
            "Book '{}' is available but records borrower {}",
            book.isbn, user_id
        ))),
        _ => Ok(()),
    }
}

impl Validate for Book {
    fn validate(&self) -> DomainResult<()> {
        validate_book(self)
    }
}

/// Book Invariants:
///
/// 1. Title, Author, ISBN and Category are never blank
/// 2. ISBN is unique in the catalog, compared case-insensitively
/// 3. BorrowedBy is present iff IsBorrowed is true
/// 4. BorrowedBy, when present, references an existing user
/// 5. A borrowed book cannot be removed
