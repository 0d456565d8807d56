// src/domain/borrowing.rs
//
// Borrowing - Derived Data
//
// Nothing here is persisted. UserWithBooks is rebuilt from the book list on
// every request and BorrowTransition only reports what a status update did.

use uuid::Uuid;

use crate::domain::{Book, User};

/// Outcome of toggling a book's borrow state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowTransition {
    Borrowed,
    Returned,
}

/// Read-only view of a user together with the books they currently hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWithBooks {
    pub user_id: Uuid,
    pub user_name: String,
    /// Ordered by title
    pub borrowed_books: Vec<Book>,
}

impl UserWithBooks {
    pub fn new(user: &User, borrowed_books: Vec<Book>) -> Self {
        Self {
            user_id: user.id,
            user_name: user.name.clone(),
            borrowed_books,
        }
    }
}

impl std::fmt::Display for BorrowTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BorrowTransition::Borrowed => write!(f, "borrowed"),
            BorrowTransition::Returned => write!(f, "returned"),
        }
    }
}

impl std::fmt::Display for UserWithBooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "User: {}", self.user_name)?;
        writeln!(f, "  Id: {}", self.user_id)?;
        if self.borrowed_books.is_empty() {
            write!(f, "Books: No borrowed books.")
        } else {
            write!(f, "Books:")?;
            for book in &self.borrowed_books {
                write!(f, "\n|- {}", book)?;
            }
            Ok(())
        }
    }
}
