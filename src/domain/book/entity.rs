use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::BorrowTransition;

/// A catalog entry, keyed by its ISBN
///
/// The borrow pair (`is_borrowed`, `borrowed_by`) is only reachable through
/// accessors. It changes exclusively through `toggle_borrow`, which keeps
/// `borrowed_by` set if and only if the book is borrowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Author")]
    pub author: String,

    /// Opaque, case-insensitive key. Not checked against the ISBN checksum.
    #[serde(rename = "ISBN")]
    pub isbn: String,

    #[serde(rename = "Category")]
    pub category: String,

    #[serde(rename = "IsBorrowed", default)]
    is_borrowed: bool,

    #[serde(rename = "BorrowedBy", default)]
    borrowed_by: Option<Uuid>,
}

impl Book {
    /// Create an available book
    /// Field validation happens when the book is added to the catalog
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            category: category.into(),
            is_borrowed: false,
            borrowed_by: None,
        }
    }

    pub fn is_borrowed(&self) -> bool {
        self.is_borrowed
    }

    pub fn borrowed_by(&self) -> Option<Uuid> {
        self.borrowed_by
    }

    pub fn is_borrowed_by(&self, user_id: Uuid) -> bool {
        self.borrowed_by == Some(user_id)
    }

    /// Flip the borrow state on behalf of `user_id`
    ///
    /// An available book becomes borrowed by `user_id`; a borrowed book
    /// becomes available. The caller is responsible for rejecting a return
    /// by someone other than the borrower.
    pub(crate) fn toggle_borrow(&mut self, user_id: Uuid) -> BorrowTransition {
        if self.is_borrowed {
            self.is_borrowed = false;
            self.borrowed_by = None;
            BorrowTransition::Returned
        } else {
            self.is_borrowed = true;
            self.borrowed_by = Some(user_id);
            BorrowTransition::Borrowed
        }
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' by {} (ISBN: {}). Category: {}. Status: {}",
            self.title,
            self.author,
            self.isbn,
            self.category,
            if self.is_borrowed { "Borrowed" } else { "Available" }
        )
    }
}
