pub mod entity;
pub mod invariants;
pub mod isbn;

pub use entity::Book;
pub use invariants::{validate_book, validate_borrow_state};
pub use isbn::{contains_ignore_case, isbn_matches};
