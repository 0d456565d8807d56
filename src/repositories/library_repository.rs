// src/repositories/library_repository.rs
//
// Library catalog persistence

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use crate::domain::book::validate_borrow_state;
use crate::domain::{
    contains_ignore_case, isbn_matches, Book, BorrowTransition, DomainError, User, UserWithBooks,
    Validate,
};
use crate::error::AppResult;
use crate::infrastructure::{CatalogStorage, JsonFileStorage};

#[cfg_attr(test, automock)]
pub trait LibraryRepository {
    fn add_book(&mut self, book: Book) -> AppResult<()>;
    fn remove_book(&mut self, isbn: &str) -> AppResult<()>;
    fn update_book_status(&mut self, isbn: &str, user_id: Uuid) -> AppResult<BorrowTransition>;
    fn get_book_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>>;
    fn search_books(&self, term: &str) -> AppResult<Vec<Book>>;
    fn get_all_books(&self) -> AppResult<Vec<Book>>;
    fn add_user(&mut self, user: User) -> AppResult<()>;
    fn get_all_users(&self) -> AppResult<Vec<User>>;
    fn get_user_by_id(&self, id: Uuid) -> AppResult<User>;
    fn get_books_by_user_id(&self, id: Uuid) -> AppResult<Vec<Book>>;
    fn get_all_users_with_books(&self) -> AppResult<Vec<UserWithBooks>>;
}

/// Catalog held in memory and written through to storage on every change
///
/// INVARIANTS:
/// - ISBNs are unique (case-insensitive), user ids are unique
/// - Every borrowed book names a known user
/// - A rejected operation never reaches storage
/// - A failed save leaves memory as it was before the call
pub struct InMemoryLibraryRepository {
    storage: Box<dyn CatalogStorage>,
    books: Vec<Book>,
    users: Vec<User>,
}

impl InMemoryLibraryRepository {
    /// Load the catalog once from storage
    pub fn open(storage: Box<dyn CatalogStorage>) -> AppResult<Self> {
        let books = storage.load_books()?;
        let users = storage.load_users()?;

        check_loaded_catalog(&books, &users)?;

        log::debug!(
            "Catalog loaded: {} book(s), {} user(s)",
            books.len(),
            users.len()
        );

        Ok(Self {
            storage,
            books,
            users,
        })
    }

    /// Open the JSON catalog stored in `data_dir`
    pub fn open_dir(data_dir: impl Into<PathBuf>) -> AppResult<Self> {
        Self::open(Box::new(JsonFileStorage::new(data_dir)))
    }

    fn find_book_index(&self, isbn: &str) -> Option<usize> {
        self.books.iter().position(|b| isbn_matches(&b.isbn, isbn))
    }

    fn find_user(&self, id: Uuid) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    fn require_user(&self, id: Uuid) -> AppResult<&User> {
        self.find_user(id)
            .ok_or_else(|| DomainError::UserNotFound(id).into())
    }

    fn persist_books(&self) -> AppResult<()> {
        self.storage.save_books(&self.books).inspect_err(|e| {
            log::error!("Failed to save books: {}", e);
        })
    }

    fn persist_users(&self) -> AppResult<()> {
        self.storage.save_users(&self.users).inspect_err(|e| {
            log::error!("Failed to save users: {}", e);
        })
    }
}

impl LibraryRepository for InMemoryLibraryRepository {
    fn add_book(&mut self, book: Book) -> AppResult<()> {
        book.validate()?;

        if book.is_borrowed() {
            return Err(DomainError::InvalidBook(
                "A new book cannot already be borrowed.".to_string(),
            )
            .into());
        }

        if self.find_book_index(&book.isbn).is_some() {
            return Err(DomainError::DuplicateIsbn(book.isbn).into());
        }

        self.books.push(book);
        if let Err(e) = self.persist_books() {
            self.books.pop();
            return Err(e);
        }

        Ok(())
    }

    fn remove_book(&mut self, isbn: &str) -> AppResult<()> {
        let index = self
            .find_book_index(isbn)
            .ok_or_else(|| DomainError::BookNotFound(isbn.to_string()))?;

        if self.books[index].is_borrowed() {
            return Err(DomainError::BookIsBorrowed(self.books[index].isbn.clone()).into());
        }

        let removed = self.books.remove(index);
        if let Err(e) = self.persist_books() {
            self.books.insert(index, removed);
            return Err(e);
        }

        Ok(())
    }

    fn update_book_status(&mut self, isbn: &str, user_id: Uuid) -> AppResult<BorrowTransition> {
        self.require_user(user_id)?;

        let index = self
            .find_book_index(isbn)
            .ok_or_else(|| DomainError::BookNotFound(isbn.to_string()))?;

        let book = &self.books[index];
        if book.is_borrowed() && !book.is_borrowed_by(user_id) {
            return Err(DomainError::BookIsBorrowed(book.isbn.clone()).into());
        }

        let previous = book.clone();
        let transition = self.books[index].toggle_borrow(user_id);
        if let Err(e) = self.persist_books() {
            self.books[index] = previous;
            return Err(e);
        }

        Ok(transition)
    }

    fn get_book_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        Ok(self.find_book_index(isbn).map(|i| self.books[i].clone()))
    }

    fn search_books(&self, term: &str) -> AppResult<Vec<Book>> {
        if term.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(sorted_by_title(self.books.iter().filter(|b| {
            contains_ignore_case(&b.title, term)
                || contains_ignore_case(&b.author, term)
                || isbn_matches(&b.isbn, term)
        })))
    }

    fn get_all_books(&self) -> AppResult<Vec<Book>> {
        Ok(sorted_by_title(self.books.iter()))
    }

    fn add_user(&mut self, user: User) -> AppResult<()> {
        user.validate()?;

        if self.find_user(user.id).is_some() {
            return Err(DomainError::UserAlreadyExists {
                id: user.id,
                name: user.name,
            }
            .into());
        }

        self.users.push(user);
        if let Err(e) = self.persist_users() {
            self.users.pop();
            return Err(e);
        }

        Ok(())
    }

    fn get_all_users(&self) -> AppResult<Vec<User>> {
        let mut users = self.users.clone();
        users.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(users)
    }

    fn get_user_by_id(&self, id: Uuid) -> AppResult<User> {
        self.require_user(id).cloned()
    }

    fn get_books_by_user_id(&self, id: Uuid) -> AppResult<Vec<Book>> {
        self.require_user(id)?;
        Ok(sorted_by_title(
            self.books.iter().filter(|b| b.is_borrowed_by(id)),
        ))
    }

    fn get_all_users_with_books(&self) -> AppResult<Vec<UserWithBooks>> {
        let mut books_by_user: HashMap<Uuid, Vec<Book>> = HashMap::new();
        for book in sorted_by_title(self.books.iter()) {
            if let Some(user_id) = book.borrowed_by() {
                books_by_user.entry(user_id).or_default().push(book);
            }
        }

        Ok(self
            .get_all_users()?
            .iter()
            .filter_map(|user| {
                books_by_user
                    .remove(&user.id)
                    .map(|books| UserWithBooks::new(user, books))
            })
            .collect())
    }
}

/// Clone and order by title, ordinal comparison; ties keep insertion order
fn sorted_by_title<'a>(books: impl Iterator<Item = &'a Book>) -> Vec<Book> {
    let mut books: Vec<Book> = books.cloned().collect();
    books.sort_by(|a, b| a.title.cmp(&b.title));
    books
}

/// Reject persisted data that breaks catalog invariants
fn check_loaded_catalog(books: &[Book], users: &[User]) -> AppResult<()> {
    let mut user_ids = HashSet::new();
    for user in users {
        if !user_ids.insert(user.id) {
            return Err(DomainError::InvariantViolation(format!(
                "User id {} appears more than once",
                user.id
            ))
            .into());
        }
    }

    for (i, book) in books.iter().enumerate() {
        if books[..i].iter().any(|other| isbn_matches(&other.isbn, &book.isbn)) {
            return Err(DomainError::InvariantViolation(format!(
                "ISBN '{}' appears more than once",
                book.isbn
            ))
            .into());
        }

        validate_borrow_state(book)?;

        if let Some(user_id) = book.borrowed_by() {
            if !user_ids.contains(&user_id) {
                return Err(DomainError::InvariantViolation(format!(
                    "Book '{}' is borrowed by unknown user {}",
                    book.isbn, user_id
                ))
                .into());
            }
        }
    }

    Ok(())
}
