// src/services/library_service.rs
use crate::domain::{Book, BorrowTransition, User, UserWithBooks};
use crate::error::{AppError, AppResult};
use crate::repositories::LibraryRepository;
use uuid::Uuid;

/// Raw input for a new catalog entry
#[derive(Debug, Clone)]
pub struct AddBookRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
}

/// Entry point for every catalog operation
///
/// Builds entities from raw input and hands them to the repository, which
/// owns all validation and catalog rules. Nothing is checked twice.
pub struct LibraryService {
    repository: Box<dyn LibraryRepository>,
}

impl LibraryService {
    pub fn new(repository: Box<dyn LibraryRepository>) -> Self {
        Self { repository }
    }

    pub fn add_book(&mut self, request: AddBookRequest) -> AppResult<Book> {
        let book = Book::new(
            request.title,
            request.author,
            request.isbn,
            request.category,
        );

        self.repository
            .add_book(book.clone())
            .inspect_err(|e| log_rejection("add book", e))?;

        log::info!("Added book '{}' (ISBN {})", book.title, book.isbn);
        Ok(book)
    }

    pub fn remove_book(&mut self, isbn: &str) -> AppResult<()> {
        self.repository
            .remove_book(isbn)
            .inspect_err(|e| log_rejection("remove book", e))?;

        log::info!("Removed book with ISBN {}", isbn);
        Ok(())
    }

    pub fn get_book_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        self.repository.get_book_by_isbn(isbn)
    }

    pub fn get_all_books(&self) -> AppResult<Vec<Book>> {
        self.repository.get_all_books()
    }

    pub fn search_books(&self, term: &str) -> AppResult<Vec<Book>> {
        self.repository.search_books(term)
    }

    /// Borrow an available book, or return one held by `user_id`
    pub fn update_book_status(&mut self, isbn: &str, user_id: Uuid) -> AppResult<BorrowTransition> {
        let transition = self
            .repository
            .update_book_status(isbn, user_id)
            .inspect_err(|e| log_rejection("update book status", e))?;

        log::info!("Book {} {} by user {}", isbn, transition, user_id);
        Ok(transition)
    }

    pub fn add_user(&mut self, name: &str) -> AppResult<User> {
        let user = User::new(name);

        self.repository
            .add_user(user.clone())
            .inspect_err(|e| log_rejection("add user", e))?;

        log::info!("Added user '{}' ({})", user.name, user.id);
        Ok(user)
    }

    pub fn get_all_users(&self) -> AppResult<Vec<User>> {
        self.repository.get_all_users()
    }

    pub fn get_user_by_id(&self, user_id: Uuid) -> AppResult<User> {
        self.repository.get_user_by_id(user_id)
    }

    pub fn get_books_by_user_id(&self, user_id: Uuid) -> AppResult<Vec<Book>> {
        self.repository.get_books_by_user_id(user_id)
    }

    pub fn get_all_users_with_borrowed_books(&self) -> AppResult<Vec<UserWithBooks>> {
        self.repository.get_all_users_with_books()
    }
}

/// Storage failures are logged at the repository; only rule violations here
fn log_rejection(operation: &str, error: &AppError) {
    if let Some(domain_error) = error.as_domain() {
        log::warn!("Rejected {}: {}", operation, domain_error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::repositories::MockLibraryRepository;

    fn dune_request() -> AddBookRequest {
        AddBookRequest {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            isbn: "ISBN1".to_string(),
            category: "SciFi".to_string(),
        }
    }

    #[test]
    fn test_add_book_builds_available_book_and_forwards() {
        let mut repo = MockLibraryRepository::new();
        repo.expect_add_book()
            .withf(|book: &Book| {
                book.title == "Dune"
                    && book.author == "Herbert"
                    && book.isbn == "ISBN1"
                    && book.category == "SciFi"
                    && !book.is_borrowed()
            })
            .times(1)
            .returning(|_| Ok(()));
        let mut service = LibraryService::new(Box::new(repo));

        let book = service.add_book(dune_request()).unwrap();

        assert_eq!(book, Book::new("Dune", "Herbert", "ISBN1", "SciFi"));
    }

    #[test]
    fn test_add_book_passes_repository_error_through() {
        let mut repo = MockLibraryRepository::new();
        repo.expect_add_book()
            .returning(|book| Err(DomainError::DuplicateIsbn(book.isbn).into()));
        let mut service = LibraryService::new(Box::new(repo));

        let result = service.add_book(dune_request());

        match result {
            Err(AppError::Domain(DomainError::DuplicateIsbn(isbn))) => assert_eq!(isbn, "ISBN1"),
            other => panic!("Expected DuplicateIsbn, got {:?}", other),
        }
    }

    #[test]
    fn test_add_user_creates_fresh_user() {
        let mut repo = MockLibraryRepository::new();
        repo.expect_add_user()
            .withf(|user: &User| user.name == "Alice")
            .times(1)
            .returning(|_| Ok(()));
        let mut service = LibraryService::new(Box::new(repo));

        let user = service.add_user("Alice").unwrap();

        assert_eq!(user.name, "Alice");
        assert!(!user.id.is_nil());
    }

    #[test]
    fn test_update_book_status_forwards_arguments() {
        let user_id = Uuid::new_v4();
        let mut repo = MockLibraryRepository::new();
        repo.expect_update_book_status()
            .withf(move |isbn: &str, id: &Uuid| isbn == "ISBN1" && *id == user_id)
            .times(1)
            .returning(|_, _| Ok(BorrowTransition::Borrowed));
        let mut service = LibraryService::new(Box::new(repo));

        let transition = service.update_book_status("ISBN1", user_id).unwrap();

        assert_eq!(transition, BorrowTransition::Borrowed);
    }

    #[test]
    fn test_remove_book_propagates_borrowed_error() {
        let mut repo = MockLibraryRepository::new();
        repo.expect_remove_book()
            .withf(|isbn: &str| isbn == "ISBN1")
            .returning(|isbn| Err(DomainError::BookIsBorrowed(isbn.to_string()).into()));
        let mut service = LibraryService::new(Box::new(repo));

        let result = service.remove_book("ISBN1");

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::BookIsBorrowed(_)))
        ));
    }

    #[test]
    fn test_queries_forward_to_repository() {
        let alice = User::new("Alice");
        let alice_id = alice.id;
        let dune = Book::new("Dune", "Herbert", "ISBN1", "SciFi");

        let mut repo = MockLibraryRepository::new();
        let all = vec![dune.clone()];
        repo.expect_get_all_books()
            .times(1)
            .returning(move || Ok(all.clone()));
        repo.expect_search_books()
            .withf(|term: &str| term == "dune")
            .times(1)
            .returning(|_| Ok(Vec::new()));
        let user = alice.clone();
        repo.expect_get_user_by_id()
            .withf(move |id: &Uuid| *id == alice_id)
            .times(1)
            .returning(move |_| Ok(user.clone()));
        repo.expect_get_all_users_with_books()
            .times(1)
            .returning(|| Ok(Vec::new()));
        let service = LibraryService::new(Box::new(repo));

        assert_eq!(service.get_all_books().unwrap(), vec![dune]);
        assert!(service.search_books("dune").unwrap().is_empty());
        assert_eq!(service.get_user_by_id(alice_id).unwrap(), alice);
        assert!(service
            .get_all_users_with_borrowed_books()
            .unwrap()
            .is_empty());
    }
}
