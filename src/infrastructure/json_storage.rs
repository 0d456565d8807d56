// src/infrastructure/json_storage.rs
//
// JSON File Storage
//
// RULES:
// - Two independent documents: books.json and users.json
// - Every save rewrites the whole document (no append mode)
// - Saves go through a sibling temp file + rename, so a reader never sees
//   a half-written document
// - A missing document loads as an empty list; a malformed one is an error

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

#[cfg(test)]
use mockall::automock;

use crate::domain::{Book, User};
use crate::error::AppResult;

pub const BOOKS_FILE: &str = "books.json";
pub const USERS_FILE: &str = "users.json";

/// Persistence gateway for the catalog collections
#[cfg_attr(test, automock)]
pub trait CatalogStorage {
    fn load_books(&self) -> AppResult<Vec<Book>>;
    fn load_users(&self) -> AppResult<Vec<User>>;
    fn save_books(&self, books: &[Book]) -> AppResult<()>;
    fn save_users(&self, users: &[User]) -> AppResult<()>;
}

/// Stores the catalog as pretty-printed JSON arrays inside `data_dir`
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    data_dir: PathBuf,
}

impl JsonFileStorage {
    /// Bind storage to a directory
    /// The directory is created on the first save, not here
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn books_path(&self) -> PathBuf {
        self.data_dir.join(BOOKS_FILE)
    }

    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join(USERS_FILE)
    }

    fn load_document<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("{} does not exist yet, starting empty", path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let items: Vec<T> = serde_json::from_str(&json)?;
        log::debug!("Loaded {} record(s) from {}", items.len(), path.display());
        Ok(items)
    }

    fn save_document<T: Serialize>(&self, path: &Path, items: &[T]) -> AppResult<()> {
        fs::create_dir_all(&self.data_dir)?;

        let json = serde_json::to_string_pretty(items)?;

        let mut tmp_name = path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        let written = File::create(&tmp_path)
            .and_then(|mut file| -> io::Result<()> {
                file.write_all(json.as_bytes())?;
                file.sync_all()
            })
            .and_then(|()| fs::rename(&tmp_path, path));

        // The target is untouched on any failure; only the temp file can linger
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        log::debug!("Wrote {} record(s) to {}", items.len(), path.display());
        Ok(())
    }
}

impl CatalogStorage for JsonFileStorage {
    fn load_books(&self) -> AppResult<Vec<Book>> {
        Self::load_document(&self.books_path())
    }

    fn load_users(&self) -> AppResult<Vec<User>> {
        Self::load_document(&self.users_path())
    }

    fn save_books(&self, books: &[Book]) -> AppResult<()> {
        self.save_document(&self.books_path(), books)
    }

    fn save_users(&self, users: &[User]) -> AppResult<()> {
        self.save_document(&self.users_path(), users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use tempfile::TempDir;

    #[test]
    fn test_missing_files_load_empty() {
        let dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(dir.path());

        assert!(storage.load_books().unwrap().is_empty());
        assert!(storage.load_users().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_books() {
        let dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(dir.path());
        let books = vec![
            Book::new("Dune", "Herbert", "ISBN1", "SciFi"),
            Book::new("Emma", "Austen", "ISBN2", "Classic"),
        ];

        storage.save_books(&books).unwrap();

        assert_eq!(storage.load_books().unwrap(), books);
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("catalog").join("data");
        let storage = JsonFileStorage::new(&nested);

        storage.save_users(&[User::new("Alice")]).unwrap();

        assert!(nested.join(USERS_FILE).exists());
    }

    #[test]
    fn test_saved_document_is_indented_with_stable_names() {
        let dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(dir.path());
        let user = User::new("Alice");

        storage.save_users(&[user.clone()]).unwrap();

        let raw = fs::read_to_string(storage.users_path()).unwrap();
        assert!(raw.starts_with("[\n"));
        assert!(raw.contains("\"Name\": \"Alice\""));
        assert!(raw.contains(&format!("\"Id\": \"{}\"", user.id)));
    }

    #[test]
    fn test_save_overwrites_and_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(dir.path());

        storage
            .save_books(&[Book::new("Dune", "Herbert", "ISBN1", "SciFi")])
            .unwrap();
        storage.save_books(&[]).unwrap();

        assert!(storage.load_books().unwrap().is_empty());
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_failed_save_removes_temp_file() {
        let dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(dir.path());
        // A non-empty directory where books.json belongs makes the rename fail
        fs::create_dir(storage.books_path()).unwrap();
        fs::write(storage.books_path().join("keep"), "x").unwrap();

        let result = storage.save_books(&[Book::new("Dune", "Herbert", "ISBN1", "SciFi")]);

        assert!(matches!(result, Err(AppError::Io(_))));
        assert!(!dir.path().join("books.json.tmp").exists());
        assert!(storage.books_path().join("keep").exists());
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        let dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(dir.path());
        fs::write(storage.books_path(), "{ not json").unwrap();

        let result = storage.load_books();
        assert!(matches!(result, Err(AppError::Serialization(_))));
    }

    #[test]
    fn test_reads_documents_written_by_hand() {
        let dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(dir.path());
        fs::write(
            storage.users_path(),
            r#"[{ "Id": "550e8400-e29b-41d4-a716-446655440000", "Name": "Alice" }]"#,
        )
        .unwrap();

        let users = storage.load_users().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Alice");
    }
}
