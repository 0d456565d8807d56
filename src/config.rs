// src/config.rs
//
// Runtime configuration
//
// Read once at startup from the process environment (after an optional
// .env file). Every value has a default, so an empty environment is valid.

use std::path::PathBuf;

use crate::error::{AppError, AppResult};

pub const DATA_DIR_VAR: &str = "SMARTBOOK_DATA_DIR";
pub const REPORT_PATH_VAR: &str = "SMARTBOOK_REPORT_PATH";
pub const LOG_VAR: &str = "SMARTBOOK_LOG";

pub const APP_DIR_NAME: &str = "smartbook";
pub const DEFAULT_REPORT_PATH: &str = "report.txt";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding books.json and users.json
    pub data_dir: PathBuf,
    /// Where the borrowed-books report is exported
    pub report_path: PathBuf,
    /// Filter directive for the log subscriber
    pub log_level: String,
}

impl AppConfig {
    /// Load from the process environment
    ///
    /// `.env` is read first if present; real environment variables win.
    pub fn load() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_sources(|key| std::env::var(key).ok(), dirs::data_dir())
    }

    /// Resolve configuration from a variable lookup
    ///
    /// `platform_data_dir` is only consulted when no data directory is set.
    pub fn from_sources(
        lookup: impl Fn(&str) -> Option<String>,
        platform_data_dir: Option<PathBuf>,
    ) -> AppResult<Self> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let data_dir = match read(DATA_DIR_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => platform_data_dir
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or_else(|| {
                    AppError::Other(format!(
                        "Could not determine app data directory; set {}",
                        DATA_DIR_VAR
                    ))
                })?,
        };

        let report_path = read(REPORT_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_PATH));

        let log_level = read(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            data_dir,
            report_path,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_from_empty_environment() {
        let config =
            AppConfig::from_sources(lookup_from(&[]), Some(PathBuf::from("/home/reader/.local/share")))
                .unwrap();

        assert_eq!(
            config.data_dir,
            PathBuf::from("/home/reader/.local/share").join(APP_DIR_NAME)
        );
        assert_eq!(config.report_path, PathBuf::from(DEFAULT_REPORT_PATH));
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let config = AppConfig::from_sources(
            lookup_from(&[
                (DATA_DIR_VAR, "/srv/catalog"),
                (REPORT_PATH_VAR, "/tmp/borrowed.txt"),
                (LOG_VAR, "smartbook=debug"),
            ]),
            None,
        )
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/catalog"));
        assert_eq!(config.report_path, PathBuf::from("/tmp/borrowed.txt"));
        assert_eq!(config.log_level, "smartbook=debug");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = AppConfig::from_sources(
            lookup_from(&[(REPORT_PATH_VAR, "  "), (LOG_VAR, "")]),
            Some(PathBuf::from("/data")),
        )
        .unwrap();

        assert_eq!(config.report_path, PathBuf::from(DEFAULT_REPORT_PATH));
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_missing_data_dir_is_an_error() {
        let result = AppConfig::from_sources(lookup_from(&[]), None);

        match result {
            Err(AppError::Other(message)) => assert!(message.contains(DATA_DIR_VAR)),
            other => panic!("Expected Other error, got {:?}", other),
        }
    }
}
