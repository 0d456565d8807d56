// src/application/report.rs
//
// Plain-text export of everyone who currently holds books

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{Local, NaiveDateTime};

use crate::domain::UserWithBooks;
use crate::error::AppResult;

pub const REPORT_TITLE: &str = "SmartBook - Borrowed Books Report";

/// Render the report body: header, then one block per user
pub fn write_report<W: Write>(
    out: &mut W,
    entries: &[UserWithBooks],
    generated_at: NaiveDateTime,
) -> AppResult<()> {
    writeln!(out, "{}", REPORT_TITLE)?;
    writeln!(out, "Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out)?;

    for entry in entries {
        writeln!(out, "{}", entry)?;
        writeln!(out)?;
    }

    Ok(())
}

/// Overwrite `path` with a fresh report stamped with the local time
pub fn export_report(path: &Path, entries: &[UserWithBooks]) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    write_report(&mut writer, entries, Local::now().naive_local())?;
    writer.flush()?;

    log::info!(
        "Exported {} user(s) with borrowed books to {}",
        entries.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Book, User};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_entries() -> (User, Vec<UserWithBooks>) {
        let alice = User::new("Alice");
        let entries = vec![UserWithBooks::new(
            &alice,
            vec![Book::new("Dune", "Herbert", "ISBN1", "SciFi")],
        )];
        (alice, entries)
    }

    #[test]
    fn test_report_layout() {
        let (alice, entries) = sample_entries();
        let generated_at = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let mut out = Vec::new();

        write_report(&mut out, &entries, generated_at).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(REPORT_TITLE));
        assert_eq!(lines.next(), Some("Generated: 2024-03-15 09:30:00"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("User: Alice"));
        assert!(text.contains(&format!("Id: {}", alice.id)));
        assert!(text.contains("|- 'Dune' by Herbert (ISBN: ISBN1)"));
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports").join("report.txt");
        let (_, entries) = sample_entries();

        export_report(&path, &entries).unwrap();
        export_report(&path, &[]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with(REPORT_TITLE));
        assert!(!text.contains("User: Alice"));
    }
}
