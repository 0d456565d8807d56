// src/domain/book/isbn.rs
//
// Case-insensitive text matching for the catalog
//
// Every ISBN comparison (add, remove, lookup, search) and every substring
// search goes through these helpers. Folding maps each character to its
// uppercase form, one character to one character, independent of locale.

/// Simple uppercase mapping; characters whose uppercase expands (ß → SS)
/// stay as they are
fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn fold_case(value: &str) -> String {
    value.chars().map(fold_char).collect()
}

/// ISBN equality, ignoring case
pub fn isbn_matches(left: &str, right: &str) -> bool {
    left == right || fold_case(left) == fold_case(right)
}

/// Substring test, ignoring case
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    fold_case(haystack).contains(&fold_case(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isbn_matches_ignores_case() {
        assert!(isbn_matches("isbn-abc", "ISBN-ABC"));
        assert!(isbn_matches("978x", "978X"));
        assert!(!isbn_matches("ISBN1", "ISBN2"));
    }

    #[test]
    fn test_isbn_matches_is_exact_otherwise() {
        assert!(!isbn_matches("ISBN1", "ISBN1 "));
        assert!(!isbn_matches("ISBN1", "ISBN10"));
    }

    #[test]
    fn test_contains_ignore_case_handles_non_ascii() {
        assert!(contains_ignore_case("Ångström Units", "ÅNGSTRÖM"));
        assert!(contains_ignore_case("The Hobbit", "hobb"));
        assert!(!contains_ignore_case("The Hobbit", "dune"));
    }

    #[test]
    fn test_folding_is_one_char_to_one_char() {
        // Final sigma and capital sigma share an uppercase form
        assert!(isbn_matches("ας", "ΑΣ"));
        // Kelvin sign is its own uppercase, distinct from 'K'
        assert!(!isbn_matches("\u{212A}1", "k1"));
        // ß does not expand to SS
        assert!(!isbn_matches("straße", "STRASSE"));
        assert!(contains_ignore_case("Große Werke", "GROßE"));
    }
}
