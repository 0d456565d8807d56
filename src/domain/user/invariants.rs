use super::entity::User;
use crate::domain::{DomainError, DomainResult, Validate};

/// Longest accepted name, counted in characters
pub const MAX_NAME_LENGTH: usize = 50;

/// Characters a name may never contain
pub const RESTRICTED_NAME_CHARS: [char; 12] =
    ['@', '#', '$', '%', '^', '&', '*', '!', '¤', '/', '=', '?'];

/// Validates all User invariants
/// Rules run in a fixed order and the first failure determines the reason
pub fn validate_user(user: &User) -> DomainResult<()> {
    let name = user.name.as_str();

    if name.trim().is_empty() {
        return Err(invalid("Name is required."));
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(invalid(&format!(
            "Name exceeds the maximum length of {} characters.",
            MAX_NAME_LENGTH
        )));
    }

    if name.contains(RESTRICTED_NAME_CHARS) {
        return Err(invalid("Name contains inappropriate characters."));
    }

    if name.chars().any(|c| c.is_ascii_digit()) {
        return Err(invalid("Name cannot contain numeric digits."));
    }

    if name.starts_with(' ') || name.ends_with(' ') {
        return Err(invalid("Name cannot start or end with a space."));
    }

    Ok(())
}

fn invalid(reason: &str) -> DomainError {
    DomainError::InvalidUser(reason.to_string())
}

impl Validate for User {
    fn validate(&self) -> DomainResult<()> {
        validate_user(self)
    }
}

/// User Invariants:
///
/// 1. Id is generated at creation and never changes
/// 2. Id is unique in the catalog
/// 3. Name is 1..=50 characters, no digits, no restricted characters
/// 4. Name has no leading or trailing space
