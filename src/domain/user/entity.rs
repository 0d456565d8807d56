use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A library member who can borrow books
/// Users are never renamed and never removed once added
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Internal immutable identifier
    #[serde(rename = "Id")]
    pub id: Uuid,

    #[serde(rename = "Name")]
    pub name: String,
}

impl User {
    /// Create a new User with a fresh identifier
    /// Name validation happens when the user is added to the catalog
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Id: {})", self.name, self.id)
    }
}
