pub mod entity;
pub mod invariants;

pub use entity::User;
pub use invariants::{validate_user, MAX_NAME_LENGTH, RESTRICTED_NAME_CHARS};
