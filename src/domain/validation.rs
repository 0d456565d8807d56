use crate::domain::DomainResult;

/// Field-level validation shared by catalog entities.
///
/// `validate` reports the first failing rule; rules are evaluated in a
/// fixed order per entity so the reason is deterministic.
pub trait Validate {
    fn validate(&self) -> DomainResult<()>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
