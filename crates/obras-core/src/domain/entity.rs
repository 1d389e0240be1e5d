//! Domain Layer - Core Entity Trait
//!
//! Basic contract for all domain entities plus the shared error type.

use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: ?Sized + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Lookup by id found nothing
    #[error("Not found: {kind} {id}")]
    NotFound { kind: &'static str, id: String },

    /// A value rejected at the domain boundary
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Seed snapshot did not match the expected shape
    #[error("Seed data error: {0}")]
    Seed(String),
}

impl DomainError {
    pub fn site_not_found(id: &str) -> Self {
        DomainError::NotFound { kind: "site", id: id.to_string() }
    }

    pub fn task_not_found(id: &str) -> Self {
        DomainError::NotFound { kind: "task", id: id.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = DomainError::task_not_found("1-3");
        assert_eq!(err.to_string(), "Not found: task 1-3");
    }
}
