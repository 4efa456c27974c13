//! Store error types
//!
//! Raised while assembling a store. Reads from a built store cannot fail.

use thiserror::Error;

/// Errors that can occur while building or seeding a store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Two records share an identifier
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    /// A record references an entity the store does not hold
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Seed parameters are unusable
    #[error("Invalid seed configuration: {0}")]
    InvalidSeed(String),

    /// A seeded entity failed its own validation
    #[error(transparent)]
    Fund(#[from] domain_fund::FundError),
}

impl StoreError {
    /// Creates a duplicate entry error
    pub fn duplicate(entity: &str, id: impl std::fmt::Display) -> Self {
        StoreError::DuplicateEntry(format!("{} with id '{}' already exists", entity, id))
    }

    /// Creates a foreign key error for `entity` referencing a missing `target`
    pub fn missing_reference(entity: &str, id: impl std::fmt::Display, target: &str, target_id: impl std::fmt::Display) -> Self {
        StoreError::ForeignKeyViolation(format!(
            "{} '{}' references unknown {} '{}'",
            entity, id, target, target_id
        ))
    }

    /// Checks if this error is a referential integrity violation
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            StoreError::DuplicateEntry(_) | StoreError::ForeignKeyViolation(_)
        )
    }
}
