//! Persistence failure class.
//!
//! Connectivity, transaction, and constraint failures are not locally
//! recoverable; they propagate to the caller unmodified, distinct from
//! validation and not-found failures (which live in `sprintboard-core`).

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A named unique constraint was violated. Raised directly by in-memory
    /// store implementations; PostgreSQL reports the same condition through
    /// `Database` and is unwrapped by [`StoreError::unique_constraint`].
    #[error("Unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },
}

impl StoreError {
    /// The name of the violated unique constraint, if this failure is one.
    ///
    /// Constraint names follow the `uq_` prefix convention, so callers can
    /// render e.g. the sprint-number race (`uq_sprints_project_number`)
    /// distinctly from a connectivity failure.
    pub fn unique_constraint(&self) -> Option<&str> {
        match self {
            Self::UniqueViolation { constraint } => Some(constraint),
            Self::Database(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                db.constraint()
            }
            _ => None,
        }
    }
}
