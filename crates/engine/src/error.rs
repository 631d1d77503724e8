//! Engine failure surface.
//!
//! Wraps the two lower taxonomies without collapsing them: callers match on
//! `Core(Validation)` for inline field errors, `Core(NotFound)` for "item
//! was deleted elsewhere", and `Store` for "try again later".

use sprintboard_core::error::CoreError;
use sprintboard_db::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EngineError {
    /// Convenience for the common not-found construction.
    pub(crate) fn not_found(entity: &'static str, id: sprintboard_core::types::DbId) -> Self {
        Self::Core(CoreError::NotFound { entity, id })
    }
}
