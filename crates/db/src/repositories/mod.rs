//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod project_repo;
pub mod sprint_repo;
pub mod task_repo;

pub use project_repo::ProjectRepo;
pub use sprint_repo::SprintRepo;
pub use task_repo::TaskRepo;
