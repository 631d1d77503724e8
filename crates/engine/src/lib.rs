//! The board engine: the library-level contract a presentation layer
//! consumes.
//!
//! Components are constructed with an injected [`store::BoardStore`] handle
//! (`PgStore` in production, `MemoryStore` in tests) and expose awaitable
//! request/response calls only: no background work, no caching between
//! calls, no retries. A typical render pass asks the [`sprints::SprintPlanner`]
//! which sprint is active, fetches tasks through the [`tasks::TaskStore`],
//! narrows them with a [`filter::TaskFilter`], and partitions the result
//! into columns with [`board::group_by_column`].

pub mod backlog;
pub mod board;
pub mod error;
pub mod filter;
pub mod sprints;
pub mod store;
pub mod tasks;

pub use backlog::BacklogManager;
pub use board::{group_by_column, BoardColumn};
pub use error::EngineError;
pub use filter::TaskFilter;
pub use sprints::{select_active, NewSprint, SprintEdit, SprintPlanner};
pub use store::{BoardStore, MemoryStore, PgStore};
pub use tasks::{NewTask, TaskEdit, TaskStore};
