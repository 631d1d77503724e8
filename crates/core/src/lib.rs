//! Domain types and pure logic for the sprint board engine.
//!
//! This crate holds everything that does not touch a database: ID and
//! timestamp aliases, the error taxonomy, field validation rules, the
//! column-set state machine, task priorities, and the sprint numbering
//! policy. Persistence lives in `sprintboard-db`; the operations a
//! presentation layer calls live in `sprintboard-engine`.

pub mod column;
pub mod error;
pub mod priority;
pub mod sprint;
pub mod types;
pub mod validation;
