//! taskboard - In-Memory Task Tracking Library
//!
//! This library provides the core functionality for the taskboard tool:
//! a single-threaded, in-process store for plain tasks, epics, and the
//! subtasks an epic owns.
//!
//! # Core Concepts
//!
//! - **Tasks**: Units of work with a name, description, and status
//! - **Epics**: Container tasks whose status is derived from their subtasks
//! - **Subtasks**: Tasks owned by exactly one epic
//! - **History**: A bounded record of recently fetched entities
//!
//! # Module Organization
//!
//! - `error`: Error types and result aliases
//! - `model`: Entity definitions and the `TaskEntry` variant set
//! - `sequence`: Identifier allocation
//! - `history`: History tracker trait and default implementation
//! - `store`: The task store owning all three collections

pub mod error;
pub mod history;
pub mod model;
pub mod sequence;
pub mod store;

pub use error::{Error, Result};
