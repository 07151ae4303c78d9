//! # Todo Session
//!
//! Per-browser session state for the to-do application: the lists a visitor
//! owns, their todos, and the one-shot flash messages shown on the next page.
//! Storage is pluggable behind [`SessionStorage`].

pub mod error;
pub mod manager;
pub mod storage;
pub mod structs;

// Re-exports
pub use error::SessionError;
pub use manager::SessionManager;
pub use storage::{FileSessionStorage, MemorySessionStorage, SessionStorage};
pub use structs::{next_id, Flash, SessionState, Todo, TodoList};
