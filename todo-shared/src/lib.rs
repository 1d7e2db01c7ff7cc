//! Shared types for the todo app.
//!
//! This crate compiles for both the server and the browser:
//! - domain types and the REST contract used by both sides
//! - the page markers the server and the build helper agree on
//! - the new-todo form state and its submission hook
//! - the client store, reducer and routes driven by the frontend
//! - with the `web` feature, an HTTP client for the todo API

pub mod api;
pub mod date;
pub mod form;
pub mod page;
pub mod route;
pub mod store;
pub mod todo;

#[cfg(feature = "web")]
pub mod client;

// Re-export for convenience
pub use api::ApiError;
pub use date::{Clock, DueDate, FixedClock, SystemClock};
pub use form::{NewTodoForm, TodoDispatch};
pub use route::{History, Route};
pub use store::{Action, TodoListState};
pub use todo::{Todo, TodoDraft, TodoId};
