//! egui pages, one per route.
//!
//! Pages draw from borrowed state and report clicks as intents; only the new
//! todo page writes, through the form it is given.

pub mod new_todo;
pub mod todo_detail;
pub mod todo_list;

pub use new_todo::NewTodoIntent;
pub use todo_detail::DetailIntent;
pub use todo_list::ListIntent;
