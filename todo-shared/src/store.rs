//! Client-side todo state and the actions that change it.
//!
//! The frontend never edits [`TodoListState`] directly: results coming back
//! from the server are turned into [`Action`]s and folded in with
//! [`TodoListState::reduce`].

use serde::{Deserialize, Serialize};

use crate::todo::{Todo, TodoId};

/// Everything the todo pages render from.
///
/// The server also sends this as the page's initial state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoListState {
    pub todos: Vec<Todo>,
    pub selected_todo: Option<Todo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the whole list.
    SetTodos(Vec<Todo>),
    /// Show one todo on the detail page.
    SelectTodo(Todo),
    ClearSelection,
    /// A todo was created.
    AddTodo(Todo),
    ToggleDone(TodoId),
    /// The server's copy of a todo, replacing ours in the list and selection.
    UpdateTodo(Todo),
    DeleteTodo(TodoId),
}

impl TodoListState {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self {
            todos,
            selected_todo: None,
        }
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Apply one action. Actions naming an unknown id change nothing.
    pub fn reduce(&mut self, action: Action) {
        log::debug!("reduce {action:?}");
        match action {
            Action::SetTodos(todos) => self.todos = todos,
            Action::SelectTodo(todo) => self.selected_todo = Some(todo),
            Action::ClearSelection => self.selected_todo = None,
            Action::AddTodo(todo) => self.todos.push(todo),
            Action::ToggleDone(id) => {
                if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
                    todo.done = !todo.done;
                }
                if let Some(selected) = self.selected_todo.as_mut().filter(|t| t.id == id) {
                    selected.done = !selected.done;
                }
            }
            Action::UpdateTodo(todo) => {
                if let Some(selected) = self.selected_todo.as_mut().filter(|t| t.id == todo.id) {
                    *selected = todo.clone();
                }
                if let Some(listed) = self.todos.iter_mut().find(|t| t.id == todo.id) {
                    *listed = todo;
                }
            }
            Action::DeleteTodo(id) => {
                self.todos.retain(|todo| todo.id != id);
                if self.selected_todo.as_ref().is_some_and(|t| t.id == id) {
                    self.selected_todo = None;
                }
            }
        }
    }
}
