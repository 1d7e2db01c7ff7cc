//! Client-side routes of the single-page app.

use std::fmt;

use crate::todo::TodoId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    TodoList,
    TodoDetail(TodoId),
    NewTodo,
    NotFound(String),
}

impl Route {
    /// Match a path. `/` goes to the list.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let mut segments = trimmed.split('/').skip(1);
        match (segments.next(), segments.next(), segments.next()) {
            (None, ..) | (Some(""), None, _) => Route::TodoList,
            (Some("todos"), None, _) => Route::TodoList,
            (Some("todos"), Some(id), None) => match id.parse() {
                Ok(id) => Route::TodoDetail(id),
                Err(_) => Route::NotFound(path.to_string()),
            },
            (Some("new-todo"), None, _) => Route::NewTodo,
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::TodoList => "/todos".to_string(),
            Route::TodoDetail(id) => format!("/todos/{id}"),
            Route::NewTodo => "/new-todo".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Navigation stack. Always holds at least one route.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Route>,
}

impl History {
    pub fn new(start: Route) -> Self {
        Self {
            entries: vec![start],
        }
    }

    pub fn current(&self) -> &Route {
        // `entries` is never empty
        &self.entries[self.entries.len() - 1]
    }

    pub fn push(&mut self, route: Route) {
        log::debug!("navigate to {route}");
        self.entries.push(route);
    }

    /// Go back one entry. Returns false when already at the first one.
    pub fn back(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Route::TodoList)
    }
}
