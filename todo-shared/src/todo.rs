use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::date::DueDate;

/// Server-assigned todo identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TodoId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(TodoId)
    }
}

/// A stored todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub content: String,
    pub done: bool,
    pub due_date: DueDate,
}

/// Snapshot of the new-todo form, sent when the user submits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDraft {
    pub title: String,
    pub content: String,
    pub due_date: DueDate,
}

impl TodoDraft {
    /// Turn the draft into a stored todo. New todos start not done.
    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
            content: self.content,
            done: false,
            due_date: self.due_date,
        }
    }
}
