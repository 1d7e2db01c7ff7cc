//! In-memory todo storage.

use std::collections::BTreeMap;
use std::sync::Arc;

use todo_shared::{Todo, TodoDraft, TodoId};
use tokio::sync::RwLock;

/// Shared handle to the todo table. Cloning shares the same table.
#[derive(Debug, Clone, Default)]
pub struct TodoRepository {
    inner: Arc<RwLock<Table>>,
}

#[derive(Debug)]
struct Table {
    todos: BTreeMap<TodoId, Todo>,
    next_id: u64,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            todos: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl TodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// All todos, ordered by id.
    pub async fn list(&self) -> Vec<Todo> {
        self.inner.read().await.todos.values().cloned().collect()
    }

    pub async fn get(&self, id: TodoId) -> Option<Todo> {
        self.inner.read().await.todos.get(&id).cloned()
    }

    /// Store a draft under the next free id.
    pub async fn insert(&self, draft: TodoDraft) -> Todo {
        let mut table = self.inner.write().await;
        let id = TodoId(table.next_id);
        table.next_id += 1;
        let todo = draft.into_todo(id);
        table.todos.insert(id, todo.clone());
        todo
    }

    /// Flip `done`, returning the updated todo.
    pub async fn toggle(&self, id: TodoId) -> Option<Todo> {
        let mut table = self.inner.write().await;
        let todo = table.todos.get_mut(&id)?;
        todo.done = !todo.done;
        Some(todo.clone())
    }

    /// Returns false if there was nothing to remove.
    pub async fn remove(&self, id: TodoId) -> bool {
        self.inner.write().await.todos.remove(&id).is_some()
    }
}
