use std::collections::BTreeMap;

use chrono::Utc;
use tokio::sync::RwLock;

use super::TodoStore;
use crate::error::ServerError;
use crate::models::{CreateTodo, Todo, UpdateTodo};

/// In-process store. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    todos: BTreeMap<i64, Todo>,
}

impl TodoStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Todo>, ServerError> {
        let inner = self.inner.read().await;
        Ok(inner.todos.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Todo>, ServerError> {
        Ok(self.inner.read().await.todos.get(&id).cloned())
    }

    async fn insert(&self, input: CreateTodo) -> Result<Todo, ServerError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let todo = Todo {
            id: inner.last_id,
            title: input.title,
            description: input.description,
            is_completed: false,
            created_at: Utc::now(),
        };
        inner.todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: i64, input: UpdateTodo) -> Result<Option<Todo>, ServerError> {
        let mut inner = self.inner.write().await;
        let Some(todo) = inner.todos.get_mut(&id) else {
            return Ok(None);
        };
        todo.title = input.title;
        todo.description = input.description;
        todo.is_completed = input.is_completed;
        Ok(Some(todo.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServerError> {
        Ok(self.inner.write().await.todos.remove(&id).is_some())
    }
}
