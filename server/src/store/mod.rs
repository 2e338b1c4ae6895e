//! Persistence seam for the `todos` table.
//!
//! Handlers are generic over [`TodoStore`] so the same router runs against
//! SQLite in production and an in-process map in tests.

use std::future::Future;

use crate::error::ServerError;
use crate::models::{CreateTodo, Todo, UpdateTodo};

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Storage for todo records.
///
/// Implementations assign `id` and `created_at` on insert and never change
/// them afterwards. `list` returns records in ascending `id` order.
pub trait TodoStore: Send + Sync + 'static {
    fn list(&self) -> impl Future<Output = Result<Vec<Todo>, ServerError>> + Send;

    fn get(&self, id: i64) -> impl Future<Output = Result<Option<Todo>, ServerError>> + Send;

    fn insert(&self, input: CreateTodo) -> impl Future<Output = Result<Todo, ServerError>> + Send;

    /// Returns `None` when no record has this id.
    fn update(
        &self,
        id: i64,
        input: UpdateTodo,
    ) -> impl Future<Output = Result<Option<Todo>, ServerError>> + Send;

    /// Returns `false` when no record has this id.
    fn delete(&self, id: i64) -> impl Future<Output = Result<bool, ServerError>> + Send;
}
