use std::str::FromStr;
use std::time::Duration;

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::TodoStore;
use crate::error::ServerError;
use crate::models::{CreateTodo, Todo, UpdateTodo};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    is_completed BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TEXT NOT NULL
)";

/// SQLite-backed store over the single `todos` table.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) the database at `url` and ensure the table exists.
    ///
    /// An in-memory database lives only as long as its connection, so the
    /// pool is pinned to one connection that is never recycled.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool_options = if url.contains(":memory:") || url.contains("mode=memory") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };
        let pool = pool_options.connect_with(options).await?;

        sqlx::query(CREATE_TABLE).execute(&pool).await?;
        tracing::debug!(url, "todos table ready");

        Ok(Self { pool })
    }
}

impl TodoStore for SqliteStore {
    async fn list(&self) -> Result<Vec<Todo>, ServerError> {
        let todos = sqlx::query_as::<_, Todo>(
            "SELECT id, title, description, is_completed, created_at FROM todos ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(todos)
    }

    async fn get(&self, id: i64) -> Result<Option<Todo>, ServerError> {
        let todo = sqlx::query_as::<_, Todo>(
            "SELECT id, title, description, is_completed, created_at FROM todos WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(todo)
    }

    async fn insert(&self, input: CreateTodo) -> Result<Todo, ServerError> {
        let todo = sqlx::query_as::<_, Todo>(
            "INSERT INTO todos (title, description, is_completed, created_at)
             VALUES (?, ?, FALSE, ?)
             RETURNING id, title, description, is_completed, created_at",
        )
        .bind(input.title)
        .bind(input.description)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(todo)
    }

    async fn update(&self, id: i64, input: UpdateTodo) -> Result<Option<Todo>, ServerError> {
        let todo = sqlx::query_as::<_, Todo>(
            "UPDATE todos SET title = ?, description = ?, is_completed = ?
             WHERE id = ?
             RETURNING id, title, description, is_completed, created_at",
        )
        .bind(input.title)
        .bind(input.description)
        .bind(input.is_completed)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(todo)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServerError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
