use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use crate::error::ServerError;
use crate::models::{CreateTodo, Todo, UpdateTodo};
use crate::store::TodoStore;

fn validated_title(title: &str) -> Result<String, ServerError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ServerError::BadRequest("title cannot be empty".to_string()));
    }
    Ok(title.to_string())
}

pub async fn list_todos<S: TodoStore>(
    State(store): State<Arc<S>>,
) -> Result<Json<Vec<Todo>>, ServerError> {
    Ok(Json(store.list().await?))
}

pub async fn get_todo<S: TodoStore>(
    State(store): State<Arc<S>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Todo>, ServerError> {
    let Path(id) = path?;
    store.get(id).await?.map(Json).ok_or(ServerError::NotFound)
}

pub async fn create_todo<S: TodoStore>(
    State(store): State<Arc<S>>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ServerError> {
    let Json(input) = payload?;
    let input = CreateTodo {
        title: validated_title(&input.title)?,
        description: input.description,
    };
    let todo = store.insert(input).await?;
    tracing::info!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo<S: TodoStore>(
    State(store): State<Arc<S>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<Todo>, ServerError> {
    let Path(id) = path?;
    let Json(input) = payload?;
    let input = UpdateTodo {
        title: validated_title(&input.title)?,
        ..input
    };
    let todo = store.update(id, input).await?.ok_or(ServerError::NotFound)?;
    tracing::info!(id, completed = todo.is_completed, "updated todo");
    Ok(Json(todo))
}

pub async fn delete_todo<S: TodoStore>(
    State(store): State<Arc<S>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ServerError> {
    let Path(id) = path?;
    if !store.delete(id).await? {
        return Err(ServerError::NotFound);
    }
    tracing::info!(id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_trimmed() {
        assert_eq!(validated_title("  Buy milk \n").unwrap(), "Buy milk");
    }

    #[test]
    fn blank_title_is_rejected() {
        let err = validated_title("   ").unwrap_err();
        assert!(matches!(err, ServerError::BadRequest(_)));
    }
}
