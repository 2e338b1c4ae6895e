//! CRUD REST backend for a single `Todo` resource.
//!
//! # Design
//! Handlers are generic over [`TodoStore`]; [`router`] binds them to one
//! store instance. [`app`] is a ready-made router over a fresh in-memory
//! store for tests and local use.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod store;

use std::sync::Arc;

use axum::{
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;

pub use config::ServerConfig;
pub use error::ServerError;
pub use models::{CreateTodo, Todo, UpdateTodo};
pub use store::{MemoryStore, SqliteStore, TodoStore};

pub fn router<S: TodoStore>(store: S) -> Router {
    Router::new()
        .route(
            "/todos",
            get(handlers::list_todos::<S>).post(handlers::create_todo::<S>),
        )
        .route(
            "/todos/{id}",
            get(handlers::get_todo::<S>)
                .put(handlers::update_todo::<S>)
                .delete(handlers::delete_todo::<S>),
        )
        .layer(middleware::from_fn(cors))
        .with_state(Arc::new(store))
}

pub fn app() -> Router {
    router(MemoryStore::default())
}

pub async fn run(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

/// Allow browser front ends on other origins; preflight requests are
/// answered here without reaching a handler.
async fn cors(request: Request, next: Next) -> Response {
    let mut response = if *request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        let method = request.method().clone();
        let path = request.uri().path().to_string();
        let response = next.run(request).await;
        tracing::debug!(%method, %path, status = response.status().as_u16(), "request handled");
        response
    };

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET,POST,PUT,DELETE,OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}
