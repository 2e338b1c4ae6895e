//! Asynchronous resource client: the four CRUD operations as one call each.

use std::future::Future;

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo};

/// Remote todo collection as seen by the list controller.
///
/// No retries and no caching: every call is exactly one request.
pub trait TodoService {
    fn list(&self) -> impl Future<Output = Result<Vec<Todo>, ApiError>>;

    fn create(&self, input: &CreateTodo) -> impl Future<Output = Result<Todo, ApiError>>;

    /// `Ok(None)` when the server accepted the update without echoing the
    /// record back.
    fn update(
        &self,
        id: TodoId,
        input: &UpdateTodo,
    ) -> impl Future<Output = Result<Option<Todo>, ApiError>>;

    fn delete(&self, id: TodoId) -> impl Future<Output = Result<(), ApiError>>;
}

/// `TodoService` over HTTP: `TodoClient` builds and parses, `T` does the I/O.
#[derive(Debug, Clone)]
pub struct HttpTodoService<T> {
    client: TodoClient,
    transport: T,
}

impl<T: Transport> HttpTodoService<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self { client, transport }
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let response = self.transport.execute(request).await?;
        tracing::debug!(status = response.status, "received response");
        Ok(response)
    }
}

impl<T: Transport> TodoService for HttpTodoService<T> {
    async fn list(&self) -> Result<Vec<Todo>, ApiError> {
        let response = self.send(self.client.build_list_todos()).await?;
        self.client.parse_list_todos(response)
    }

    async fn create(&self, input: &CreateTodo) -> Result<Todo, ApiError> {
        let response = self.send(self.client.build_create_todo(input)?).await?;
        self.client.parse_create_todo(response)
    }

    async fn update(&self, id: TodoId, input: &UpdateTodo) -> Result<Option<Todo>, ApiError> {
        let response = self.send(self.client.build_update_todo(id, input)?).await?;
        self.client.parse_update_todo(response)
    }

    async fn delete(&self, id: TodoId) -> Result<(), ApiError> {
        let response = self.send(self.client.build_delete_todo(id)).await?;
        self.client.parse_delete_todo(response)
    }
}
