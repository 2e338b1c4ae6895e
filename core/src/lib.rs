//! Client side of the todo service.
//!
//! # Overview
//! - [`TodoClient`] builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network.
//! - [`Transport`] executes them; [`ReqwestTransport`] is the real one.
//! - [`HttpTodoService`] joins the two behind the async [`TodoService`]
//!   contract.
//! - [`TodoListController`] keeps the local list in sync with the service.
//!
//! DTOs are defined independently from the server crate; integration tests
//! catch schema drift.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod service;
pub mod transport;
pub mod types;

pub use client::TodoClient;
pub use controller::{
    Interaction, Notification, Operation, OperationStatus, TodoListController,
    NOTIFICATION_DURATION,
};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::{HttpTodoService, TodoService};
pub use transport::{ReqwestTransport, Transport};
pub use types::{CreateTodo, Todo, TodoId, UpdateTodo};
