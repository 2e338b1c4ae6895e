//! In-memory list state kept in sync with the remote todo collection.
//!
//! # Design
//! `TodoListController` owns the local copy of the list and routes every user
//! action through a `TodoService`. Failures never escape: each one is logged,
//! turned into a fixed user-facing `Notification`, and leaves the loading
//! flag cleared. Toggling is optimistic; the prior flag is snapshotted before
//! the request and restored if the request fails. Deletion asks for
//! confirmation first and only touches the local list once the server agrees.

use std::future::Future;
use std::time::Duration;

use crate::error::ApiError;
use crate::service::TodoService;
use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo};

/// How long a notification stays on screen.
pub const NOTIFICATION_DURATION: Duration = Duration::from_secs(5);

/// Label of the action that dismisses a notification early.
pub const DISMISS: &str = "Dismiss";

/// A transient message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub action: &'static str,
    pub duration: Duration,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            action: DISMISS,
            duration: NOTIFICATION_DURATION,
        }
    }
}

/// Host-provided dialogs: a yes/no confirmation and a toast.
pub trait Interaction {
    fn confirm(&mut self, message: &str) -> impl Future<Output = bool>;

    fn notify(&mut self, notification: Notification);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    fn index(self) -> usize {
        match self {
            Operation::List => 0,
            Operation::Create => 1,
            Operation::Update => 2,
            Operation::Delete => 3,
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "Failed to fetch todos. Make sure the API is running.",
            Operation::Create => "Failed to add todo.",
            Operation::Update => "Failed to update todo status.",
            Operation::Delete => "Failed to delete todo.",
        }
    }
}

/// `Idle -> Loading -> (Success | Error)`, tracked per operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

pub struct TodoListController<S, I> {
    service: S,
    interaction: I,
    todos: Vec<Todo>,
    /// Bound to the "new todo" form.
    pub new_title: String,
    pub new_description: String,
    loading: bool,
    error: Option<String>,
    statuses: [OperationStatus; 4],
}

impl<S: TodoService, I: Interaction> TodoListController<S, I> {
    pub fn new(service: S, interaction: I) -> Self {
        Self {
            service,
            interaction,
            todos: Vec::new(),
            new_title: String::new(),
            new_description: String::new(),
            loading: false,
            error: None,
            statuses: [OperationStatus::Idle; 4],
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Message of the most recent failure, cleared when the next operation
    /// starts.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status(&self, operation: Operation) -> OperationStatus {
        self.statuses[operation.index()]
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn interaction_mut(&mut self) -> &mut I {
        &mut self.interaction
    }

    /// Replace the local list with the server's.
    pub async fn load(&mut self) -> OperationStatus {
        self.begin(Operation::List);
        match self.service.list().await {
            Ok(todos) => {
                self.todos = todos;
                self.succeed(Operation::List)
            }
            Err(e) => self.fail(Operation::List, e),
        }
    }

    /// Create a todo from the form fields; a blank description is sent as
    /// absent. The form is cleared only on success.
    pub async fn add(&mut self) -> OperationStatus {
        let input = CreateTodo {
            title: self.new_title.clone(),
            description: (!self.new_description.trim().is_empty())
                .then(|| self.new_description.clone()),
        };

        self.begin(Operation::Create);
        match self.service.create(&input).await {
            Ok(todo) => {
                self.todos.push(todo);
                self.new_title.clear();
                self.new_description.clear();
                self.succeed(Operation::Create)
            }
            Err(e) => self.fail(Operation::Create, e),
        }
    }

    /// Flip the completion flag of `id` locally, then persist it.
    ///
    /// Returns `Idle` without sending anything when `id` is not in the list.
    pub async fn toggle(&mut self, id: TodoId) -> OperationStatus {
        let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) else {
            return OperationStatus::Idle;
        };
        let previous = todo.is_completed;
        todo.is_completed = !previous;
        let payload = UpdateTodo::from(&*todo);

        self.begin(Operation::Update);
        match self.service.update(id, &payload).await {
            Ok(_) => self.succeed(Operation::Update),
            Err(e) => {
                if let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) {
                    todo.is_completed = previous;
                }
                self.fail(Operation::Update, e)
            }
        }
    }

    /// Delete `id` after the user confirms.
    ///
    /// Returns `Idle` without sending anything when the user declines or
    /// `id` is not in the list.
    pub async fn delete(&mut self, id: TodoId) -> OperationStatus {
        let Some(todo) = self.todos.iter().find(|t| t.id == id) else {
            return OperationStatus::Idle;
        };
        let prompt = format!("Are you sure you want to delete \"{}\"?", todo.title);
        if !self.interaction.confirm(&prompt).await {
            tracing::debug!(id, "delete declined");
            return OperationStatus::Idle;
        }

        self.begin(Operation::Delete);
        match self.service.delete(id).await {
            Ok(()) => {
                self.todos.retain(|t| t.id != id);
                self.succeed(Operation::Delete)
            }
            Err(e) => self.fail(Operation::Delete, e),
        }
    }

    fn begin(&mut self, operation: Operation) {
        self.loading = true;
        self.error = None;
        self.statuses[operation.index()] = OperationStatus::Loading;
    }

    fn succeed(&mut self, operation: Operation) -> OperationStatus {
        self.loading = false;
        self.statuses[operation.index()] = OperationStatus::Success;
        OperationStatus::Success
    }

    fn fail(&mut self, operation: Operation, error: ApiError) -> OperationStatus {
        tracing::error!(?operation, error = %error, "todo request failed");
        let message = operation.failure_message();
        self.error = Some(message.to_string());
        self.interaction.notify(Notification::error(message));
        self.loading = false;
        self.statuses[operation.index()] = OperationStatus::Error;
        OperationStatus::Error
    }
}
