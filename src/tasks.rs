//!
//! # Task Operations
//!
//! Thin client for the task routes. Tasks are owned entirely by the backend;
//! this module only validates input before the wire and hands back whatever
//! the server returns. Filtering and stats over the fetched list live on the
//! models (`TaskFilter`, `TaskStats`) since they are pure computations.

use crate::api::ApiClient;
use crate::error::AppError;
use crate::models::{Task, TaskInput};
use validator::Validate;

pub struct TasksApi {
    api: ApiClient,
}

impl TasksApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetches the full task list for the authenticated user.
    pub async fn list(&self) -> Result<Vec<Task>, AppError> {
        self.api.get("/tasks").await
    }

    /// Creates a task and returns the server's record of it.
    pub async fn create(&self, input: &TaskInput) -> Result<Task, AppError> {
        input.validate()?;
        self.api.post("/tasks", input).await
    }

    /// Replaces a task's fields and returns the updated record.
    pub async fn update(&self, id: &str, input: &TaskInput) -> Result<Task, AppError> {
        input.validate()?;
        self.api.put(&format!("/tasks/{}", id), input).await
    }

    /// Deletes a task. The backend returns no body.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.api.delete(&format!("/tasks/{}", id)).await
    }
}
