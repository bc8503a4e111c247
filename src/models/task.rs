use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Represents the status of a task.
/// The wire names are exactly the three strings the backend uses.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Task is yet to be started.
    Pending,
    /// Task is currently being worked on.
    InProgress,
    /// Task is completed.
    Completed,
}

impl TaskStatus {
    /// The wire name for this status, matching its serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "in-progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            other => Err(format!(
                "Unknown status '{}' (expected pending, in-progress, or completed)",
                other
            )),
        }
    }
}

/// Input structure for creating or updating a task.
/// Contains validation rules for its fields.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskInput {
    /// The title of the task.
    /// Must be between 1 and 200 characters.
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// Description for the task. May be empty.
    /// Maximum length of 1000 characters.
    #[validate(length(max = 1000))]
    pub description: String,

    /// The status of the task.
    pub status: TaskStatus,
}

/// Represents a task as returned by the backend.
///
/// The client holds only a transient, non-authoritative copy; the backend
/// owns the record. The id is treated as an opaque string (the `_id` alias
/// accepts document-store shaped backends).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for the task, opaque to the client.
    #[serde(alias = "_id")]
    pub id: String,
    /// The title of the task.
    pub title: String,
    /// Description for the task.
    #[serde(default)]
    pub description: String,
    /// The current status of the task.
    pub status: TaskStatus,
    /// Timestamp of when the task was created, if the backend echoes one.
    #[serde(alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Timestamp of the last update, if the backend echoes one.
    #[serde(alias = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Client-side filter applied to the fetched task list.
///
/// A task passes when its status matches the status filter (absent means
/// "all") and either its title or its description contains the search term,
/// case-insensitively.
#[derive(Debug, Default, Clone)]
pub struct TaskFilter {
    /// Only keep tasks with this status.
    pub status: Option<TaskStatus>,
    /// Case-insensitive substring matched against title and description.
    pub search: Option<String>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(status) = self.status {
            if task.status != status {
                return false;
            }
        }
        match &self.search {
            Some(term) => {
                let term = term.to_lowercase();
                task.title.to_lowercase().contains(&term)
                    || task.description.to_lowercase().contains(&term)
            }
            None => true,
        }
    }

    /// Applies the filter to a fetched list, preserving server order.
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}

/// Per-status counts over a task list, as shown on the dashboard.
#[derive(Debug, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl TaskStats {
    pub fn of(tasks: &[Task]) -> Self {
        let count = |s: TaskStatus| tasks.iter().filter(|t| t.status == s).count();
        Self {
            total: tasks.len(),
            pending: count(TaskStatus::Pending),
            in_progress: count(TaskStatus::InProgress),
            completed: count(TaskStatus::Completed),
        }
    }
}
