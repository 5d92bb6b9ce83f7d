//! Task examiner port for querying task state.

use std::fmt;

use serde::Deserialize;

use super::task_runner::PortError;

/// Lifecycle state of a task as reported by the cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    /// The task definition was rejected.
    Invalid,
    /// Waiting to be placed on a cell.
    Pending,
    /// Running on a cell.
    Running,
    /// Finished, successfully or not.
    Completed,
    /// Completion callback in progress.
    Resolving,
    /// Any state this client does not know about.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Invalid => "INVALID",
            Self::Pending => "PENDING",
            Self::Running => "RUNNING",
            Self::Completed => "COMPLETED",
            Self::Resolving => "RESOLVING",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

/// Snapshot of a task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskInfo {
    /// The task GUID.
    pub task_guid: String,
    /// Cell the task was placed on, if any.
    #[serde(default)]
    pub cell_id: String,
    /// Current state.
    pub state: TaskState,
    /// Whether the task failed.
    #[serde(default)]
    pub failed: bool,
    /// Failure description when `failed` is set.
    #[serde(default)]
    pub failure_reason: String,
    /// Result payload written by the task.
    #[serde(default)]
    pub result: String,
}

/// Looks up the current state of tasks.
pub trait TaskExaminer: Send + Sync {
    /// Returns the current status of the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the task does not exist or the lookup fails.
    fn task_status(&self, task_guid: &str) -> Result<TaskInfo, PortError>;
}
