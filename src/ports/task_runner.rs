//! Task runner port for submitting and deleting tasks.

use std::error::Error;

/// Boxed error returned by port implementations.
pub type PortError = Box<dyn Error + Send + Sync>;

/// A failed submission.
///
/// The runner may already know the task name when the failure happens (for
/// example when the cluster rejects a well-formed task), so the name travels
/// with the reason. It is empty when the payload never got that far.
#[derive(Debug, thiserror::Error)]
#[error("{reason}")]
pub struct SubmitTaskError {
    /// Task name reported alongside the failure; may be empty.
    pub task_name: String,
    /// Why the submission failed.
    pub reason: PortError,
}

impl SubmitTaskError {
    /// Creates a submission error for the given task name.
    pub fn new(task_name: impl Into<String>, reason: impl Into<PortError>) -> Self {
        Self {
            task_name: task_name.into(),
            reason: reason.into(),
        }
    }
}

/// Submits and deletes tasks on an external task management system.
///
/// Abstracting the runner keeps command handlers independent of the
/// transport, so tests can substitute a fake.
pub trait TaskRunner: Send + Sync {
    /// Submits a task described by a raw JSON payload and returns its name.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitTaskError`] if the payload is rejected or the
    /// request fails.
    fn submit_task(&self, payload: &[u8]) -> Result<String, SubmitTaskError>;

    /// Deletes the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the task cannot be found or deleted.
    fn delete_task(&self, task_guid: &str) -> Result<(), PortError>;
}
