//! Receptor-backed adapter for the `TaskRunner` port.

use std::sync::Arc;

use serde::Deserialize;

use super::receptor::ReceptorClient;
use crate::ports::task_examiner::{TaskExaminer, TaskState};
use crate::ports::task_runner::{PortError, SubmitTaskError, TaskRunner};

/// The part of a task definition this runner needs to see.
#[derive(Deserialize)]
struct TaskCreateRequest {
    #[serde(default)]
    task_guid: String,
}

/// Submits and deletes tasks through the receptor API.
pub struct ReceptorTaskRunner {
    client: Arc<ReceptorClient>,
    examiner: Box<dyn TaskExaminer>,
}

impl ReceptorTaskRunner {
    /// Creates a runner that checks task state with `examiner` before deleting.
    #[must_use]
    pub fn new(client: Arc<ReceptorClient>, examiner: Box<dyn TaskExaminer>) -> Self {
        Self { client, examiner }
    }
}

impl TaskRunner for ReceptorTaskRunner {
    fn submit_task(&self, payload: &[u8]) -> Result<String, SubmitTaskError> {
        let request: TaskCreateRequest =
            serde_json::from_slice(payload).map_err(|e| SubmitTaskError::new("", e))?;
        let task_guid = request.task_guid;

        tracing::debug!(task_guid = %task_guid, bytes = payload.len(), "creating task");
        // The receptor receives the caller's bytes, not a re-encoding.
        self.client
            .create_task(payload)
            .map_err(|e| SubmitTaskError::new(task_guid.clone(), e))?;
        Ok(task_guid)
    }

    fn delete_task(&self, task_guid: &str) -> Result<(), PortError> {
        let info = self.examiner.task_status(task_guid)?;
        if info.state != TaskState::Completed {
            tracing::debug!(task_guid, state = %info.state, "refusing to delete unfinished task");
            return Err(format!("{task_guid} is not in COMPLETED state").into());
        }

        tracing::debug!(task_guid, "deleting task");
        self.client.delete_task(task_guid)?;
        Ok(())
    }
}
