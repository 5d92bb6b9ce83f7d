//! Receptor-backed adapter for the `TaskExaminer` port.

use std::sync::Arc;

use super::receptor::ReceptorClient;
use crate::ports::task_examiner::{TaskExaminer, TaskInfo};
use crate::ports::task_runner::PortError;

/// Looks up task state through the receptor API.
pub struct ReceptorTaskExaminer {
    client: Arc<ReceptorClient>,
}

impl ReceptorTaskExaminer {
    /// Creates an examiner sharing the given client.
    #[must_use]
    pub fn new(client: Arc<ReceptorClient>) -> Self {
        Self { client }
    }
}

impl TaskExaminer for ReceptorTaskExaminer {
    fn task_status(&self, task_guid: &str) -> Result<TaskInfo, PortError> {
        tracing::debug!(task_guid, "fetching task status");
        Ok(self.client.get_task(task_guid)?)
    }
}
