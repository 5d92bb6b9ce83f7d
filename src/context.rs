//! Service context bundling all port trait objects.

use std::sync::Arc;

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::receptor::ReceptorClient;
use crate::adapters::live::task_examiner::ReceptorTaskExaminer;
use crate::adapters::live::task_runner::ReceptorTaskRunner;
use crate::adapters::live::terminal::ConsoleUi;
use crate::config::LatticeConfig;
use crate::ports::filesystem::FileSystem;
use crate::ports::task_runner::TaskRunner;
use crate::ports::terminal::TerminalUi;

/// Bundles the ports the task commands consume.
///
/// Handles are shared so each command built from the context can keep its
/// own reference.
pub struct ServiceContext {
    /// Task runner for submitting and deleting tasks.
    pub task_runner: Arc<dyn TaskRunner>,
    /// Filesystem for reading task definitions.
    pub fs: Arc<dyn FileSystem>,
    /// Terminal for user-facing output.
    pub ui: Arc<dyn TerminalUi>,
}

impl ServiceContext {
    /// Creates a context from explicit implementations.
    #[must_use]
    pub fn new(
        task_runner: Arc<dyn TaskRunner>,
        fs: Arc<dyn FileSystem>,
        ui: Arc<dyn TerminalUi>,
    ) -> Self {
        Self {
            task_runner,
            fs,
            ui,
        }
    }

    /// Creates a live context talking to the configured receptor, the real
    /// disk and standard output.
    ///
    /// # Errors
    ///
    /// Returns an error string if the receptor client cannot be built.
    pub fn live(config: &LatticeConfig) -> Result<Self, String> {
        let client = ReceptorClient::new(config)
            .map_err(|e| format!("Failed to set up receptor client: {e}"))?;
        let client = Arc::new(client);
        let examiner = ReceptorTaskExaminer::new(Arc::clone(&client));

        Ok(Self {
            task_runner: Arc::new(ReceptorTaskRunner::new(client, Box::new(examiner))),
            fs: Arc::new(LiveFileSystem),
            ui: Arc::new(ConsoleUi::stdout()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_context_without_target_fails_at_request_time() {
        let ctx = ServiceContext::live(&LatticeConfig::default()).unwrap();

        let err = ctx.task_runner.delete_task("task-guid-1").unwrap_err();
        assert_eq!(err.to_string(), "lattice target is not set");
    }
}
