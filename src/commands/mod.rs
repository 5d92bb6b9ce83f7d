//! Command dispatch and handlers.

pub mod args;
pub mod task_runner;

use std::ffi::OsString;

use crate::cli::Command;
use crate::config::LatticeConfig;
use crate::context::ServiceContext;

pub use task_runner::TaskRunnerCommandFactory;

type Action = Box<dyn Fn(&[OsString])>;

/// A named command that can be run against raw positional arguments.
///
/// Commands report every outcome, failures included, on the terminal they
/// were built with; running one never returns an error.
pub struct TaskCommand {
    /// Subcommand name, e.g. `submit-task`.
    pub name: &'static str,
    /// Short alias, e.g. `st`.
    pub alias: &'static str,
    /// What the command does, as shown in `ltc --help`.
    pub description: &'static str,
    action: Action,
}

impl TaskCommand {
    /// Creates a command running `action`.
    pub fn new<F>(
        name: &'static str,
        alias: &'static str,
        description: &'static str,
        action: F,
    ) -> Self
    where
        F: Fn(&[OsString]) + 'static,
    {
        Self {
            name,
            alias,
            description,
            action: Box::new(action),
        }
    }

    /// Runs the command with the given positional arguments.
    pub fn run(&self, args: &[OsString]) {
        (self.action)(args);
    }
}

/// Dispatch a parsed command using live adapters.
///
/// # Errors
///
/// Returns an error string if the live services cannot be set up.
pub fn dispatch(command: &Command, config: &LatticeConfig) -> Result<(), String> {
    let ctx = ServiceContext::live(config)?;
    dispatch_with_context(command, &ctx);
    Ok(())
}

/// Dispatch a command with the given service context.
pub fn dispatch_with_context(command: &Command, ctx: &ServiceContext) {
    let factory = TaskRunnerCommandFactory::from_context(ctx);
    let (task_command, args) = match command {
        Command::SubmitTask { args } => (factory.make_submit_task_command(), args),
        Command::DeleteTask { args } => (factory.make_delete_task_command(), args),
    };
    tracing::debug!(command = task_command.name, "dispatching");
    task_command.run(args);
}
