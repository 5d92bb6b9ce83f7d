//! CLI argument definitions.

use std::ffi::OsString;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `ltc`.
#[derive(Debug, Parser)]
#[command(name = "ltc", version, about = "Submit and delete Lattice tasks")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
///
/// Positional arguments are collected as raw OS strings; the command
/// handlers decide whether they are valid and report problems themselves.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit a task from a JSON file.
    #[command(visible_alias = "st")]
    SubmitTask {
        /// Path to the JSON task definition.
        #[arg(value_name = "PATH_TO_JSON")]
        args: Vec<OsString>,
    },
    /// Delete a completed task.
    #[command(visible_alias = "dt")]
    DeleteTask {
        /// GUID of the task to delete.
        #[arg(value_name = "TASK_GUID")]
        args: Vec<OsString>,
    },
}
