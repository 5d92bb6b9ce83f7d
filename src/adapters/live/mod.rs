//! Live adapters for real external interactions.

pub mod filesystem;
pub mod receptor;
pub mod task_examiner;
pub mod task_runner;
pub mod terminal;
