//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the command handlers and an
//! external system (task runner, task examiner, filesystem, terminal).
//! Implementations live in `src/adapters/`.

pub mod filesystem;
pub mod task_examiner;
pub mod task_runner;
pub mod terminal;

pub use filesystem::{FileSystem, PathError};
pub use task_examiner::{TaskExaminer, TaskInfo, TaskState};
pub use task_runner::{PortError, SubmitTaskError, TaskRunner};
pub use terminal::{Span, Style, StyledLine, TerminalUi};
