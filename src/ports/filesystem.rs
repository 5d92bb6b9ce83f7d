//! Filesystem port for reading user-supplied files.

use std::io;
use std::path::{Path, PathBuf};

/// A failed filesystem operation on a specific path.
///
/// Renders as `<op> <path>: <message>`, e.g.
/// `open /tmp/task.json: no such file or directory`.
#[derive(Debug, thiserror::Error)]
#[error("{op} {}: {}", .path.display(), os_message(.source))]
pub struct PathError {
    /// The operation that failed (`open` or `read`).
    pub op: &'static str,
    /// The path the operation was applied to.
    pub path: PathBuf,
    /// The underlying I/O error.
    pub source: io::Error,
}

impl PathError {
    /// Creates a path error for the given operation.
    pub fn new(op: &'static str, path: &Path, source: io::Error) -> Self {
        Self {
            op,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Returns the platform's description of an I/O error.
///
/// For OS errors this is the system message starting lowercase, without the
/// trailing `(os error N)` that `std` appends.
#[must_use]
pub fn os_message(err: &io::Error) -> String {
    let text = err.to_string();
    let Some(code) = err.raw_os_error() else {
        return text;
    };
    let suffix = format!(" (os error {code})");
    let message = text.strip_suffix(&suffix).unwrap_or(&text);

    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Provides read access to files named by the user.
///
/// Abstracting the filesystem keeps handlers testable without touching the
/// real disk.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns a [`PathError`] if the file cannot be opened or read.
    fn read(&self, path: &Path) -> Result<Vec<u8>, PathError>;
}
