//! Positional argument checks shared by the task commands.

use std::ffi::OsStr;

/// Returns the only argument when exactly one non-empty argument was given.
///
/// Arguments are checked as OS strings so paths that are not valid UTF-8
/// pass through untouched.
#[must_use]
pub fn single_argument<T: AsRef<OsStr>>(args: &[T]) -> Option<&OsStr> {
    match args {
        [only] if !only.as_ref().is_empty() => Some(only.as_ref()),
        _ => None,
    }
}
