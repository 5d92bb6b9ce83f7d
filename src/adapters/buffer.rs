//! In-memory terminal adapter that keeps every line written to it.

use std::sync::Mutex;

use crate::ports::terminal::{StyledLine, TerminalUi};

/// Captures output lines, styles included, for later inspection.
#[derive(Default)]
pub struct BufferUi {
    lines: Mutex<Vec<StyledLine>>,
}

impl BufferUi {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every line written so far.
    ///
    /// # Panics
    ///
    /// Panics if a writer panicked while holding the buffer lock.
    #[must_use]
    pub fn lines(&self) -> Vec<StyledLine> {
        self.lines.lock().expect("buffer lock poisoned").clone()
    }

    /// Returns all output as plain text, one line per written line.
    #[must_use]
    pub fn contents(&self) -> String {
        self.lines()
            .iter()
            .map(|line| format!("{}\n", line.plain_text()))
            .collect()
    }
}

impl TerminalUi for BufferUi {
    fn say_line(&self, line: StyledLine) {
        self.lines.lock().expect("buffer lock poisoned").push(line);
    }
}
