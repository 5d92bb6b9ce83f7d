//! Terminal output port.

use std::fmt;

/// Semantic style of a piece of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Unstyled text.
    Neutral,
    /// Success confirmation.
    Affirmative,
    /// Errors and failure reasons.
    Alert,
    /// Highlighted values such as identifiers.
    Emphasis,
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// How the text should be rendered.
    pub style: Style,
    /// The text itself.
    pub text: String,
}

/// One line of terminal output made of styled spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
    spans: Vec<Span>,
}

impl StyledLine {
    /// Creates an empty line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a line holding a single span.
    #[must_use]
    pub fn styled(style: Style, text: impl Into<String>) -> Self {
        Self::new().push(style, text)
    }

    /// Appends a span and returns the line.
    #[must_use]
    pub fn push(mut self, style: Style, text: impl Into<String>) -> Self {
        self.spans.push(Span {
            style,
            text: text.into(),
        });
        self
    }

    /// The spans in output order.
    #[must_use]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// The line's text with all styling removed.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

impl fmt::Display for StyledLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(&span.text)?;
        }
        Ok(())
    }
}

/// Append-only sink for user-facing output.
pub trait TerminalUi: Send + Sync {
    /// Writes one line.
    fn say_line(&self, line: StyledLine);
}
