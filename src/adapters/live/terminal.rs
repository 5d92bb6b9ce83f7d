//! Live terminal adapter using the `console` crate.

use console::Term;

use crate::ports::terminal::{Style, StyledLine, TerminalUi};

/// Writes styled lines to a terminal.
///
/// Colors are emitted only when the stream is attached to a terminal that
/// supports them; piped output stays plain.
pub struct ConsoleUi {
    term: Term,
}

impl ConsoleUi {
    /// Creates a UI writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self { term: Term::stdout() }
    }
}

impl Default for ConsoleUi {
    fn default() -> Self {
        Self::stdout()
    }
}

fn console_style(style: Style) -> console::Style {
    match style {
        Style::Neutral => console::Style::new(),
        Style::Affirmative => console::Style::new().green(),
        Style::Alert => console::Style::new().red(),
        Style::Emphasis => console::Style::new().bold(),
    }
}

/// Renders a line, applying colors only when `colors` is set.
fn render(line: &StyledLine, colors: bool) -> String {
    line.spans()
        .iter()
        .map(|span| {
            console_style(span.style)
                .force_styling(colors)
                .apply_to(&span.text)
                .to_string()
        })
        .collect()
}

impl TerminalUi for ConsoleUi {
    fn say_line(&self, line: StyledLine) {
        let colors = self.term.features().colors_supported() && console::colors_enabled();
        if let Err(e) = self.term.write_line(&render(&line, colors)) {
            tracing::warn!(error = %e, "failed to write to terminal");
        }
    }
}
