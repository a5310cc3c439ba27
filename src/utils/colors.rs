//! Terminal styling for cli-actions output
//!
//! Styling is decided once per process. `--no-color` wins over a non-empty
//! `NO_COLOR`, which wins over terminal detection on stdout. Progress bars are
//! never styled, so their width stays exact.

use colored::{ColoredString, Colorize};
use std::sync::OnceLock;

static STYLING: OnceLock<bool> = OnceLock::new();

const fn styling_allowed(no_color_flag: bool, no_color_env: bool, stdout_is_tty: bool) -> bool {
    !no_color_flag && !no_color_env && stdout_is_tty
}

fn detect(no_color_flag: bool) -> bool {
    let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty());
    styling_allowed(no_color_flag, no_color_env, atty::is(atty::Stream::Stdout))
}

/// Fix the styling decision for this process
///
/// Only the first call decides.
pub fn init_colors(no_color_flag: bool) {
    let enabled = *STYLING.get_or_init(|| detect(no_color_flag));
    colored::control::set_override(enabled);
}

/// Whether output is styled; decides from the environment if not yet initialized
#[must_use]
pub fn colors_enabled() -> bool {
    *STYLING.get_or_init(|| detect(false))
}

fn paint(text: &str, style: fn(ColoredString) -> ColoredString) -> ColoredString {
    if colors_enabled() {
        style(text.normal())
    } else {
        text.normal()
    }
}

/// Styles for the things cli-actions prints
pub struct Theme;

impl Theme {
    /// Command marker such as `--task`
    #[must_use]
    pub fn marker(text: &str) -> ColoredString {
        paint(text, |s| s.cyan().bold())
    }

    /// Colour channel name, drawn in its own colour; alpha is dimmed
    #[must_use]
    pub fn channel(name: &str) -> ColoredString {
        match name {
            "red" => paint(name, |s| s.red()),
            "green" => paint(name, |s| s.green()),
            "blue" => paint(name, |s| s.blue()),
            _ => paint(name, |s| s.dimmed()),
        }
    }

    /// Index label of a chunked group
    #[must_use]
    pub fn group(index: usize) -> ColoredString {
        paint(&format!("[{index}]"), |s| s.blue())
    }

    /// Parsed or resolved value
    #[must_use]
    pub fn value(text: &str) -> ColoredString {
        paint(text, |s| s.magenta())
    }

    /// Finished (green) or failed (red) state of a task or command
    #[must_use]
    pub fn outcome(success: bool, text: &str) -> ColoredString {
        if success {
            paint(text, |s| s.green().bold())
        } else {
            paint(text, |s| s.red().bold())
        }
    }

    /// Setting name in `config list`
    #[must_use]
    pub fn label(text: &str) -> ColoredString {
        paint(text, |s| s.blue())
    }

    #[must_use]
    pub fn heading(text: &str) -> ColoredString {
        paint(text, |s| s.bold())
    }

    /// Hints and counts
    #[must_use]
    pub fn note(text: &str) -> ColoredString {
        paint(text, |s| s.bright_black())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styling_precedence() {
        assert!(styling_allowed(false, false, true));
        assert!(!styling_allowed(true, false, true));
        assert!(!styling_allowed(false, true, true));
        assert!(!styling_allowed(false, false, false));
    }

    #[test]
    fn test_styles_keep_text() {
        for styled in [
            Theme::marker("--task"),
            Theme::channel("red"),
            Theme::channel("alpha"),
            Theme::value("0.5"),
            Theme::outcome(true, "done"),
            Theme::outcome(false, "failed"),
            Theme::label("Name padding:"),
            Theme::heading("Configuration"),
            Theme::note("(not set)"),
        ] {
            assert!(!styled.to_string().is_empty());
        }
        assert!(Theme::group(3).to_string().contains("[3]"));
        assert!(Theme::marker("--task").to_string().contains("--task"));
    }
}
