//! Single-line progress bar for long-running operations
//!
//! The bar is redrawn in place with a leading carriage return, and every
//! render has the same width for a given label, total and padding.

use crate::errors::ActionError;
use std::io::{self, Stdout, Write};
use tracing::debug;

/// Fixed-width progress bar writing to `W`
///
/// Drive it with [`Progress::start`], any number of [`Progress::print`] calls,
/// then [`Progress::finish`].
#[derive(Debug)]
pub struct Progress<W: Write = Stdout> {
    name: String,
    total: u64,
    name_padding: Option<usize>,
    number_padding: Option<usize>,
    writer: W,
}

impl Progress<Stdout> {
    /// Progress bar rendering to standard output
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for Progress<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Progress<W> {
    /// Total rendered width, excluding the carriage return
    pub const MAX_LENGTH: usize = 80;
    /// Room kept free for the bar when clamping the label width
    pub const MIN_BAR_LENGTH: usize = 40;
    pub const SYMBOL: char = '=';

    pub fn with_writer(writer: W) -> Self {
        Self {
            name: String::new(),
            total: 0,
            name_padding: None,
            number_padding: None,
            writer,
        }
    }

    /// Fix the label width instead of using the label's length
    #[must_use]
    pub fn name_padding(mut self, padding: Option<usize>) -> Self {
        self.name_padding = padding;
        self
    }

    /// Fix the number width instead of using the digit count of the total
    #[must_use]
    pub fn number_padding(mut self, padding: Option<usize>) -> Self {
        self.number_padding = padding;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn total(&self) -> u64 {
        self.total
    }

    pub const fn is_active(&self) -> bool {
        self.total > 0
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Begin a new bar and draw it at zero
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `total` is zero, or `Io` if drawing fails
    pub fn start(&mut self, total: u64, name: Option<&str>) -> Result<(), ActionError> {
        if total < 1 {
            return Err(ActionError::invalid(format!(
                "Total must be greater than 0, got: {total}"
            )));
        }
        self.name = name.unwrap_or_default().to_string();
        self.total = total;
        debug!(name = %self.name, total, "progress started");
        self.print(0)
    }

    /// Redraw the bar at `value`
    ///
    /// # Errors
    /// Returns `Io` if writing to the output fails
    pub fn print(&mut self, value: u64) -> Result<(), ActionError> {
        let line = self.render(value);
        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// End the bar, optionally drawing it full first
    ///
    /// # Errors
    /// Returns `Io` if writing to the output fails
    pub fn finish(&mut self, success: bool) -> Result<(), ActionError> {
        if success {
            self.print(self.total)?;
        }
        debug!(name = %self.name, total = self.total, success, "progress finished");
        self.name.clear();
        self.total = 0;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Build the line for `value` without writing it
    #[must_use]
    pub fn render(&self, value: u64) -> String {
        let (pad_name, pad_num, pad_bar) = self.widths();

        let filled = if self.total == 0 {
            0
        } else {
            let ratio = u128::from(value) * pad_bar as u128 / u128::from(self.total);
            usize::try_from(ratio).unwrap_or(usize::MAX).min(pad_bar)
        };
        let label: String = self.name.chars().take(pad_name).collect();
        let bars = Self::SYMBOL.to_string().repeat(filled);

        format!(
            "\r{label:<pad_name$} [{bars:<pad_bar$}] {value:>pad_num$}/{total}",
            total = self.total
        )
    }

    /// Label, number and bar widths
    ///
    /// The number width appears twice (value and total) and five separator
    /// characters surround the fields. A padding of zero counts as unset.
    fn widths(&self) -> (usize, usize, usize) {
        let pad_num = self
            .number_padding
            .filter(|&n| n > 0)
            .unwrap_or_else(|| self.total.to_string().len());
        let name_width = self
            .name_padding
            .filter(|&n| n > 0)
            .unwrap_or_else(|| self.name.chars().count());
        let pad_name = (Self::MAX_LENGTH - Self::MIN_BAR_LENGTH)
            .saturating_sub(pad_num)
            .min(name_width.max(1))
            .max(1);
        let pad_bar = Self::MAX_LENGTH.saturating_sub(pad_name + pad_num * 2 + 5);
        (pad_name, pad_num, pad_bar)
    }
}
