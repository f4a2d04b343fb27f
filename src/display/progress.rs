//! Textual progress bars for long-running export phases

use std::io::{self, Stderr, Write};

pub const DEFAULT_BAR_WIDTH: usize = 80;

/// Incremental progress bar rendering `label[####....] i/total`.
///
/// One instance per pipeline phase. The total must be set before the first
/// report; `set_total` also rewinds the auto-advancing cursor so a bar can
/// be reused for the next sub-phase. Write failures on the status stream
/// are ignored, a broken terminal never interrupts an export.
pub struct ProgressBar<W: Write> {
    size: usize,
    label: String,
    total: usize,
    cursor: usize,
    out: W,
}

impl ProgressBar<Stderr> {
    pub fn stderr(size: usize, label: impl Into<String>) -> Self {
        Self::with_writer(size, label, io::stderr())
    }
}

impl<W: Write> ProgressBar<W> {
    pub fn with_writer(size: usize, label: impl Into<String>, out: W) -> Self {
        Self {
            size,
            label: label.into(),
            total: 0,
            cursor: 0,
            out,
        }
    }

    /// Relabel the bar, e.g. for the next attribute being translated.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Declare how many reports make up the coming sequence.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.cursor = 0;
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Render position `index` (zero-based). Indices at or past the total
    /// are clamped; the finishing newline is written exactly when the last
    /// slot is reported.
    pub fn report(&mut self, index: usize) {
        if self.total == 0 {
            return;
        }

        let step = index + 1;
        let filled = (self.size * step / self.total).min(self.size);
        let _ = write!(
            self.out,
            "{}[{}{}] {}/{}   \r",
            self.label,
            "#".repeat(filled),
            ".".repeat(self.size - filled),
            step,
            self.total
        );
        let _ = self.out.flush();

        if step != self.total {
            return;
        }

        let _ = writeln!(self.out);
        let _ = self.out.flush();
    }

    /// Report the internal cursor, then move it forward, wrapping to 0 once
    /// the total is reached. For call sites where reports arrive one by one
    /// from an unordered stream instead of a counted loop.
    pub fn advance(&mut self) {
        self.report(self.cursor);
        self.cursor += 1;
        if self.cursor == self.total {
            self.cursor = 0;
        }
    }
}
