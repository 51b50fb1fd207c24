use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::{debug, warn};

use crate::error::ScaleError;
use crate::scale::table::{ScaleEntry, ScaleTable};

/// Column layout of a rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `index: \tfrequency`
    #[default]
    Frequencies,
    /// `index: \tratio_power\tfrequency`
    Intervals,
}

impl OutputFormat {
    pub fn from_flag(emit_intervals: bool) -> Self {
        if emit_intervals {
            OutputFormat::Intervals
        } else {
            OutputFormat::Frequencies
        }
    }
}

/// Outcome for the mirror file after a table has been written.
#[derive(Debug)]
pub enum MirrorStatus {
    /// No mirror file was open.
    Disabled,
    /// Every line reached the mirror file.
    Complete,
    /// Writing stopped at the first failure; the console output is unaffected.
    Failed(io::Error),
}

/// Formats a single row, without the trailing newline.
///
/// # Examples
/// ```
/// use nscale::{format_entry, OutputFormat, ScaleEntry};
/// let entry = ScaleEntry { index: 1, ratio_power: 2.0, frequency: 880.0 };
/// assert_eq!(format_entry(&entry, OutputFormat::Frequencies), "1: \t880.000000");
/// assert_eq!(format_entry(&entry, OutputFormat::Intervals), "1: \t2.000000\t880.000000");
/// ```
pub fn format_entry(entry: &ScaleEntry, format: OutputFormat) -> String {
    match format {
        OutputFormat::Frequencies => format!("{}: \t{:.6}", entry.index, entry.frequency),
        OutputFormat::Intervals => format!(
            "{}: \t{:.6}\t{:.6}",
            entry.index, entry.ratio_power, entry.frequency
        ),
    }
}

/// Writes every row of `table` to `out`, one line each.
pub fn render_table<W: Write>(table: &ScaleTable, format: OutputFormat, out: &mut W) -> io::Result<()> {
    for entry in table.entries() {
        writeln!(out, "{}", format_entry(&entry, format))?;
    }
    Ok(())
}

/// Creates the mirror file at `path`.
///
/// A file that cannot be created is not an error for the run: the failure is
/// logged as a warning and `None` is returned.
pub fn open_mirror<P: AsRef<Path>>(path: P) -> Option<BufWriter<File>> {
    let path = path.as_ref();
    match File::create(path) {
        Ok(file) => {
            debug!("mirroring table to {}", path.display());
            Some(BufWriter::new(file))
        }
        Err(e) => {
            warn!("unable to create file {}: {}", path.display(), e);
            None
        }
    }
}

/// Console writer with an optional mirror that receives the same lines.
///
/// Console failures are fatal. Mirror failures only stop the mirror.
pub struct ScaleOutput<C: Write, F: Write> {
    console: C,
    mirror: Option<F>,
}

impl<C: Write, F: Write> ScaleOutput<C, F> {
    pub fn new(console: C, mirror: Option<F>) -> Self {
        ScaleOutput { console, mirror }
    }

    /// Writes the table to the console and the mirror, then closes the mirror.
    ///
    /// # Returns
    /// Returns `Result<MirrorStatus, ScaleError>`; the error case is only a
    /// console write failure.
    pub fn write_table(mut self, table: &ScaleTable, format: OutputFormat) -> Result<MirrorStatus, ScaleError> {
        let mut status = if self.mirror.is_some() {
            MirrorStatus::Complete
        } else {
            MirrorStatus::Disabled
        };

        for entry in table.entries() {
            let line = format_entry(&entry, format);
            writeln!(self.console, "{}", line)?;

            if let Some(mirror) = self.mirror.as_mut() {
                if let Err(e) = writeln!(mirror, "{}", line) {
                    warn!("there was an error writing to the file: {}", e);
                    self.mirror = None;
                    status = MirrorStatus::Failed(e);
                }
            }
        }
        self.console.flush()?;

        if let Some(mut mirror) = self.mirror.take() {
            if let Err(e) = mirror.flush() {
                warn!("there was an error writing to the file: {}", e);
                status = MirrorStatus::Failed(e);
            }
        }
        Ok(status)
    }
}
