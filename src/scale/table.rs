use ndarray::Array1;

use crate::error::ScaleError;
use crate::request::ScaleRequest;
use crate::request::validate::{check_note_count, check_start_value};
use crate::pitch::tuning::base_frequency;

/// Returns the per-step ratio 2^(1/n) of an n-note equal temperament.
///
/// # Examples
/// ```
/// let r = nscale::equal_ratio(12);
/// assert!((r.powi(12) - 2.0).abs() < 1e-12);
/// ```
pub fn equal_ratio(note_count: u32) -> f64 {
    2.0f64.powf(1.0 / note_count as f64)
}

/// One row of a [`ScaleTable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleEntry {
    /// Step number, 0 for the base note.
    pub index: usize,
    /// r^index, where r is the table's step ratio.
    pub ratio_power: f64,
    /// Absolute frequency in Hz.
    pub frequency: f64,
}

/// An equal-tempered octave of `note_count + 1` frequencies.
///
/// Row 0 is the base frequency and row `note_count` is exactly one octave
/// above it, so both ends of the octave are present.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleTable {
    note_count: u32,
    ratio: f64,
    ratio_powers: Array1<f64>,
    frequencies: Array1<f64>,
}

impl ScaleTable {
    /// Generates the table for a base frequency and number of divisions.
    ///
    /// Frequencies are accumulated by repeated multiplication with the step
    /// ratio; ratio powers are taken directly as r^i.
    ///
    /// # Arguments
    /// * `base_hz` - Frequency of row 0 in Hz, > 0
    /// * `note_count` - Divisions of the octave, 1..=24
    ///
    /// # Returns
    /// Returns `Result<ScaleTable, ScaleError>` with `note_count + 1` rows, or a
    /// range error for a zero or oversized note count or a non-positive base.
    ///
    /// # Examples
    /// ```
    /// use nscale::ScaleTable;
    /// let table = ScaleTable::generate(440.0, 12).unwrap();
    /// assert_eq!(table.len(), 13);
    /// assert!((table.octave_frequency() - 880.0).abs() < 1e-9);
    /// assert!(ScaleTable::generate(440.0, 0).is_err());
    /// ```
    pub fn generate(base_hz: f64, note_count: u32) -> Result<Self, ScaleError> {
        check_note_count(i64::from(note_count))?;
        check_start_value(base_hz, false)?;
        Ok(Self::build(base_hz, note_count))
    }

    /// Generates the table a validated request describes.
    pub fn from_request(request: &ScaleRequest) -> Self {
        Self::build(base_frequency(request), request.note_count())
    }

    fn build(base_hz: f64, note_count: u32) -> Self {
        let ratio = equal_ratio(note_count);
        let rows = note_count as usize + 1;

        let mut frequencies = Array1::zeros(rows);
        let mut freq = base_hz;
        for slot in frequencies.iter_mut() {
            *slot = freq;
            freq *= ratio;
        }
        let ratio_powers = Array1::from_shape_fn(rows, |i| ratio.powi(i as i32));

        ScaleTable {
            note_count,
            ratio,
            ratio_powers,
            frequencies,
        }
    }

    pub fn note_count(&self) -> u32 {
        self.note_count
    }

    /// Per-step ratio 2^(1/N).
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Number of rows, always `note_count + 1`.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    pub fn frequencies(&self) -> &Array1<f64> {
        &self.frequencies
    }

    pub fn ratio_powers(&self) -> &Array1<f64> {
        &self.ratio_powers
    }

    pub fn base_frequency(&self) -> f64 {
        self.frequencies[0]
    }

    /// Frequency of the last row, one octave above the base.
    pub fn octave_frequency(&self) -> f64 {
        self.frequencies[self.frequencies.len() - 1]
    }

    pub fn get(&self, index: usize) -> Option<ScaleEntry> {
        let frequency = *self.frequencies.get(index)?;
        Some(ScaleEntry {
            index,
            ratio_power: self.ratio_powers[index],
            frequency,
        })
    }

    /// Iterates the rows in index order.
    pub fn entries(&self) -> impl Iterator<Item = ScaleEntry> + '_ {
        self.ratio_powers
            .iter()
            .zip(self.frequencies.iter())
            .enumerate()
            .map(|(index, (&ratio_power, &frequency))| ScaleEntry {
                index,
                ratio_power,
                frequency,
            })
    }
}
