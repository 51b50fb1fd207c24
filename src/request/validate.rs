use std::ffi::{OsStr, OsString};
use std::num::IntErrorKind;
use std::path::PathBuf;

use crate::error::ScaleError;

/// Smallest accepted number of divisions of the octave.
pub const MIN_NOTES: u32 = 1;
/// Largest accepted number of divisions of the octave.
pub const MAX_NOTES: u32 = 24;
/// Highest MIDI note accepted as a start value.
pub const MAX_MIDI_NOTE: f64 = 127.0;

/// Usage text printed alongside command line errors.
pub const USAGE: &str = "Usage: scale [-m] [-i] N startval [outfile.txt]
 -m: sets startval to be MIDI note not frequency
 -i: prints the calculated intervals as well as the abs frequency
 outfile: optional text filename for output data";

/// A validated request for one scale table.
///
/// Only obtainable through [`ScaleRequest::new`] or [`ScaleRequest::from_args`],
/// so every instance satisfies the note count and start value ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleRequest {
    note_count: u32,
    start_value: f64,
    start_is_midi: bool,
    emit_intervals: bool,
    output_path: Option<PathBuf>,
}

impl ScaleRequest {
    /// Builds a request from already-typed values, checking ranges.
    ///
    /// # Arguments
    /// * `note_count` - Divisions of the octave, 1..=24
    /// * `start_value` - MIDI note (0..=127) if `start_is_midi`, else a frequency in Hz (> 0)
    /// * `start_is_midi` - Interpret `start_value` as a MIDI note number
    /// * `emit_intervals` - Include the ratio power column in the output
    ///
    /// # Returns
    /// Returns `Result<ScaleRequest, ScaleError>` with a range error for any out-of-bounds value.
    ///
    /// # Examples
    /// ```
    /// use nscale::ScaleRequest;
    /// let request = ScaleRequest::new(12, 440.0, false, false).unwrap();
    /// assert_eq!(request.note_count(), 12);
    /// ```
    pub fn new(
        note_count: u32,
        start_value: f64,
        start_is_midi: bool,
        emit_intervals: bool,
    ) -> Result<Self, ScaleError> {
        check_note_count(i64::from(note_count))?;
        check_start_value(start_value, start_is_midi)?;
        Ok(ScaleRequest {
            note_count,
            start_value,
            start_is_midi,
            emit_intervals,
            output_path: None,
        })
    }

    /// Attaches the path of the file the table is mirrored to.
    pub fn with_output_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Parses command line arguments, program name excluded.
    ///
    /// Checks happen in a fixed order: flags, argument count, N range,
    /// then start value range. The first failure is returned.
    ///
    /// # Arguments
    /// * `args` - Arguments after the program name, e.g. `["-m", "12", "60"]`
    ///
    /// # Returns
    /// Returns `Result<ScaleRequest, ScaleError>`.
    ///
    /// # Examples
    /// ```
    /// use nscale::ScaleRequest;
    /// let request = ScaleRequest::from_args(["-m", "-i", "19", "57", "out.txt"]).unwrap();
    /// assert!(request.start_is_midi());
    /// assert!(request.emit_intervals());
    /// assert_eq!(request.note_count(), 19);
    /// ```
    pub fn from_args<I, S>(args: I) -> Result<Self, ScaleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        let mut start_is_midi = false;
        let mut emit_intervals = false;
        let mut rest = args.as_slice();
        while let Some((arg, tail)) = rest.split_first() {
            if arg.as_encoded_bytes().first() != Some(&b'-') {
                break;
            }
            let unknown = || ScaleError::UnknownOption(arg.to_string_lossy().into_owned());
            let flags = arg.to_str().and_then(|a| a.strip_prefix('-')).ok_or_else(unknown)?;
            if flags.is_empty() {
                return Err(unknown());
            }
            for flag in flags.chars() {
                match flag {
                    'm' => start_is_midi = true,
                    'i' => emit_intervals = true,
                    _ => return Err(unknown()),
                }
            }
            rest = tail;
        }

        let (notes_arg, start_arg, output_arg) = match rest {
            [] | [_] => return Err(ScaleError::MissingArguments),
            [n, s] => (n, s, None),
            [n, s, o] => (n, s, Some(o)),
            [_, _, _, extra, ..] => {
                return Err(ScaleError::TooManyArguments(extra.to_string_lossy().into_owned()));
            }
        };

        let note_count = parse_note_count(notes_arg)?;

        let start_value: f64 = numeric_str(start_arg, "startval")?
            .parse()
            .map_err(|_| invalid_number(start_arg, "startval"))?;
        check_start_value(start_value, start_is_midi)?;

        Ok(ScaleRequest {
            note_count,
            start_value,
            start_is_midi,
            emit_intervals,
            // Kept as raw OS bytes so the file is created under the exact name given.
            output_path: output_arg.map(PathBuf::from),
        })
    }

    pub fn note_count(&self) -> u32 {
        self.note_count
    }

    pub fn start_value(&self) -> f64 {
        self.start_value
    }

    pub fn start_is_midi(&self) -> bool {
        self.start_is_midi
    }

    pub fn emit_intervals(&self) -> bool {
        self.emit_intervals
    }

    pub fn output_path(&self) -> Option<&PathBuf> {
        self.output_path.as_ref()
    }
}

fn invalid_number(arg: &OsStr, name: &'static str) -> ScaleError {
    ScaleError::InvalidNumber {
        name,
        value: arg.to_string_lossy().into_owned(),
    }
}

fn numeric_str<'a>(arg: &'a OsStr, name: &'static str) -> Result<&'a str, ScaleError> {
    arg.to_str().map(str::trim).ok_or_else(|| invalid_number(arg, name))
}

fn parse_note_count(arg: &OsStr) -> Result<u32, ScaleError> {
    let text = numeric_str(arg, "N")?;
    match text.parse::<i64>() {
        Ok(notes) => check_note_count(notes),
        // An integer too wide for i64 is still a number, just far out of range.
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Err(ScaleError::NoteCountOutOfRange(text.to_string()))
        }
        Err(_) => Err(invalid_number(arg, "N")),
    }
}

pub(crate) fn check_note_count(notes: i64) -> Result<u32, ScaleError> {
    if notes < i64::from(MIN_NOTES) || notes > i64::from(MAX_NOTES) {
        return Err(ScaleError::NoteCountOutOfRange(notes.to_string()));
    }
    Ok(notes as u32)
}

pub(crate) fn check_start_value(value: f64, is_midi: bool) -> Result<(), ScaleError> {
    if is_midi {
        // MIDI 0 is a valid start note.
        if !(0.0..=MAX_MIDI_NOTE).contains(&value) {
            return Err(ScaleError::MidiOutOfRange(value));
        }
    } else if !(value.is_finite() && value > 0.0) {
        return Err(ScaleError::FrequencyOutOfRange(value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_note_count_bounds() {
        assert!(check_note_count(0).is_err());
        assert_eq!(check_note_count(1).unwrap(), 1);
        assert_eq!(check_note_count(24).unwrap(), 24);
        assert!(check_note_count(25).is_err());
        assert!(check_note_count(-3).is_err());
    }

    #[test]
    fn test_parse_note_count_overflow() {
        let err = parse_note_count(OsStr::new("99999999999999999999")).unwrap_err();
        assert!(matches!(err, ScaleError::NoteCountOutOfRange(ref n) if n == "99999999999999999999"));
        let err = parse_note_count(OsStr::new("-99999999999999999999")).unwrap_err();
        assert!(matches!(err, ScaleError::NoteCountOutOfRange(_)));
        let err = parse_note_count(OsStr::new("1e3")).unwrap_err();
        assert!(matches!(err, ScaleError::InvalidNumber { name: "N", .. }));
    }

    #[test]
    fn test_check_start_value_nan() {
        assert!(check_start_value(f64::NAN, true).is_err());
        assert!(check_start_value(f64::NAN, false).is_err());
        assert!(check_start_value(f64::INFINITY, false).is_err());
    }
}
