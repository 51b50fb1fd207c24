use thiserror::Error;

/// Broad classification of a [`ScaleError`].
///
/// Usage and range errors abort the run before anything is computed. File
/// errors on the mirror file are reported as warnings and never change the
/// exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed command line: unknown flag, wrong argument count, unparsable number.
    Usage,
    /// A well-formed argument outside its accepted range.
    Range,
    /// Failure creating or writing output.
    File,
}

/// Custom error types for scale generation.
///
/// Covers every way a run can fail, from argument parsing through to
/// writing the finished table.
#[derive(Error, Debug)]
pub enum ScaleError {
    /// A leading `-` argument that is not a known flag.
    #[error("unrecognised option {0}")]
    UnknownOption(String),

    /// Fewer than the two required positional arguments.
    #[error("insufficient arguments passed")]
    MissingArguments,

    /// More positionals than `N startval outfile`.
    #[error("too many arguments passed (unexpected {0})")]
    TooManyArguments(String),

    /// A positional that should be numeric but does not parse.
    #[error("{name} must be a number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    /// Note count outside 1..=24.
    #[error("N is out of range. N must be between 1 and 24, got {0}")]
    NoteCountOutOfRange(String),

    /// MIDI start note outside 0..=127.
    #[error("MIDI startval must be between 0 and 127, got {0}")]
    MidiOutOfRange(f64),

    /// Start frequency that is not a positive finite number.
    #[error("frequency startval must be positive, got {0}")]
    FrequencyOutOfRange(f64),

    /// I/O failure while writing the table.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScaleError {
    /// Returns the [`ErrorKind`] this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScaleError::UnknownOption(_)
            | ScaleError::MissingArguments
            | ScaleError::TooManyArguments(_)
            | ScaleError::InvalidNumber { .. } => ErrorKind::Usage,
            ScaleError::NoteCountOutOfRange(_)
            | ScaleError::MidiOutOfRange(_)
            | ScaleError::FrequencyOutOfRange(_) => ErrorKind::Range,
            ScaleError::Io(_) => ErrorKind::File,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(ScaleError::MissingArguments.kind(), ErrorKind::Usage);
        assert_eq!(ScaleError::UnknownOption("-x".into()).kind(), ErrorKind::Usage);
        assert_eq!(ScaleError::NoteCountOutOfRange("25".into()).kind(), ErrorKind::Range);
        assert_eq!(ScaleError::FrequencyOutOfRange(0.0).kind(), ErrorKind::Range);
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(ScaleError::from(io).kind(), ErrorKind::File);
    }

    #[test]
    fn test_message() {
        let err = ScaleError::UnknownOption("-x".to_string());
        assert_eq!(err.to_string(), "unrecognised option -x");
    }
}
