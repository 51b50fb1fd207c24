//! # nscale: Equal-Tempered Scale Tables
//!
//! nscale computes the frequencies of an equal-tempered octave divided into
//! N steps (1 <= N <= 24), starting either from a frequency in Hz or from a
//! MIDI note number. The table holds N + 1 rows so that both the base note
//! and the note one octave above it are included.
//!
//! ## Key Features
//! - Request validation: turning command line arguments into a checked request.
//! - Pitch conversion: MIDI note numbers to Hz through a C0 anchor.
//! - Table generation: geometric frequency sequences for any N-note octave.
//! - Output: plain text rendering to the console with an optional file mirror.
//!
//! ## Usage
//! ```rust
//! use nscale::{render_table, OutputFormat, ScaleRequest, ScaleTable};
//!
//! let request = ScaleRequest::from_args(["-m", "12", "69"]).unwrap();
//! let table = ScaleTable::from_request(&request);
//! let mut out = Vec::new();
//! render_table(&table, OutputFormat::Frequencies, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("0: \t440.000000\n"));
//! ```

/// Error module.
///
/// The single error type shared by validation and output.
pub mod error;

/// Request module.
///
/// Parses and validates command line arguments into a `ScaleRequest`.
pub mod request;

/// Pitch module.
///
/// MIDI note number to frequency conversion.
pub mod pitch;

/// Scale module.
///
/// Equal-tempered table generation.
pub mod scale;

/// Output module.
///
/// Text rendering of tables to the console and an optional mirror file.
pub mod io;

// Re-export all public items from the modules for convenient access at the crate root.
pub use error::*;
pub use request::*;
pub use pitch::*;
pub use scale::*;
pub use io::*;
