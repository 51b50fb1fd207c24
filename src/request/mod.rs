pub mod validate;

pub use validate::{ScaleRequest, MAX_MIDI_NOTE, MAX_NOTES, MIN_NOTES, USAGE};
