pub mod tuning;

pub use tuning::{base_frequency, c0_hz, c5_hz, midi_to_hz, semitone_ratio};
