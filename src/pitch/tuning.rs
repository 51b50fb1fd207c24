use crate::request::ScaleRequest;

/// Reference low A the MIDI anchor is built from, in Hz.
const REFERENCE_A_HZ: f64 = 220.0;

/// Returns the 12-tone equal temperament semitone ratio, 2^(1/12).
pub fn semitone_ratio() -> f64 {
    2.0f64.powf(1.0 / 12.0)
}

/// Frequency of C5 in Hz: three semitones above the 220 Hz reference A.
///
/// # Examples
/// ```
/// let c5 = nscale::c5_hz();
/// assert!((c5 - 261.625565).abs() < 1e-6);
/// ```
pub fn c5_hz() -> f64 {
    REFERENCE_A_HZ * semitone_ratio().powi(3)
}

/// Frequency of C0 (MIDI note 0) in Hz, five octaves below [`c5_hz`].
pub fn c0_hz() -> f64 {
    c5_hz() * 0.5f64.powi(5)
}

/// Converts a MIDI note number to a frequency in Hz.
///
/// Fractional note numbers are allowed. The conversion counts semitones up
/// from C0, so note 69 lands on 440 Hz.
///
/// # Arguments
/// * `note` - MIDI note number, expected in 0.0..=127.0
///
/// # Returns
/// Returns the frequency in Hz.
///
/// # Examples
/// ```
/// let a4 = nscale::midi_to_hz(69.0);
/// assert!((a4 - 440.0).abs() < 1e-9);
/// ```
pub fn midi_to_hz(note: f64) -> f64 {
    c0_hz() * semitone_ratio().powf(note)
}

/// Resolves the frequency at index 0 of the table for a request.
pub fn base_frequency(request: &ScaleRequest) -> f64 {
    if request.start_is_midi() {
        midi_to_hz(request.start_value())
    } else {
        request.start_value()
    }
}
