use nscale::{equal_ratio, midi_to_hz, ScaleError, ScaleRequest, ScaleTable};
use approx::{assert_abs_diff_eq, assert_relative_eq};

#[test]
fn test_equal_ratio_spans_octave() {
    for n in 1..=24 {
        assert_relative_eq!(equal_ratio(n).powi(n as i32), 2.0, max_relative = 1e-12);
    }
}

#[test]
fn test_last_entry_is_octave() {
    for n in 1..=24 {
        for &base in &[8.175799, 100.0, 440.0, 12543.85] {
            let table = ScaleTable::generate(base, n).unwrap();
            assert_eq!(table.len(), n as usize + 1);
            assert_relative_eq!(table.octave_frequency(), base * 2.0, max_relative = 1e-12);
            assert_relative_eq!(table.ratio_powers()[n as usize], 2.0, max_relative = 1e-12);
        }
    }
}

#[test]
fn test_twelve_tone_from_440() {
    let table = ScaleTable::generate(440.0, 12).unwrap();
    assert_eq!(table.base_frequency(), 440.0);
    assert_abs_diff_eq!(table.frequencies()[1], 466.163762, epsilon = 1e-6);
    assert_abs_diff_eq!(table.frequencies()[12], 880.0, epsilon = 1e-9);
    assert_eq!(table.ratio_powers()[0], 1.0);
}

#[test]
fn test_iterative_matches_direct_power() {
    let table = ScaleTable::generate(261.63, 19).unwrap();
    let r = equal_ratio(19);
    for entry in table.entries() {
        assert_relative_eq!(entry.frequency, 261.63 * r.powi(entry.index as i32), max_relative = 1e-12);
        assert_relative_eq!(entry.frequency, 261.63 * entry.ratio_power, max_relative = 1e-12);
    }
}

#[test]
fn test_single_step_octave() {
    let table = ScaleTable::generate(100.0, 1).unwrap();
    let freqs: Vec<f64> = table.entries().map(|e| e.frequency).collect();
    assert_eq!(freqs, vec![100.0, 200.0]);
    assert_eq!(table.ratio(), 2.0);
}

#[test]
fn test_entries_and_get() {
    let table = ScaleTable::generate(440.0, 4).unwrap();
    let indices: Vec<usize> = table.entries().map(|e| e.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    assert_eq!(table.get(2), table.entries().nth(2));
    assert!(table.get(5).is_none());
    assert!(!table.is_empty());
}

#[test]
fn test_from_request_midi() {
    let request = ScaleRequest::new(24, 60.0, true, false).unwrap();
    let table = ScaleTable::from_request(&request);
    assert_eq!(table.note_count(), 24);
    assert_abs_diff_eq!(table.base_frequency(), midi_to_hz(60.0), epsilon = 1e-12);
    assert_abs_diff_eq!(table.frequencies()[2], midi_to_hz(61.0), epsilon = 1e-9);
}

#[test]
fn test_generate_rejects_bad_input() {
    assert!(matches!(ScaleTable::generate(440.0, 0), Err(ScaleError::NoteCountOutOfRange(_))));
    assert!(matches!(ScaleTable::generate(440.0, 25), Err(ScaleError::NoteCountOutOfRange(_))));
    assert!(matches!(ScaleTable::generate(0.0, 12), Err(ScaleError::FrequencyOutOfRange(_))));
    assert!(matches!(ScaleTable::generate(f64::NAN, 12), Err(ScaleError::FrequencyOutOfRange(_))));
}
