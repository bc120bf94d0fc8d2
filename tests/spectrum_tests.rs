// Host-side tests for the frequency bins and the amplitude vector.

use spectrum_core::*;

#[test]
fn bins_cover_zero_to_ten_hz_in_half_steps() {
    let bins = FrequencyBins::default();
    assert_eq!(bins.count, 21);
    assert_eq!(bins.frequency(0), 0.0);
    assert_eq!(bins.frequency(1), 0.5);
    assert_eq!(bins.max_frequency(), 10.0);
    assert_eq!(bins.last_index(), 20);
    assert_eq!(bins.iter().count(), 21);
}

#[test]
fn nearest_index_rounds_and_clamps() {
    let bins = FrequencyBins::default();
    assert_eq!(bins.nearest_index(2.0), 4);
    assert_eq!(bins.nearest_index(2.2), 4);
    assert_eq!(bins.nearest_index(2.3), 5);
    assert_eq!(bins.nearest_index(-1.0), 0);
    assert_eq!(bins.nearest_index(-0.25), 0);
    assert_eq!(bins.nearest_index(99.0), 20);
    assert_eq!(bins.nearest_index(f32::NAN), 0);
}

#[test]
fn index_of_only_matches_grid_frequencies() {
    let bins = FrequencyBins::default();
    assert_eq!(bins.index_of(1.0), Some(2));
    assert_eq!(bins.index_of(3.0), Some(6));
    assert_eq!(bins.index_of(5.0), Some(10));
    assert_eq!(bins.index_of(3.2), None);
}

#[test]
fn seeded_spectrum_has_three_components() {
    let s = Spectrum::seeded();
    assert_eq!(s.len(), BIN_COUNT);
    assert_eq!(s.amplitude(2), Some(1.0));
    assert_eq!(s.amplitude(6), Some(0.33));
    assert_eq!(s.amplitude(10), Some(0.2));
    assert_eq!(s.active_count(), 3);
    for (i, a) in s.amplitudes().iter().enumerate() {
        if ![2, 6, 10].contains(&i) {
            assert_eq!(*a, 0.0, "bin {i} should start silent");
        }
    }
}

#[test]
fn set_clamps_into_editable_range() {
    let mut s = Spectrum::silent();
    assert_eq!(s.set(3, 1.5), Some(0.0));
    assert_eq!(s.amplitude(3), Some(1.0));
    s.set(3, -0.3);
    assert_eq!(s.amplitude(3), Some(0.0));
    s.set(3, f32::NAN);
    assert_eq!(s.amplitude(3), Some(0.0));
    assert_eq!(s.set(3, 0.4), Some(0.0));
    assert_eq!(s.set(3, 0.6), Some(0.4));
}

#[test]
fn set_out_of_range_is_ignored() {
    let mut s = Spectrum::seeded();
    let before = s.clone();
    assert_eq!(s.set(BIN_COUNT, 0.5), None);
    assert_eq!(s, before);
}

#[test]
fn clear_reports_whether_anything_was_removed() {
    let mut s = Spectrum::seeded();
    assert!(s.clear(2));
    assert_eq!(s.amplitude(2), Some(0.0));
    assert!(!s.clear(2));
    assert!(!s.clear(4));
    assert!(!s.clear(BIN_COUNT));
    assert_eq!(s.active_count(), 2);
}

#[test]
fn iter_pairs_frequencies_with_amplitudes() {
    let bins = FrequencyBins::default();
    let s = Spectrum::seeded();
    let active: Vec<(f32, f32)> = s.iter(&bins).filter(|(_, a)| *a > 0.0).collect();
    assert_eq!(active, vec![(1.0, 1.0), (3.0, 0.33), (5.0, 0.2)]);
}
