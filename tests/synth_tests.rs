// Host-side tests for waveform synthesis.

use spectrum_core::*;
use std::f32::consts::TAU;

#[test]
fn time_grid_spans_the_window_inclusively() {
    let synth = Synthesizer::new(400, 2.0);
    assert_eq!(synth.sample_count(), 400);
    assert_eq!(synth.window_sec(), 2.0);
    let times = synth.times();
    assert_eq!(times[0], 0.0);
    assert!((times[399] - 2.0).abs() < 1e-6);
    for pair in times.windows(2) {
        assert!(pair[1] > pair[0]);
        assert!((pair[1] - pair[0] - 2.0 / 399.0).abs() < 1e-5);
    }
}

#[test]
fn silent_spectrum_is_flat() {
    let synth = Synthesizer::new(64, 2.0);
    let wave = synth.synthesize(&Spectrum::silent(), &FrequencyBins::default());
    assert_eq!(wave.len(), 64);
    assert!(wave.iter().all(|s| s.amplitude == 0.0));
}

#[test]
fn seeded_signal_matches_closed_form() {
    let bins = FrequencyBins::default();
    let s = Spectrum::seeded();
    // t = 0.25: sin(pi/2) - 0.33 + 0.2
    assert!((signal_at(&s, &bins, 0.25) - 0.87).abs() < 1e-4);
    assert!(signal_at(&s, &bins, 0.0).abs() < 1e-6);

    let synth = Synthesizer::new(400, 2.0);
    for sample in synth.synthesize(&s, &bins) {
        let t = sample.time;
        let expected = (TAU * t).sin() + 0.33 * (TAU * 3.0 * t).sin() + 0.2 * (TAU * 5.0 * t).sin();
        assert!(
            (sample.amplitude - expected).abs() < 1e-4,
            "t={t}: {} vs {expected}",
            sample.amplitude
        );
    }
}

#[test]
fn single_bin_has_its_frequency() {
    let bins = FrequencyBins::default();
    let mut s = Spectrum::silent();
    s.set(bins.index_of(2.0).unwrap(), 0.5);
    // 2 Hz: quarter period is 0.125 s
    assert!((signal_at(&s, &bins, 0.125) - 0.5).abs() < 1e-5);
    assert!((signal_at(&s, &bins, 0.375) + 0.5).abs() < 1e-5);
    assert!(signal_at(&s, &bins, 0.5).abs() < 1e-5);
}

#[test]
fn equal_spectra_give_identical_waveforms() {
    let bins = FrequencyBins::default();
    let synth = Synthesizer::new(400, 2.0);
    let mut a = Spectrum::seeded();
    let mut b = Spectrum::silent();
    for (i, amp) in a.amplitudes().to_vec().into_iter().enumerate() {
        b.set(i, amp);
    }
    a.set(7, 0.42);
    b.set(7, 0.9);
    b.set(7, 0.42);
    assert_eq!(a, b);
    assert_eq!(synth.synthesize(&a, &bins), synth.synthesize(&b, &bins));
}

#[test]
fn synthesize_into_replaces_previous_contents() {
    let bins = FrequencyBins::default();
    let synth = Synthesizer::new(10, 1.0);
    let mut out = vec![WaveformSample::default(); 50];
    synth.synthesize_into(&Spectrum::seeded(), &bins, &mut out);
    assert_eq!(out.len(), 10);
    assert_eq!(out, synth.synthesize(&Spectrum::seeded(), &bins));
}
