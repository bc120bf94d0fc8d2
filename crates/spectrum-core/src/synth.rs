use crate::spectrum::{FrequencyBins, Spectrum};
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WaveformSample {
    pub time: f32,
    pub amplitude: f32,
}

/// Direct sinusoid summation over a fixed, evenly spaced time grid.
///
/// Every call recomputes the whole sequence from the spectrum; only the time
/// grid is kept between calls.
#[derive(Clone, Debug)]
pub struct Synthesizer {
    times: Vec<f32>,
    window_sec: f32,
}

impl Synthesizer {
    /// `sample_count` points spanning `[0, window_sec]`, both ends included.
    pub fn new(sample_count: usize, window_sec: f32) -> Self {
        let last = sample_count.saturating_sub(1).max(1) as f32;
        let times = (0..sample_count)
            .map(|i| i as f32 / last * window_sec)
            .collect();
        Self { times, window_sec }
    }

    #[inline]
    pub fn sample_count(&self) -> usize {
        self.times.len()
    }

    #[inline]
    pub fn window_sec(&self) -> f32 {
        self.window_sec
    }

    #[inline]
    pub fn times(&self) -> &[f32] {
        &self.times
    }

    pub fn synthesize(&self, spectrum: &Spectrum, bins: &FrequencyBins) -> Vec<WaveformSample> {
        let mut out = Vec::with_capacity(self.times.len());
        self.synthesize_into(spectrum, bins, &mut out);
        out
    }

    /// Overwrite `out` with the waveform of `spectrum`.
    pub fn synthesize_into(
        &self,
        spectrum: &Spectrum,
        bins: &FrequencyBins,
        out: &mut Vec<WaveformSample>,
    ) {
        out.clear();
        out.extend(self.times.iter().map(|&t| WaveformSample {
            time: t,
            amplitude: signal_at(spectrum, bins, t),
        }));
    }
}

/// `sum_j a_j * sin(2π f_j t)`, accumulated in bin order.
pub fn signal_at(spectrum: &Spectrum, bins: &FrequencyBins, t: f32) -> f32 {
    spectrum
        .iter(bins)
        .filter(|(_, a)| *a != 0.0)
        .fold(0.0, |acc, (hz, a)| acc + a * (TAU * hz * t).sin())
}
