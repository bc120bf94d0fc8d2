//! Frequency bins and the editable amplitude vector.
//!
//! The bin layout is fixed for the lifetime of a session. `Spectrum` stores
//! exactly one amplitude per bin, each kept between `AMPLITUDE_MIN` and
//! `AMPLITUDE_MAX`.

use crate::constants::{
    AMPLITUDE_MAX, AMPLITUDE_MIN, BIN_COUNT, BIN_STEP_HZ, SEED_COMPONENTS,
};

/// Evenly spaced frequency bins starting at 0 Hz.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrequencyBins {
    pub step_hz: f32,
    pub count: usize,
}

impl Default for FrequencyBins {
    fn default() -> Self {
        Self {
            step_hz: BIN_STEP_HZ,
            count: BIN_COUNT,
        }
    }
}

impl FrequencyBins {
    #[inline]
    pub fn frequency(&self, index: usize) -> f32 {
        index as f32 * self.step_hz
    }

    #[inline]
    pub fn last_index(&self) -> usize {
        self.count.saturating_sub(1)
    }

    #[inline]
    pub fn max_frequency(&self) -> f32 {
        self.frequency(self.last_index())
    }

    /// Round a frequency to the closest bin, clamped to the valid index range.
    pub fn nearest_index(&self, hz: f32) -> usize {
        if !hz.is_finite() || self.step_hz <= 0.0 {
            return 0;
        }
        let fractional = (hz / self.step_hz).round().max(0.0);
        (fractional as usize).min(self.last_index())
    }

    /// Exact bin lookup; `None` when `hz` is not (within rounding) on the grid.
    pub fn index_of(&self, hz: f32) -> Option<usize> {
        let i = self.nearest_index(hz);
        ((self.frequency(i) - hz).abs() < 0.01).then_some(i)
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.count).map(move |i| self.frequency(i))
    }
}

/// The amplitude vector, one entry per frequency bin.
#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum {
    amplitudes: [f32; BIN_COUNT],
}

impl Default for Spectrum {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Spectrum {
    pub fn silent() -> Self {
        Self {
            amplitudes: [0.0; BIN_COUNT],
        }
    }

    /// The initial session spectrum: a few low harmonics, everything else zero.
    pub fn seeded() -> Self {
        let bins = FrequencyBins::default();
        let mut spectrum = Self::silent();
        for (hz, amplitude) in SEED_COMPONENTS {
            if let Some(i) = bins.index_of(hz) {
                spectrum.set(i, amplitude);
            }
        }
        spectrum
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    #[inline]
    pub fn amplitude(&self, index: usize) -> Option<f32> {
        self.amplitudes.get(index).copied()
    }

    #[inline]
    pub fn amplitudes(&self) -> &[f32] {
        &self.amplitudes
    }

    /// Replace one entry, clamped into the editable range. Returns the
    /// previous value, or `None` if `index` is out of range.
    pub fn set(&mut self, index: usize, amplitude: f32) -> Option<f32> {
        let slot = self.amplitudes.get_mut(index)?;
        let clamped = if amplitude.is_finite() {
            amplitude.clamp(AMPLITUDE_MIN, AMPLITUDE_MAX)
        } else {
            AMPLITUDE_MIN
        };
        Some(std::mem::replace(slot, clamped))
    }

    /// Zero one entry. Returns true only when a non-zero amplitude was removed.
    pub fn clear(&mut self, index: usize) -> bool {
        match self.amplitudes.get_mut(index) {
            Some(a) if *a > 0.0 => {
                *a = 0.0;
                true
            }
            _ => false,
        }
    }

    /// `(frequency_hz, amplitude)` pairs in bin order.
    pub fn iter<'a>(&'a self, bins: &'a FrequencyBins) -> impl Iterator<Item = (f32, f32)> + 'a {
        self.amplitudes
            .iter()
            .enumerate()
            .map(move |(i, a)| (bins.frequency(i), *a))
    }

    pub fn active_count(&self) -> usize {
        self.amplitudes.iter().filter(|a| **a > 0.0).count()
    }
}
