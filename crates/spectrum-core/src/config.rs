//! Runtime editor configuration.
//!
//! Defaults come from [`crate::constants`]; the web page may override the
//! waveform sampling through data attributes, which arrive here as strings.

use crate::constants::{
    AMPLITUDE_AXIS, AMPLITUDE_MAX, WAVEFORM_AXIS, WAVEFORM_MAX_SAMPLES, WAVEFORM_SAMPLE_COUNT,
    WAVEFORM_WINDOW_SEC,
};
use crate::error::ConfigError;
use crate::geometry::AxisRange;

#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
    pub sample_count: usize,
    pub window_sec: f32,
    pub amplitude_axis: AxisRange,
    pub waveform_axis: AxisRange,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            sample_count: WAVEFORM_SAMPLE_COUNT,
            window_sec: WAVEFORM_WINDOW_SEC,
            amplitude_axis: AxisRange::new(AMPLITUDE_AXIS[0], AMPLITUDE_AXIS[1]),
            waveform_axis: AxisRange::new(WAVEFORM_AXIS[0], WAVEFORM_AXIS[1]),
        }
    }
}

impl EditorConfig {
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.sample_count < 2 {
            return Err(ConfigError::TooFewSamples(self.sample_count));
        }
        if self.sample_count > WAVEFORM_MAX_SAMPLES {
            return Err(ConfigError::TooManySamples {
                got: self.sample_count,
                max: WAVEFORM_MAX_SAMPLES,
            });
        }
        if !(self.window_sec.is_finite() && self.window_sec > 0.0) {
            return Err(ConfigError::InvalidWindow(self.window_sec));
        }
        check_axis("amplitude", self.amplitude_axis)?;
        check_axis("waveform", self.waveform_axis)?;
        // the drawn axis has to show the whole editable range
        if self.amplitude_axis.max < AMPLITUDE_MAX || self.amplitude_axis.min > 0.0 {
            return Err(ConfigError::InvalidAxis {
                name: "amplitude",
                min: self.amplitude_axis.min,
                max: self.amplitude_axis.max,
            });
        }
        Ok(self)
    }

    /// Apply optional textual overrides on top of the defaults.
    pub fn with_overrides(
        samples: Option<&str>,
        window_sec: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        if let Some(s) = samples {
            cfg.sample_count = parse_field("samples", s)?;
        }
        if let Some(w) = window_sec {
            cfg.window_sec = parse_field("window", w)?;
        }
        cfg.validate()
    }
}

fn check_axis(name: &'static str, axis: AxisRange) -> Result<(), ConfigError> {
    if axis.min.is_finite() && axis.max.is_finite() && axis.min < axis.max {
        Ok(())
    } else {
        Err(ConfigError::InvalidAxis {
            name,
            min: axis.min,
            max: axis.max,
        })
    }
}

fn parse_field<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Parse {
        field,
        value: value.to_string(),
    })
}
