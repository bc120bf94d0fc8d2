use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("waveform needs at least 2 samples, got {0}")]
    TooFewSamples(usize),
    #[error("waveform allows at most {max} samples, got {got}")]
    TooManySamples { got: usize, max: usize },
    #[error("waveform window must be a positive number of seconds, got {0}")]
    InvalidWindow(f32),
    #[error("{name} axis must satisfy min < max, got [{min}, {max}]")]
    InvalidAxis {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("could not parse {field} from {value:?}")]
    Parse { field: &'static str, value: String },
}
