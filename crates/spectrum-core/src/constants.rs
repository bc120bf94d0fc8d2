// Shared spectrum/plot tuning constants used by the core and the web frontend.

// Frequency bins: 0, 0.5, ..., 10.0 Hz
pub const BIN_STEP_HZ: f32 = 0.5;
pub const BIN_COUNT: usize = 21;
pub const MAX_FREQUENCY_HZ: f32 = BIN_STEP_HZ * (BIN_COUNT - 1) as f32;

// Editable amplitude range of a single bin
pub const AMPLITUDE_MIN: f32 = 0.0;
pub const AMPLITUDE_MAX: f32 = 1.0;

// Initial spectrum: (frequency in Hz, amplitude)
pub const SEED_COMPONENTS: [(f32, f32); 3] = [(1.0, 1.0), (3.0, 0.33), (5.0, 0.2)];

// Waveform sampling
pub const WAVEFORM_SAMPLE_COUNT: usize = 400;
pub const WAVEFORM_MAX_SAMPLES: usize = 100_000; // upper bound for page overrides
pub const WAVEFORM_WINDOW_SEC: f32 = 2.0;

// Axis ranges drawn by the two plots
pub const AMPLITUDE_AXIS: [f32; 2] = [0.0, 1.2]; // headroom above the editable max
pub const WAVEFORM_AXIS: [f32; 2] = [-3.0, 3.0];

// Tick spacing
pub const FREQUENCY_TICK_HZ: f32 = 1.0;
pub const AMPLITUDE_TICK: f32 = 0.2;
pub const TIME_TICK_SEC: f32 = 0.25;
pub const WAVEFORM_TICK: f32 = 1.0;
