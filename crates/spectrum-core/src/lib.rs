pub mod config;
pub mod constants;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod spectrum;
pub mod synth;

pub use config::*;
pub use constants::*;
pub use editor::*;
pub use error::*;
pub use geometry::*;
pub use spectrum::*;
pub use synth::*;
