//! Parameter definitions with units and documented semantics.
//!
//! All magic numbers are extracted here with:
//! - Units (canvas units, radians per tick, pixels)
//! - Documented ranges and meanings
//! - Type safety where possible

mod render;
mod wave;

// Re-export all types
pub use render::{RecordingConfig, RenderConfig};
pub use wave::{ControlRanges, WaveParams};
