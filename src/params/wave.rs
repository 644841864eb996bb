//! Wave animation parameters and control ranges.

/// Animation parameters for the epicycle chain
#[derive(Debug, Clone)]
pub struct WaveParams {
    /// Phase advance per frame (radians per tick, the "Speed" control)
    pub speed: f32,

    /// Fundamental amplitude in canvas units (the "Zoom" control)
    pub base_radius: f32,

    /// Number of harmonics above the fundamental; the chain carries
    /// complexity + 1 circles
    pub complexity: usize,

    /// Chain anchor in canvas units (the "Center X"/"Center Y" controls)
    pub anchor: [f32; 2],
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            speed: 0.01,
            base_radius: 180.0,
            complexity: 10,
            anchor: [200.0, 500.0],
        }
    }
}

/// Allowed ranges and adjustment steps for the five controls.
///
/// The core itself accepts any finite value; these ranges are what the
/// input layer clamps to so slider-sourced values stay sane.
#[derive(Debug, Clone)]
pub struct ControlRanges {
    /// Speed range (radians per tick)
    pub speed_min: f32,
    pub speed_max: f32,
    /// Speed change per key press
    pub speed_step: f32,

    /// Zoom (base radius) range in canvas units
    pub zoom_min: f32,
    pub zoom_max: f32,
    pub zoom_step: f32,

    /// Maximum harmonic count (minimum is 0)
    pub complexity_max: usize,

    /// Anchor coordinate range in canvas units (both axes)
    pub center_min: f32,
    pub center_max: f32,
    pub center_step: f32,
}

impl Default for ControlRanges {
    fn default() -> Self {
        Self {
            speed_min: 0.001,
            speed_max: 0.02,
            speed_step: 0.001,

            zoom_min: 50.0,
            zoom_max: 1000.0,
            zoom_step: 10.0,

            complexity_max: 100,

            center_min: 0.0,
            center_max: 1000.0,
            center_step: 10.0,
        }
    }
}

impl ControlRanges {
    pub fn clamp_speed(&self, v: f32) -> f32 {
        v.clamp(self.speed_min, self.speed_max)
    }

    pub fn clamp_zoom(&self, v: f32) -> f32 {
        v.clamp(self.zoom_min, self.zoom_max)
    }

    pub fn clamp_complexity(&self, v: usize) -> usize {
        v.min(self.complexity_max)
    }

    pub fn clamp_center(&self, v: f32) -> f32 {
        v.clamp(self.center_min, self.center_max)
    }
}
