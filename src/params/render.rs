//! Rendering and recording configuration.

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels; canvas units match logical pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Horizontal position of the trace head (canvas units); each older
    /// trace point sits one unit further right, so the waveform scrolls
    pub trace_lead: f32,

    /// Chord count used to tessellate each circle outline
    pub circle_segments: u32,

    /// Half-extent of the cross drawn for a point marker (canvas units)
    pub point_half_size: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            trace_lead: 700.0,
            circle_segments: 64,
            point_half_size: 2.0,
        }
    }
}

impl RenderConfig {
    /// Worst-case line-list vertex count for one frame, used to size the
    /// GPU vertex buffer once at startup.
    ///
    /// Per circle: the outline polyline, a center marker, and a spoke to
    /// the terminal. Per trace point: a cross. Plus the single connector
    /// from the chain tip to the trace head.
    pub fn max_scene_vertices(&self, max_circles: usize, trace_capacity: usize) -> usize {
        let per_circle = 2 * self.circle_segments as usize + 4 + 2;
        max_circles * per_circle + trace_capacity * 4 + 2
    }
}

/// Recording mode configuration
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    /// Duration to record (seconds)
    pub duration_secs: f32,

    /// Output directory for frames
    pub output_dir: String,

    /// Frame rate (FPS)
    pub fps: u32,
}

impl RecordingConfig {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            duration_secs,
            output_dir: "recording".to_string(),
            fps: 60,
        }
    }

    /// Total number of frames to capture
    pub fn total_frames(&self) -> usize {
        (self.duration_secs * self.fps as f32).ceil() as usize
    }

    /// Frame directory path
    pub fn frames_dir(&self) -> String {
        format!("{}/frames", self.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_scene_vertices_covers_full_frame() {
        let config = RenderConfig::default();
        // 101 circles (complexity 100) and a 700-point trace
        let max = config.max_scene_vertices(101, 700);

        let per_circle = 2 * config.circle_segments as usize + 6;
        assert_eq!(max, 101 * per_circle + 700 * 4 + 2);
    }

    #[test]
    fn test_recording_frame_count() {
        let config = RecordingConfig::new(2.5);
        assert_eq!(config.total_frames(), 150);
        assert_eq!(config.frames_dir(), "recording/frames");
    }
}
