//! CPU tessellation of epicycle geometry into colored line-list vertices.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::fourier::{Segment, TraceBuffer};
use crate::params::RenderConfig;

/// Vertex data for the line-list pipeline (canvas position + color)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
    pub color: [f32; 3],
}

/// Chain circles, spokes, and connector (original palette: white on black)
pub const CHAIN_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Scrolling waveform trail
pub const TRACE_COLOR: [f32; 3] = [0.9, 0.1, 0.1];

/// Reusable vertex accumulator rebuilt each frame.
///
/// Every primitive is expressed as line segments so a single pipeline draws
/// the whole scene: circle outlines become chord polylines, point markers
/// become small crosses.
pub struct SceneBuffer {
    pub vertices: Vec<LineVertex>,
}

impl SceneBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    fn push_vertex(&mut self, position: Vec2, color: [f32; 3]) {
        self.vertices.push(LineVertex {
            position: position.to_array(),
            color,
        });
    }

    /// Append a line segment between two canvas points
    pub fn push_line(&mut self, a: Vec2, b: Vec2, color: [f32; 3]) {
        self.push_vertex(a, color);
        self.push_vertex(b, color);
    }

    /// Append a circle outline as `chords` line segments
    pub fn push_circle(&mut self, center: Vec2, radius: f32, chords: u32, color: [f32; 3]) {
        let step = std::f32::consts::TAU / chords as f32;
        let mut prev = center + Vec2::new(radius, 0.0);
        for i in 1..=chords {
            let angle = step * i as f32;
            let next = center + radius * Vec2::new(angle.cos(), angle.sin());
            self.push_line(prev, next, color);
            prev = next;
        }
    }

    /// Append a point marker as a small cross
    pub fn push_point(&mut self, p: Vec2, half_size: f32, color: [f32; 3]) {
        self.push_line(
            p - Vec2::new(half_size, 0.0),
            p + Vec2::new(half_size, 0.0),
            color,
        );
        self.push_line(
            p - Vec2::new(0.0, half_size),
            p + Vec2::new(0.0, half_size),
            color,
        );
    }

    /// Rebuild the frame's geometry from the chain and trace.
    ///
    /// Each chain segment contributes its circle outline, a center marker,
    /// and a spoke from center to terminal. Trace point i is drawn at
    /// (trace_lead + i, point.y) so the waveform scrolls as points arrive,
    /// with a connector line from the chain tip to the trace head.
    pub fn build_frame(
        &mut self,
        segments: &[Segment],
        terminal: Vec2,
        trace: &TraceBuffer,
        config: &RenderConfig,
    ) {
        self.vertices.clear();

        for seg in segments {
            self.push_circle(seg.center, seg.radius, config.circle_segments, CHAIN_COLOR);
            self.push_point(seg.center, config.point_half_size, CHAIN_COLOR);
            self.push_line(seg.center, seg.terminal, CHAIN_COLOR);
        }

        for (i, point) in trace.iter().enumerate() {
            let plotted = Vec2::new(config.trace_lead + i as f32, point.y);
            self.push_point(plotted, config.point_half_size, TRACE_COLOR);
            if i == 0 {
                self.push_line(terminal, plotted, CHAIN_COLOR);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fourier::{square_wave_harmonics, WaveSystem};
    use crate::params::WaveParams;

    #[test]
    fn test_line_contributes_two_vertices() {
        let mut scene = SceneBuffer::new(16);
        scene.push_line(Vec2::ZERO, Vec2::new(1.0, 1.0), CHAIN_COLOR);
        assert_eq!(scene.vertices.len(), 2);
        assert_eq!(scene.vertices[0].position, [0.0, 0.0]);
        assert_eq!(scene.vertices[1].position, [1.0, 1.0]);
    }

    #[test]
    fn test_circle_closes_on_itself() {
        let mut scene = SceneBuffer::new(256);
        scene.push_circle(Vec2::new(5.0, 5.0), 10.0, 64, CHAIN_COLOR);
        assert_eq!(scene.vertices.len(), 128);

        // Last chord ends where the first began
        let first = scene.vertices.first().unwrap().position;
        let last = scene.vertices.last().unwrap().position;
        assert!((first[0] - last[0]).abs() < 1e-3);
        assert!((first[1] - last[1]).abs() < 1e-3);
    }

    #[test]
    fn test_frame_vertex_budget() {
        let config = RenderConfig::default();
        let mut wave = WaveSystem::new(WaveParams::default(), 350);
        for _ in 0..400 {
            wave.update();
        }

        let mut scene = SceneBuffer::new(1024);
        scene.build_frame(wave.segments(), wave.terminal(), wave.trace(), &config);

        let max = config.max_scene_vertices(wave.segments().len(), wave.trace().capacity());
        assert!(scene.vertices.len() <= max);
        assert_eq!(
            scene.vertices.len(),
            // 11 circles + markers + spokes, full trace, one connector
            11 * (2 * config.circle_segments as usize + 6) + 350 * 4 + 2
        );
    }

    #[test]
    fn test_trace_points_scroll_from_lead() {
        let config = RenderConfig::default();
        let harmonics = square_wave_harmonics(180.0, 0);
        let (segments, terminal) = crate::fourier::evaluate(Vec2::ZERO, &harmonics, 0.0);

        let mut trace = TraceBuffer::new(8);
        trace.push(Vec2::new(0.0, 111.0)); // oldest
        trace.push(Vec2::new(0.0, 222.0)); // newest

        let mut scene = SceneBuffer::new(1024);
        scene.build_frame(&segments, terminal, &trace, &config);

        // First trace cross starts right after the chain geometry; the
        // newest point sits at the lead column, the older one unit back
        let chain_vertices = 2 * config.circle_segments as usize + 6;
        let head = scene.vertices[chain_vertices].position;
        assert_eq!(head[0], config.trace_lead - config.point_half_size);
        assert_eq!(head[1], 222.0);
    }
}
