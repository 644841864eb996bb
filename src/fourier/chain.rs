//! Epicycle chain evaluation.

use glam::Vec2;

use super::harmonics::Harmonic;

/// One circle of the epicycle chain at a given phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Circle center; equals the previous segment's terminal (or the anchor
    /// for the first segment)
    pub center: Vec2,

    /// Circle radius (canvas units)
    pub radius: f32,

    /// Point on the circle at angle multiplier × phase; the next segment's
    /// center
    pub terminal: Vec2,
}

/// Evaluate the epicycle chain at a given phase.
///
/// Each harmonic places a circle centered on the running tip of the chain
/// and advances the tip to `center + radius · (cos(n·phase), sin(n·phase))`.
/// Returns the segments in chain order plus the final tip, which traces the
/// square-wave approximation over time. An empty harmonics list yields the
/// anchor unchanged.
pub fn evaluate(anchor: Vec2, harmonics: &[Harmonic], phase: f32) -> (Vec<Segment>, Vec2) {
    let mut segments = Vec::with_capacity(harmonics.len());
    let mut tip = anchor;

    for h in harmonics {
        let angle = h.multiplier as f32 * phase;
        let center = tip;
        tip = center + h.radius * Vec2::new(angle.cos(), angle.sin());
        segments.push(Segment {
            center,
            radius: h.radius,
            terminal: tip,
        });
    }

    (segments, tip)
}
