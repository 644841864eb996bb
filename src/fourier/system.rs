//! High-level wave system tying the clock, chain, and trace together.

use glam::Vec2;

use super::chain::{self, Segment};
use super::clock::PhaseClock;
use super::harmonics::{square_wave_harmonics, Harmonic};
use super::trace::TraceBuffer;
use crate::params::WaveParams;

/// Per-session animation state: parameters, the cached harmonic series,
/// the phase clock, and the rolling trace of the chain tip.
///
/// Owned by the application for exactly one session; the trace is never
/// shared or global. `update` runs one tick → evaluate → record cycle and
/// is driven solely by the external frame loop.
pub struct WaveSystem {
    params: WaveParams,
    harmonics: Vec<Harmonic>,
    clock: PhaseClock,
    trace: TraceBuffer,
    segments: Vec<Segment>,
    terminal: Vec2,
}

impl WaveSystem {
    /// Create a new wave system with the given parameters and trace capacity
    pub fn new(params: WaveParams, trace_capacity: usize) -> Self {
        let harmonics = square_wave_harmonics(params.base_radius, params.complexity);
        let clock = PhaseClock::new(params.speed);
        let anchor = Vec2::from_array(params.anchor);

        Self {
            params,
            harmonics,
            clock,
            trace: TraceBuffer::new(trace_capacity),
            segments: Vec::new(),
            terminal: anchor,
        }
    }

    /// Run one animation tick: advance the phase, re-evaluate the chain,
    /// and record the new tip in the trace.
    ///
    /// Parameter changes made since the previous tick are observed here;
    /// the frame loop calls this exactly once per rendered frame.
    pub fn update(&mut self) {
        let phase = self.clock.tick();
        let anchor = Vec2::from_array(self.params.anchor);

        let (segments, terminal) = chain::evaluate(anchor, &self.harmonics, phase);
        self.segments = segments;
        self.terminal = terminal;
        self.trace.push(terminal);
    }

    /// Chain geometry from the most recent update
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Chain tip from the most recent update
    pub fn terminal(&self) -> Vec2 {
        self.terminal
    }

    /// Rolling tip history, newest-first
    pub fn trace(&self) -> &TraceBuffer {
        &self.trace
    }

    pub fn params(&self) -> &WaveParams {
        &self.params
    }

    pub fn phase(&self) -> f32 {
        self.clock.phase()
    }

    /// Set the phase advance per tick (the "Speed" control)
    pub fn set_speed(&mut self, speed: f32) {
        self.params.speed = speed;
        self.clock.set_increment(speed);
    }

    /// Set the fundamental amplitude (the "Zoom" control)
    pub fn set_base_radius(&mut self, base_radius: f32) {
        self.params.base_radius = base_radius;
        self.rebuild_harmonics();
    }

    /// Set the harmonic count above the fundamental
    pub fn set_complexity(&mut self, complexity: usize) {
        self.params.complexity = complexity;
        self.rebuild_harmonics();
    }

    /// Set the chain anchor (the "Center X"/"Center Y" controls)
    pub fn set_anchor(&mut self, anchor: Vec2) {
        self.params.anchor = anchor.to_array();
    }

    fn rebuild_harmonics(&mut self) {
        self.harmonics = square_wave_harmonics(self.params.base_radius, self.params.complexity);
    }
}
