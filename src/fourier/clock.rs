//! Phase accumulator driven by the external frame loop.

/// Phase clock advanced once per rendered frame.
///
/// The phase grows without bound; only sin/cos of it are ever taken, so no
/// wrapping at 2π is needed. The increment is the user-facing "speed"
/// control and may change between ticks.
pub struct PhaseClock {
    phase: f32,
    increment: f32,
}

impl PhaseClock {
    pub fn new(increment: f32) -> Self {
        Self {
            phase: 0.0,
            increment,
        }
    }

    /// Advance the phase by one tick and return the new value
    pub fn tick(&mut self) -> f32 {
        self.phase += self.increment;
        self.phase
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn increment(&self) -> f32 {
        self.increment
    }

    /// Takes effect on the next tick
    pub fn set_increment(&mut self, increment: f32) {
        self.increment = increment;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_accumulates_increment() {
        let mut clock = PhaseClock::new(0.01);
        assert_eq!(clock.phase(), 0.0);

        clock.tick();
        clock.tick();
        clock.tick();
        assert!((clock.phase() - 0.03).abs() < 1e-6);
    }

    #[test]
    fn test_increment_change_applies_next_tick() {
        let mut clock = PhaseClock::new(0.5);
        clock.tick();
        clock.set_increment(0.25);
        clock.tick();
        assert!((clock.phase() - 0.75).abs() < 1e-6);
    }
}
