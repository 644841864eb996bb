//! Epicycle core: harmonic series, chain evaluation, phase clock, and the
//! rolling trace of the chain tip.

mod chain;
mod clock;
mod harmonics;
mod system;
mod trace;

pub use chain::{evaluate, Segment};
pub use clock::PhaseClock;
pub use harmonics::{square_wave_harmonics, Harmonic};
pub use system::WaveSystem;
pub use trace::TraceBuffer;
