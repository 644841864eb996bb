//! Square-wave harmonic series derivation.

use std::f32::consts::PI;

/// One term of the truncated Fourier series for a square wave
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Harmonic {
    /// Circle radius for this term (canvas units)
    pub radius: f32,

    /// Odd angular multiplier n = 2i + 1; this term rotates at n × phase
    pub multiplier: u32,
}

/// Compute the truncated square-wave series for a given base radius.
///
/// Returns `complexity + 1` terms in harmonic order. Term i carries
/// multiplier n = 2i + 1 and radius = base_radius · 4 / (n·π), the
/// magnitude of the i-th odd harmonic in the Fourier expansion of a
/// square wave with the base radius as fundamental amplitude.
pub fn square_wave_harmonics(base_radius: f32, complexity: usize) -> Vec<Harmonic> {
    (0..=complexity)
        .map(|i| {
            let n = (2 * i + 1) as u32;
            Harmonic {
                radius: base_radius * 4.0 / (n as f32 * PI),
                multiplier: n,
            }
        })
        .collect()
}
