//! Keyboard bindings for the five animation controls.
//!
//! The core exposes plain setters; this module is the input capability that
//! feeds them, clamping every adjustment to the documented control ranges.

use glam::Vec2;
use winit::keyboard::KeyCode;

use crate::fourier::WaveSystem;
use crate::params::{ControlRanges, WaveParams};

/// Apply a key press to the wave system. Returns true if the key was bound.
///
/// Bindings:
///   Up/Down        speed (phase per tick)
///   Right/Left     zoom (base radius)
///   ]/[            complexity (harmonic count)
///   W/A/S/D        anchor position
///   R              reset to defaults
pub fn apply_key(wave: &mut WaveSystem, ranges: &ControlRanges, key: KeyCode) -> bool {
    match key {
        KeyCode::ArrowUp => {
            let speed = ranges.clamp_speed(wave.params().speed + ranges.speed_step);
            wave.set_speed(speed);
            println!("Speed: {:.3}", speed);
        }
        KeyCode::ArrowDown => {
            let speed = ranges.clamp_speed(wave.params().speed - ranges.speed_step);
            wave.set_speed(speed);
            println!("Speed: {:.3}", speed);
        }
        KeyCode::ArrowRight => {
            let zoom = ranges.clamp_zoom(wave.params().base_radius + ranges.zoom_step);
            wave.set_base_radius(zoom);
            println!("Zoom: {:.0}", zoom);
        }
        KeyCode::ArrowLeft => {
            let zoom = ranges.clamp_zoom(wave.params().base_radius - ranges.zoom_step);
            wave.set_base_radius(zoom);
            println!("Zoom: {:.0}", zoom);
        }
        KeyCode::BracketRight => {
            let complexity = ranges.clamp_complexity(wave.params().complexity + 1);
            wave.set_complexity(complexity);
            println!("Complexity: {}", complexity);
        }
        KeyCode::BracketLeft => {
            let complexity = wave.params().complexity.saturating_sub(1);
            wave.set_complexity(complexity);
            println!("Complexity: {}", complexity);
        }
        KeyCode::KeyA => nudge_anchor(wave, ranges, -ranges.center_step, 0.0),
        KeyCode::KeyD => nudge_anchor(wave, ranges, ranges.center_step, 0.0),
        KeyCode::KeyW => nudge_anchor(wave, ranges, 0.0, -ranges.center_step),
        KeyCode::KeyS => nudge_anchor(wave, ranges, 0.0, ranges.center_step),
        KeyCode::KeyR => {
            let defaults = WaveParams::default();
            wave.set_speed(defaults.speed);
            wave.set_base_radius(defaults.base_radius);
            wave.set_complexity(defaults.complexity);
            wave.set_anchor(Vec2::from_array(defaults.anchor));
            println!("Controls reset to defaults");
        }
        _ => return false,
    }
    true
}

fn nudge_anchor(wave: &mut WaveSystem, ranges: &ControlRanges, dx: f32, dy: f32) {
    let [x, y] = wave.params().anchor;
    let anchor = Vec2::new(
        ranges.clamp_center(x + dx),
        ranges.clamp_center(y + dy),
    );
    wave.set_anchor(anchor);
    println!("Center: ({:.0}, {:.0})", anchor.x, anchor.y);
}

/// Key binding summary printed at startup
pub fn print_bindings() {
    println!("Controls:");
    println!("  Up/Down      speed");
    println!("  Left/Right   zoom");
    println!("  [ / ]        complexity");
    println!("  W/A/S/D      move center");
    println!("  R            reset");
    println!("  ESC          quit");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_wave() -> WaveSystem {
        WaveSystem::new(WaveParams::default(), 350)
    }

    #[test]
    fn test_speed_keys_adjust_within_range() {
        let mut wave = test_wave();
        let ranges = ControlRanges::default();

        assert!(apply_key(&mut wave, &ranges, KeyCode::ArrowUp));
        assert!((wave.params().speed - 0.011).abs() < 1e-6);

        // Hold the key far past the limit: value saturates
        for _ in 0..100 {
            apply_key(&mut wave, &ranges, KeyCode::ArrowUp);
        }
        assert_eq!(wave.params().speed, ranges.speed_max);

        for _ in 0..100 {
            apply_key(&mut wave, &ranges, KeyCode::ArrowDown);
        }
        assert_eq!(wave.params().speed, ranges.speed_min);
    }

    #[test]
    fn test_complexity_keys_saturate_at_zero_and_max() {
        let mut wave = test_wave();
        let ranges = ControlRanges::default();

        for _ in 0..200 {
            apply_key(&mut wave, &ranges, KeyCode::BracketLeft);
        }
        assert_eq!(wave.params().complexity, 0);

        for _ in 0..200 {
            apply_key(&mut wave, &ranges, KeyCode::BracketRight);
        }
        assert_eq!(wave.params().complexity, ranges.complexity_max);
    }

    #[test]
    fn test_anchor_keys_move_and_clamp() {
        let mut wave = test_wave();
        let ranges = ControlRanges::default();

        apply_key(&mut wave, &ranges, KeyCode::KeyD);
        assert_eq!(wave.params().anchor, [210.0, 500.0]);

        for _ in 0..200 {
            apply_key(&mut wave, &ranges, KeyCode::KeyW);
        }
        assert_eq!(wave.params().anchor[1], ranges.center_min);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut wave = test_wave();
        let ranges = ControlRanges::default();

        apply_key(&mut wave, &ranges, KeyCode::ArrowUp);
        apply_key(&mut wave, &ranges, KeyCode::BracketRight);
        apply_key(&mut wave, &ranges, KeyCode::KeyS);
        assert!(apply_key(&mut wave, &ranges, KeyCode::KeyR));

        let defaults = WaveParams::default();
        assert_eq!(wave.params().speed, defaults.speed);
        assert_eq!(wave.params().complexity, defaults.complexity);
        assert_eq!(wave.params().anchor, defaults.anchor);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut wave = test_wave();
        let ranges = ControlRanges::default();
        assert!(!apply_key(&mut wave, &ranges, KeyCode::KeyZ));
    }
}
