//! Command-line argument parsing.

use clap::Parser;

use crate::params::{ControlRanges, RecordingConfig, WaveParams};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Epicycler")]
#[command(about = "Fourier square-wave epicycle visualizer", long_about = None)]
pub struct Args {
    /// Phase advance per frame (0.001-0.02)
    #[arg(long, value_name = "RADIANS", default_value = "0.01")]
    pub speed: f32,

    /// Base radius of the fundamental circle (50-1000 canvas units)
    #[arg(long, value_name = "UNITS", default_value = "180")]
    pub zoom: f32,

    /// Harmonic count above the fundamental (0-100)
    #[arg(long, value_name = "COUNT", default_value = "10")]
    pub complexity: usize,

    /// Chain anchor X (0-1000 canvas units)
    #[arg(long, value_name = "UNITS", default_value = "200")]
    pub center_x: f32,

    /// Chain anchor Y (0-1000 canvas units)
    #[arg(long, value_name = "UNITS", default_value = "500")]
    pub center_y: f32,

    /// Trace buffer capacity (points of tip history kept on screen)
    #[arg(long, value_name = "POINTS", default_value = "350")]
    pub trace: usize,

    /// Record frames to PNG (duration in seconds)
    #[arg(long, value_name = "SECONDS")]
    pub record: Option<f32>,
}

impl Args {
    /// Build the initial wave parameters, clamped to the control ranges
    pub fn initial_params(&self, ranges: &ControlRanges) -> WaveParams {
        let speed = ranges.clamp_speed(self.speed);
        let base_radius = ranges.clamp_zoom(self.zoom);
        let complexity = ranges.clamp_complexity(self.complexity);
        let anchor = [
            ranges.clamp_center(self.center_x),
            ranges.clamp_center(self.center_y),
        ];

        if speed != self.speed || base_radius != self.zoom || complexity != self.complexity {
            eprintln!("Warning: some arguments were outside their ranges and were clamped");
        }

        WaveParams {
            speed,
            base_radius,
            complexity,
            anchor,
        }
    }

    /// Create recording configuration if recording mode is enabled
    pub fn create_recording_config(&self) -> Option<RecordingConfig> {
        self.record.map(|duration| {
            let config = RecordingConfig::new(duration);
            std::fs::create_dir_all(config.frames_dir())
                .expect("Failed to create frames directory");
            config
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_session() {
        let args = Args::parse_from(["epicycler"]);
        let params = args.initial_params(&ControlRanges::default());

        assert_eq!(params.speed, 0.01);
        assert_eq!(params.base_radius, 180.0);
        assert_eq!(params.complexity, 10);
        assert_eq!(params.anchor, [200.0, 500.0]);
        assert_eq!(args.trace, 350);
        assert!(args.record.is_none());
    }

    #[test]
    fn test_out_of_range_arguments_are_clamped() {
        let args = Args::parse_from([
            "epicycler",
            "--speed",
            "9.0",
            "--zoom",
            "5",
            "--complexity",
            "5000",
        ]);
        let ranges = ControlRanges::default();
        let params = args.initial_params(&ranges);

        assert_eq!(params.speed, ranges.speed_max);
        assert_eq!(params.base_radius, ranges.zoom_min);
        assert_eq!(params.complexity, ranges.complexity_max);
    }
}
