//! Canvas projection: maps canvas units (y-down, origin top-left) to clip
//! space for the line pipeline.

use glam::Mat4;

/// Logical canvas tracking the window's inner size
pub struct Canvas {
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Follow a window resize; zero dimensions are ignored (minimized)
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.width = width;
            self.height = height;
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Orthographic projection with canvas units equal to logical pixels,
    /// (0,0) at the top-left and y growing downward
    pub fn projection(&self) -> Mat4 {
        Mat4::orthographic_rh(
            0.0,
            self.width as f32,
            self.height as f32,
            0.0,
            -1.0,
            1.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn test_corners_map_to_clip_extremes() {
        let canvas = Canvas::new(1280, 720);
        let proj = canvas.projection();

        let top_left = proj * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((top_left.x - -1.0).abs() < 1e-6);
        assert!((top_left.y - 1.0).abs() < 1e-6);

        let bottom_right = proj * Vec4::new(1280.0, 720.0, 0.0, 1.0);
        assert!((bottom_right.x - 1.0).abs() < 1e-6);
        assert!((bottom_right.y - -1.0).abs() < 1e-6);
    }

    #[test]
    fn test_y_axis_points_down() {
        let canvas = Canvas::new(100, 100);
        let proj = canvas.projection();

        let upper = proj * Vec4::new(50.0, 10.0, 0.0, 1.0);
        let lower = proj * Vec4::new(50.0, 90.0, 0.0, 1.0);
        assert!(upper.y > lower.y);
    }

    #[test]
    fn test_resize_ignores_zero_dimensions() {
        let mut canvas = Canvas::new(800, 600);
        canvas.resize(0, 0);
        assert_eq!(canvas.size(), (800, 600));

        canvas.resize(1024, 768);
        assert_eq!(canvas.size(), (1024, 768));
    }
}
