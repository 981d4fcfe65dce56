/// Demo settings: viewport, camera constants and pacing
use std::time::Duration;

use crate::projection::Camera;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Perspective strength; pixels per unit at depth 0 is `fov / viewer_distance`.
    pub fov: f64,
    pub viewer_distance: f64,
    /// Ticks per second the frame loop is capped to.
    pub tick_rate: u32,
    /// Degrees added to every axis each tick by the continuous variant.
    pub spin_step: f64,
    /// Degrees turned per handled direction key.
    pub key_step: f64,
}

impl Config {
    pub fn points() -> Self {
        Self {
            title: "Simulation of 3D Point Rotation".to_string(),
            ..Self::default()
        }
    }

    pub fn wireframe() -> Self {
        Self {
            title: "Simulation of 3D Cube Rotation".to_string(),
            ..Self::default()
        }
    }

    pub fn filled() -> Self {
        Self {
            title: "Simulation of 3D Cube Rotation (filled)".to_string(),
            ..Self::default()
        }
    }

    /// Resize the viewport, scaling the field of view so the model keeps
    /// the same share of the smaller dimension.
    pub fn fit_to(&self, width: u32, height: u32) -> Self {
        let sx = width as f64 / self.width as f64;
        let sy = height as f64 / self.height as f64;
        Self {
            width,
            height,
            fov: self.fov * sx.min(sy),
            ..self.clone()
        }
    }

    pub fn camera(&self) -> Camera {
        Camera::new(self.width, self.height, self.fov, self.viewer_distance)
    }

    /// Minimum time between two ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "spin3d".to_string(),
            width: 640,
            height: 480,
            fov: 256.0,
            viewer_distance: 4.0,
            tick_rate: 50,
            spin_step: 1.0,
            key_step: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::wireframe();
        assert_eq!((config.width, config.height), (640, 480));
        assert_eq!(config.camera(), Camera::new(640, 480, 256.0, 4.0));
        assert_eq!(config.tick_interval(), Duration::from_millis(20));
    }

    #[test]
    fn test_fit_to_smaller_surface() {
        let config = Config::points().fit_to(160, 96);
        assert_eq!((config.width, config.height), (160, 96));
        // Height is the tighter dimension: 96 / 480 = 0.2
        assert!((config.fov - 51.2).abs() < 1e-9);
        assert_eq!(config.title, Config::points().title);
    }

    #[test]
    fn test_zero_tick_rate_is_clamped() {
        let config = Config {
            tick_rate: 0,
            ..Config::default()
        };
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
    }
}
