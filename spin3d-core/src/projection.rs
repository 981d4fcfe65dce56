/// Camera and perspective projection
use nalgebra::Point3;

use crate::error::{Error, Result};

/// What a projected point keeps in its z coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthMode {
    /// z is set to 1. Used when nothing downstream needs depth.
    Discard,
    /// z keeps the rotated depth so faces can be sorted by it.
    Keep,
}

/// Closest distance in front of the viewer a point may be projected from.
pub const NEAR_PLANE: f64 = 1e-3;

/// Pinhole camera looking down +z from `viewer_distance` in front of the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub width: f64,
    pub height: f64,
    pub fov: f64,
    pub viewer_distance: f64,
}

impl Camera {
    pub fn new(width: u32, height: u32, fov: f64, viewer_distance: f64) -> Self {
        Self {
            width: width as f64,
            height: height as f64,
            fov,
            viewer_distance,
        }
    }

    /// Project a 3D point to screen space.
    ///
    /// `x` and `y` are pixel coordinates with the origin mapped to the
    /// viewport center and +y pointing up. Fails for points closer than
    /// [`NEAR_PLANE`] to the viewer or behind it, where the perspective
    /// factor blows up or flips sign.
    pub fn project(&self, point: &Point3<f64>, mode: DepthMode) -> Result<Point3<f64>> {
        let denom = self.viewer_distance + point.z;
        if denom.is_nan() || denom < NEAR_PLANE {
            return Err(Error::DegenerateProjection { depth: point.z });
        }
        let factor = self.fov / denom;
        if !factor.is_finite() {
            return Err(Error::DegenerateProjection { depth: point.z });
        }

        let x = point.x * factor + self.width / 2.0;
        let y = -point.y * factor + self.height / 2.0;
        let z = match mode {
            DepthMode::Discard => 1.0,
            DepthMode::Keep => point.z,
        };
        Ok(Point3::new(x, y, z))
    }

    pub fn project_discard_depth(&self, point: &Point3<f64>) -> Result<Point3<f64>> {
        self.project(point, DepthMode::Discard)
    }

    pub fn project_keep_depth(&self, point: &Point3<f64>) -> Result<Point3<f64>> {
        self.project(point, DepthMode::Keep)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(640, 480, 256.0, 4.0)
    }
}
