/// Per-frame rotate-then-project pass over a vertex set
use nalgebra::Point3;

use crate::error::Result;
use crate::projection::{Camera, DepthMode};
use crate::transform::RotationState;

/// Rotate every vertex (X, then Y, then Z) and project it.
///
/// The output is index-aligned with `vertices`.
pub fn transform_vertices(
    vertices: &[Point3<f64>],
    rotation: &RotationState,
    camera: &Camera,
    mode: DepthMode,
) -> Result<Vec<Point3<f64>>> {
    vertices
        .iter()
        .map(|v| camera.project(&rotation.apply(v), mode))
        .collect()
}

/// Round a projected point to integer pixel coordinates.
///
/// Truncates toward zero, like an integer cast.
pub fn to_pixel(point: &Point3<f64>) -> (i32, i32) {
    (point.x as i32, point.y as i32)
}
