/// Axis rotations and the accumulated rotation state
use nalgebra::{Point3, Rotation3, Vector3};

/// Rotate a point about the X axis by `degrees`. X is unchanged.
pub fn rotate_x(point: &Point3<f64>, degrees: f64) -> Point3<f64> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), degrees.to_radians()) * point
}

/// Rotate a point about the Y axis by `degrees`. Y is unchanged.
pub fn rotate_y(point: &Point3<f64>, degrees: f64) -> Point3<f64> {
    Rotation3::from_axis_angle(&Vector3::y_axis(), degrees.to_radians()) * point
}

/// Rotate a point about the Z axis by `degrees`. Z is unchanged.
pub fn rotate_z(point: &Point3<f64>, degrees: f64) -> Point3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), degrees.to_radians()) * point
}

/// Rotation state around three axes (in degrees)
///
/// Angles accumulate without bound; the trigonometry wraps them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationState {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate by delta amounts (in degrees)
    pub fn rotate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    /// Rotate `point` about X, then Y, then Z.
    pub fn apply(&self, point: &Point3<f64>) -> Point3<f64> {
        let p = rotate_x(point, self.x);
        let p = rotate_y(&p, self.y);
        rotate_z(&p, self.z)
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: &Point3<f64>, b: &Point3<f64>) {
        assert!((a - b).norm() < EPS, "{a} != {b}");
    }

    fn samples() -> Vec<Point3<f64>> {
        vec![
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(-1.0, 1.0, -1.0),
            Point3::new(0.5, -4.0, 2.25),
            Point3::origin(),
        ]
    }

    const ANGLES: [f64; 6] = [-720.5, -90.0, 1.0, 30.0, 179.0, 1234.0];

    #[test]
    fn test_rotation_state() {
        let mut state = RotationState::zero();
        assert_eq!(state, RotationState::default());

        state.rotate(1.0, 2.0, 3.0);
        state.rotate(1.0, -4.0, 0.0);
        assert_eq!(state, RotationState::new(2.0, -2.0, 3.0));
    }

    #[test]
    fn test_identity_rotation() {
        for v in samples() {
            assert_close(&rotate_x(&v, 0.0), &v);
            assert_close(&rotate_y(&v, 0.0), &v);
            assert_close(&rotate_z(&v, 0.0), &v);
        }
        let state = RotationState::zero();
        for v in samples() {
            assert_close(&state.apply(&v), &v);
        }
    }

    #[test]
    fn test_quarter_turns() {
        let v = Point3::new(1.0, 2.0, 3.0);
        assert_close(&rotate_x(&v, 90.0), &Point3::new(1.0, -3.0, 2.0));
        assert_close(&rotate_y(&v, 90.0), &Point3::new(3.0, 2.0, -1.0));
        assert_close(&rotate_z(&v, 90.0), &Point3::new(-2.0, 1.0, 3.0));
    }

    #[test]
    fn test_rotations_are_invertible() {
        for v in samples() {
            for a in ANGLES {
                assert_close(&rotate_x(&rotate_x(&v, a), -a), &v);
                assert_close(&rotate_y(&rotate_y(&v, a), -a), &v);
                assert_close(&rotate_z(&rotate_z(&v, a), -a), &v);
            }
        }
    }

    #[test]
    fn test_rotations_preserve_magnitude() {
        for v in samples() {
            let len = v.coords.norm();
            for a in ANGLES {
                assert!((rotate_x(&v, a).coords.norm() - len).abs() < EPS);
                assert!((rotate_y(&v, a).coords.norm() - len).abs() < EPS);
                assert!((rotate_z(&v, a).coords.norm() - len).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_rotation_order_matters() {
        let v = Point3::new(1.0, 2.0, 3.0);
        let xy = rotate_x(&rotate_y(&v, 30.0), 10.0);
        let yx = rotate_y(&rotate_x(&v, 10.0), 30.0);
        assert!((xy - yx).norm() > 1e-3);
    }

    #[test]
    fn test_apply_rotates_x_then_y_then_z() {
        let state = RotationState::new(17.0, -42.0, 95.0);
        for v in samples() {
            let expected = rotate_z(&rotate_y(&rotate_x(&v, 17.0), -42.0), 95.0);
            assert_close(&state.apply(&v), &expected);
        }
        // Quarter turns: (1, 0, 0) -> X -> (1, 0, 0) -> Y -> (0, 0, -1) -> Z -> (0, 0, -1)
        let turned = RotationState::new(90.0, 90.0, 90.0).apply(&Point3::new(1.0, 0.0, 0.0));
        assert_close(&turned, &Point3::new(0.0, 0.0, -1.0));
    }
}
