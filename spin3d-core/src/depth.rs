/// Painter's-algorithm face ordering by average depth
use nalgebra::Point3;

use crate::geometry::Face;

/// Mean z of the face's four projected corners.
pub fn average_depth(face: &Face, projected: &[Point3<f64>]) -> f64 {
    face.indices.iter().map(|&i| projected[i].z).sum::<f64>() / face.indices.len() as f64
}

/// Indices into `depths`, farthest (largest) first.
///
/// Stable: equal depths keep their original relative order.
pub fn back_to_front(depths: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..depths.len()).collect();
    order.sort_by(|&a, &b| depths[b].total_cmp(&depths[a]));
    order
}

/// Face indices in painting order for the given projected vertices.
///
/// `projected` must carry depth (see [`crate::DepthMode::Keep`]).
pub fn paint_order(faces: &[Face], projected: &[Point3<f64>]) -> Vec<usize> {
    let depths: Vec<f64> = faces.iter().map(|f| average_depth(f, projected)).collect();
    back_to_front(&depths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Model;
    use crate::pipeline::transform_vertices;
    use crate::projection::{Camera, DepthMode};
    use crate::transform::RotationState;

    #[test]
    fn test_descending_order() {
        assert_eq!(back_to_front(&[5.0, 1.0, 3.0, 2.0, 4.0, 0.0]), vec![0, 4, 2, 3, 1, 5]);
    }

    #[test]
    fn test_ties_keep_face_order() {
        assert_eq!(back_to_front(&[1.0, 2.0, 1.0, 2.0, 1.0]), vec![1, 3, 0, 2, 4]);
        assert_eq!(back_to_front(&[0.0; 4]), vec![0, 1, 2, 3]);
        assert!(back_to_front(&[]).is_empty());
    }

    #[test]
    fn test_average_depth() {
        let face = Face::new([0, 1, 2, 3], crate::Rgb::RED);
        let projected = [
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, 2.0),
            Point3::new(0.0, 0.0, 3.0),
            Point3::new(0.0, 0.0, 6.0),
        ];
        assert_eq!(average_depth(&face, &projected), 3.0);
    }

    #[test]
    fn test_unrotated_cube_paints_far_face_first() {
        let cube = Model::cube();
        let projected =
            transform_vertices(&cube.vertices, &RotationState::zero(), &Camera::default(), DepthMode::Keep)
                .unwrap();
        let order = paint_order(&cube.faces, &projected);

        // Back (z = +1) first, front (z = -1) last, the four sides tie at 0
        assert_eq!(order, vec![2, 1, 3, 4, 5, 0]);
    }

    #[test]
    fn test_half_turn_swaps_front_and_back() {
        let cube = Model::cube();
        let projected = transform_vertices(
            &cube.vertices,
            &RotationState::new(0.0, 180.0, 0.0),
            &Camera::default(),
            DepthMode::Keep,
        )
        .unwrap();
        let order = paint_order(&cube.faces, &projected);
        assert_eq!(order.first(), Some(&0));
        assert_eq!(order.last(), Some(&2));
    }
}
