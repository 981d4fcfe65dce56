/// Static cube geometry: vertices, edges and colored faces
use nalgebra::Point3;

use crate::color::Rgb;
use crate::error::{Error, Result};

/// Corners of the cube centered at the origin, indexed 0..8.
///
/// 0..4 is the loop at z = -1, 4..8 the matching loop at z = +1.
pub const CUBE_VERTICES: [[f64; 3]; 8] = [
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    [-1.0, -1.0, 1.0],
];

/// A quadrilateral face: four vertex indices plus a fill color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub indices: [usize; 4],
    pub color: Rgb,
}

impl Face {
    pub const fn new(indices: [usize; 4], color: Rgb) -> Self {
        Self { indices, color }
    }
}

/// A line segment between two vertices
pub type Edge = (usize, usize);

/// Immutable vertex/edge/face tables consumed by the pipeline
#[derive(Debug, Clone)]
pub struct Model {
    pub vertices: Vec<Point3<f64>>,
    pub edges: Vec<Edge>,
    pub faces: Vec<Face>,
}

impl Model {
    /// The cube with its 12 edges and 6 colored faces.
    pub fn cube() -> Self {
        let vertices = CUBE_VERTICES
            .iter()
            .map(|&[x, y, z]| Point3::new(x, y, z))
            .collect();

        let mut edges = Vec::with_capacity(12);
        for i in 0..4 {
            // Near loop, connecting struts, far loop
            edges.push((i, (i + 1) % 4));
            edges.push((i, i + 4));
            edges.push((i + 4, (i + 1) % 4 + 4));
        }

        let faces = vec![
            Face::new([0, 1, 2, 3], Rgb::MAGENTA),
            Face::new([1, 5, 6, 2], Rgb::RED),
            Face::new([5, 4, 7, 6], Rgb::GREEN),
            Face::new([4, 0, 3, 7], Rgb::BLUE),
            Face::new([0, 4, 5, 1], Rgb::CYAN),
            Face::new([3, 2, 6, 7], Rgb::YELLOW),
        ];

        Self {
            vertices,
            edges,
            faces,
        }
    }

    /// Check that every edge and face refers to existing, distinct vertices.
    pub fn validate(&self) -> Result<()> {
        let count = self.vertices.len();
        for (face, f) in self.faces.iter().enumerate() {
            for (k, &index) in f.indices.iter().enumerate() {
                if index >= count || f.indices[..k].contains(&index) {
                    return Err(Error::InvalidFace { face, index });
                }
            }
        }
        for (edge, &(a, b)) in self.edges.iter().enumerate() {
            if let Some(index) = [a, b].into_iter().find(|&i| i >= count) {
                return Err(Error::InvalidEdge { edge, index });
            }
        }
        Ok(())
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::cube()
    }
}
