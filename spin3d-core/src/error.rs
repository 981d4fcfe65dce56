/// Error type shared by the core pipeline and the renderer adapters
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The point is on, behind, or too close to the viewer plane
    /// (`viewer_distance + z` below the near plane), so the perspective
    /// factor would be huge, infinite or negative.
    #[error("cannot project point at depth {depth}: it is not in front of the viewer")]
    DegenerateProjection { depth: f64 },

    #[error("face {face} references vertex {index}, which is out of range")]
    InvalidFace { face: usize, index: usize },

    #[error("edge {edge} references vertex {index}, which is out of range")]
    InvalidEdge { edge: usize, index: usize },

    /// Failure reported by a drawing surface.
    #[error("surface error: {0}")]
    Surface(String),
}
