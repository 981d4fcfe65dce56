/// Draw routines for each demo variant
use nalgebra::Point3;

use crate::color::Rgb;
use crate::depth::paint_order;
use crate::geometry::{Edge, Face};
use crate::pipeline::to_pixel;
use crate::surface::Surface;

/// Side of the square drawn for each point.
pub const POINT_SIZE: u32 = 2;
/// Stroke width of wireframe edges.
pub const EDGE_WIDTH: u32 = 2;

/// White dots on black.
pub fn draw_points<S: Surface + ?Sized>(surface: &mut S, projected: &[Point3<f64>]) {
    surface.fill(Rgb::BLACK);
    for p in projected {
        let (x, y) = to_pixel(p);
        surface.fill_rect(x, y, POINT_SIZE, POINT_SIZE, Rgb::WHITE);
    }
}

/// Black edges over the background color.
pub fn draw_wireframe<S: Surface + ?Sized>(
    surface: &mut S,
    background: Rgb,
    edges: &[Edge],
    projected: &[Point3<f64>],
) {
    surface.fill(background);
    for &(a, b) in edges {
        surface.line(to_pixel(&projected[a]), to_pixel(&projected[b]), Rgb::BLACK, EDGE_WIDTH);
    }
}

/// Solid faces painted back to front over the background color.
///
/// `projected` must keep depth. Overlaps that average depth cannot order
/// (near ties, interpenetrating faces) may paint in the wrong order.
pub fn draw_filled<S: Surface + ?Sized>(
    surface: &mut S,
    background: Rgb,
    faces: &[Face],
    projected: &[Point3<f64>],
) {
    surface.fill(background);
    for i in paint_order(faces, projected) {
        let face = &faces[i];
        let points = face.indices.map(|v| to_pixel(&projected[v]));
        surface.polygon(&points, face.color);
    }
}
