/// Draw-call interface a renderer adapter provides
use crate::color::Rgb;
use crate::error::Result;

/// A fixed-size RGB drawing target.
///
/// Coordinates are pixels with the origin at the top-left corner. Anything
/// outside the surface is clipped by the implementation.
pub trait Surface {
    /// Width and height in pixels.
    fn size(&self) -> (u32, u32);

    /// Clear the whole surface to `color`.
    fn fill(&mut self, color: Rgb);

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb);

    /// Straight line between two points with a stroke of `width` pixels.
    fn line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb, width: u32);

    /// Filled polygon through `points` in order.
    fn polygon(&mut self, points: &[(i32, i32)], color: Rgb);

    /// Publish everything drawn since the last call.
    fn present(&mut self) -> Result<()>;
}
