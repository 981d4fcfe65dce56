/// Half-block RGB rasterizer for terminal rendering
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use spin3d_core::{Error, Rgb, Surface};
use std::io::Write;

/// Upper half block: foreground paints the top pixel, background the bottom.
const HALF_BLOCK: char = '▀';

/// Framebuffer with two pixels per terminal cell, stacked vertically
pub struct TerminalSurface<W: Write> {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
    out: W,
    inline: bool,
}

impl<W: Write> TerminalSurface<W> {
    /// Surface covering `columns` x `rows` cells.
    pub fn new(columns: u16, rows: u16, out: W) -> Self {
        let width = columns as usize;
        let height = rows as usize * 2;
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width * height],
            out,
            inline: false,
        }
    }

    /// Surface that writes rows one after another from the current cursor
    /// position instead of addressing the screen.
    pub fn inline(columns: u16, rows: u16, out: W) -> Self {
        Self {
            inline: true,
            ..Self::new(columns, rows, out)
        }
    }

    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.width = columns as usize;
        self.height = rows as usize * 2;
        self.pixels = vec![Rgb::BLACK; self.width * self.height];
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.pixels[y as usize * self.width + x as usize] = color;
        }
    }

    fn fill_triangle(&mut self, v0: (f32, f32), v1: (f32, f32), v2: (f32, f32), color: Rgb) {
        if self.width == 0 || self.height == 0 {
            return;
        }

        // Bounding box
        let min_x = v0.0.min(v1.0).min(v2.0).floor() as i32;
        let max_x = v0.0.max(v1.0).max(v2.0).ceil() as i32;
        let min_y = v0.1.min(v1.1).min(v2.1).floor() as i32;
        let max_y = v0.1.max(v1.1).max(v2.1).ceil() as i32;

        // Clip to screen bounds
        let min_x = min_x.max(0);
        let max_x = max_x.min(self.width as i32 - 1);
        let min_y = min_y.max(0);
        let max_y = max_y.min(self.height as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = (x as f32 + 0.5, y as f32 + 0.5);
                if let Some((w0, w1, w2)) = barycentric(v0, v1, v2, p) {
                    if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                        self.set(x, y, color);
                    }
                }
            }
        }
    }

    fn write_frame(&mut self) -> std::io::Result<()> {
        let mut last: Option<(Rgb, Rgb)> = None;
        for row in 0..self.height / 2 {
            if !self.inline {
                self.out.queue(cursor::MoveTo(0, row as u16))?;
            } else if row > 0 {
                self.out.queue(ResetColor)?.queue(Print("\r\n"))?;
                last = None;
            }
            for x in 0..self.width {
                let top = self.pixels[2 * row * self.width + x];
                let bottom = self.pixels[(2 * row + 1) * self.width + x];
                if last != Some((top, bottom)) {
                    self.out.queue(SetForegroundColor(to_color(top)))?;
                    self.out.queue(SetBackgroundColor(to_color(bottom)))?;
                    last = Some((top, bottom));
                }
                self.out.queue(Print(HALF_BLOCK))?;
            }
        }
        self.out.queue(ResetColor)?;
        self.out.flush()
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn size(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }

    fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(width as i32).min(self.width as i32);
        let y1 = y.saturating_add(height as i32).min(self.height as i32);
        for py in y0..y1 {
            for px in x0..x1 {
                self.pixels[py as usize * self.width + px as usize] = color;
            }
        }
    }

    /// Bresenham, stamping a square brush of the stroke width at each step.
    ///
    /// The segment is first clipped to the surface grown by the brush size,
    /// so far off-screen endpoints cost nothing.
    fn line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb, width: u32) {
        let width = width.max(1);
        let offset = (width as i32 - 1) / 2;

        let margin = width as i64;
        let min = (-margin, -margin);
        let max = (self.width as i64 + margin, self.height as i64 + margin);
        let Some(((mut x0, mut y0), (x1, y1))) = clip_segment(from, to, min, max) else {
            return;
        };

        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            if width == 1 {
                self.set(x0, y0, color);
            } else {
                self.fill_rect(x0 - offset, y0 - offset, width, width, color);
            }
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Fan-triangulates from the first point; exact for convex polygons.
    fn polygon(&mut self, points: &[(i32, i32)], color: Rgb) {
        let to_f = |(x, y): (i32, i32)| (x as f32, y as f32);
        let Some((&first, rest)) = points.split_first() else {
            return;
        };
        for pair in rest.windows(2) {
            self.fill_triangle(to_f(first), to_f(pair[0]), to_f(pair[1]), color);
        }
    }

    fn present(&mut self) -> spin3d_core::Result<()> {
        self.write_frame().map_err(|e| Error::Surface(e.to_string()))
    }
}

fn to_color(c: Rgb) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const TOP: u8 = 4;
const BOTTOM: u8 = 8;

fn outcode((x, y): (i64, i64), min: (i64, i64), max: (i64, i64)) -> u8 {
    let mut code = INSIDE;
    if x < min.0 {
        code |= LEFT;
    } else if x > max.0 {
        code |= RIGHT;
    }
    if y < min.1 {
        code |= TOP;
    } else if y > max.1 {
        code |= BOTTOM;
    }
    code
}

/// Cohen-Sutherland clip of a segment to the box `min..=max`.
///
/// Intersections are rounded toward zero, so a clipped end may sit a pixel
/// off the ideal line. Returns `None` if the segment misses the box.
fn clip_segment(
    from: (i32, i32),
    to: (i32, i32),
    min: (i64, i64),
    max: (i64, i64),
) -> Option<((i32, i32), (i32, i32))> {
    let mut a = (from.0 as i64, from.1 as i64);
    let mut b = (to.0 as i64, to.1 as i64);
    let mut code_a = outcode(a, min, max);
    let mut code_b = outcode(b, min, max);

    // Each pass moves one end onto a box edge; four passes per end suffice
    for _ in 0..8 {
        if code_a | code_b == INSIDE {
            return Some(((a.0 as i32, a.1 as i32), (b.0 as i32, b.1 as i32)));
        }
        if code_a & code_b != INSIDE {
            return None;
        }

        let code = if code_a != INSIDE { code_a } else { code_b };
        let (x0, y0) = (a.0 as i128, a.1 as i128);
        let (x1, y1) = (b.0 as i128, b.1 as i128);
        let p = if code & TOP != 0 {
            let y = min.1 as i128;
            (x0 + (x1 - x0) * (y - y0) / (y1 - y0), y)
        } else if code & BOTTOM != 0 {
            let y = max.1 as i128;
            (x0 + (x1 - x0) * (y - y0) / (y1 - y0), y)
        } else if code & LEFT != 0 {
            let x = min.0 as i128;
            (x, y0 + (y1 - y0) * (x - x0) / (x1 - x0))
        } else {
            let x = max.0 as i128;
            (x, y0 + (y1 - y0) * (x - x0) / (x1 - x0))
        };
        let p = (p.0 as i64, p.1 as i64);

        if code == code_a {
            a = p;
            code_a = outcode(a, min, max);
        } else {
            b = p;
            code_b = outcode(b, min, max);
        }
    }
    None
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    v0: (f32, f32),
    v1: (f32, f32),
    v2: (f32, f32),
    p: (f32, f32),
) -> Option<(f32, f32, f32)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(columns: u16, rows: u16) -> TerminalSurface<Vec<u8>> {
        TerminalSurface::new(columns, rows, Vec::new())
    }

    fn count(s: &TerminalSurface<Vec<u8>>, color: Rgb) -> usize {
        s.pixels.iter().filter(|&&p| p == color).count()
    }

    #[test]
    fn test_size_doubles_rows() {
        let s = surface(80, 24);
        assert_eq!(s.size(), (80, 48));
    }

    #[test]
    fn test_fill_rect_is_clipped() {
        let mut s = surface(10, 5);
        s.fill_rect(8, -1, 4, 3, Rgb::WHITE);
        // Columns 8..10, rows 0..2
        assert_eq!(count(&s, Rgb::WHITE), 4);
        assert_eq!(s.pixel(9, 1), Some(Rgb::WHITE));
        assert_eq!(s.pixel(9, 2), Some(Rgb::BLACK));
        assert_eq!(s.pixel(10, 0), None);
    }

    #[test]
    fn test_thin_line_hits_both_ends() {
        let mut s = surface(20, 10);
        s.line((1, 1), (15, 7), Rgb::RED, 1);
        assert_eq!(s.pixel(1, 1), Some(Rgb::RED));
        assert_eq!(s.pixel(15, 7), Some(Rgb::RED));
        // One pixel per step along the major axis
        assert_eq!(count(&s, Rgb::RED), 15);
    }

    #[test]
    fn test_wide_line() {
        let mut s = surface(20, 10);
        s.line((2, 5), (10, 5), Rgb::RED, 2);
        for x in 2..=11 {
            assert_eq!(s.pixel(x, 5), Some(Rgb::RED));
            assert_eq!(s.pixel(x, 6), Some(Rgb::RED));
        }
        assert_eq!(count(&s, Rgb::RED), 20);
    }

    #[test]
    fn test_line_off_screen_does_not_panic() {
        let mut s = surface(4, 2);
        s.line((-50, -50), (50, 50), Rgb::GREEN, 2);
        assert_eq!(s.pixel(0, 0), Some(Rgb::GREEN));
    }

    #[test]
    fn test_line_with_far_endpoints_is_clipped() {
        let mut s = surface(20, 10);
        s.line((i32::MIN, 3), (i32::MAX, 3), Rgb::RED, 2);
        for x in 0..20 {
            assert_eq!(s.pixel(x, 3), Some(Rgb::RED));
            assert_eq!(s.pixel(x, 4), Some(Rgb::RED));
        }
        assert_eq!(count(&s, Rgb::RED), 40);

        let mut s = surface(20, 10);
        s.line((i32::MIN, i32::MIN), (i32::MAX, i32::MAX), Rgb::GREEN, 1);
        assert_eq!(s.pixel(0, 0), Some(Rgb::GREEN));
        assert_eq!(s.pixel(19, 19), Some(Rgb::GREEN));
        assert_eq!(count(&s, Rgb::GREEN), 20);
    }

    #[test]
    fn test_line_missing_the_surface_draws_nothing() {
        let mut s = surface(20, 10);
        s.line((-1_000_000_000, -50), (1_000_000_000, -60), Rgb::RED, 2);
        s.line((i32::MAX, 0), (i32::MAX, 5), Rgb::RED, 2);
        assert_eq!(count(&s, Rgb::RED), 0);
    }

    #[test]
    fn test_clip_segment() {
        let clipped = clip_segment((-10, 5), (30, 5), (0, 0), (20, 20));
        assert_eq!(clipped, Some(((0, 5), (20, 5))));
        assert_eq!(clip_segment((2, 3), (4, 5), (0, 0), (20, 20)), Some(((2, 3), (4, 5))));
        assert_eq!(clip_segment((-5, -5), (-1, 30), (0, 0), (20, 20)), None);
    }

    #[test]
    fn test_polygon_fills_square() {
        let mut s = surface(20, 10);
        s.polygon(&[(2, 2), (12, 2), (12, 12), (2, 12)], Rgb::BLUE);
        assert_eq!(count(&s, Rgb::BLUE), 100);
        assert_eq!(s.pixel(7, 7), Some(Rgb::BLUE));
        assert_eq!(s.pixel(12, 7), Some(Rgb::BLACK));
    }

    #[test]
    fn test_polygon_winding_does_not_matter() {
        let mut cw = surface(20, 10);
        let mut ccw = surface(20, 10);
        cw.polygon(&[(2, 2), (12, 2), (12, 12), (2, 12)], Rgb::CYAN);
        ccw.polygon(&[(2, 12), (12, 12), (12, 2), (2, 2)], Rgb::CYAN);
        assert_eq!(cw.pixels, ccw.pixels);
    }

    #[test]
    fn test_degenerate_polygons() {
        let mut s = surface(10, 5);
        s.polygon(&[], Rgb::YELLOW);
        s.polygon(&[(1, 1), (5, 5)], Rgb::YELLOW);
        s.polygon(&[(1, 1), (3, 3), (5, 5)], Rgb::YELLOW);
        assert_eq!(count(&s, Rgb::YELLOW), 0);
    }

    #[test]
    fn test_present_writes_one_glyph_per_cell() {
        let mut s = surface(6, 3);
        s.fill(Rgb::MAGENTA);
        s.present().unwrap();
        let out = String::from_utf8(s.writer().clone()).unwrap();
        assert_eq!(out.chars().filter(|&c| c == HALF_BLOCK).count(), 18);
        // Uniform frame: colors are set once
        assert_eq!(out.matches("38;2;255;0;255").count(), 1);
    }

    #[test]
    fn test_inline_present_uses_line_breaks() {
        let mut s = TerminalSurface::inline(4, 3, Vec::new());
        s.present().unwrap();
        let out = String::from_utf8(s.writer().clone()).unwrap();
        assert_eq!(out.matches("\r\n").count(), 2);
        assert!(!out.contains('H'));
    }

    #[test]
    fn test_barycentric() {
        let w = barycentric((0.0, 0.0), (4.0, 0.0), (0.0, 4.0), (1.0, 1.0)).unwrap();
        assert!((w.0 - 0.5).abs() < 1e-6);
        assert!((w.1 - 0.25).abs() < 1e-6);
        assert!((w.2 - 0.25).abs() < 1e-6);
        assert!(barycentric((0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (1.0, 1.0)).is_none());
    }
}
