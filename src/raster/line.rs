//! Line rasterization: incremental (DDA) and integer (Bresenham) walks

use crate::display::{PixelBuffer, Rgba};
use crate::geometry::Point;

/// Pixels of the incremental (DDA) line from (x0, y0) to (x1, y1), both ends
/// included. Steps once per pixel along the major axis and rounds the minor
/// coordinate to the nearest pixel.
pub fn dda_points(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        return vec![(x0, y0)];
    }

    let inv_steps = 1.0 / steps as f32;
    let x_inc = dx as f32 * inv_steps;
    let y_inc = dy as f32 * inv_steps;

    // Position is recomputed from the step index rather than accumulated,
    // so the last sample lands exactly on (x1, y1)
    (0..=steps)
        .map(|i| {
            let x = x0 as f32 + x_inc * i as f32;
            let y = y0 as f32 + y_inc * i as f32;
            (x.round() as i32, y.round() as i32)
        })
        .collect()
}

/// Pixels of the integer error-accumulator (Bresenham) line, both ends included
pub fn bresenham_points(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    let mut points = Vec::with_capacity(dx.max(-dy) as usize + 1);
    loop {
        points.push((x, y));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    points
}

impl PixelBuffer {
    /// Draw a line with the integer (Bresenham) walk
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, c: Rgba) {
        for (x, y) in bresenham_points(x0, y0, x1, y1) {
            self.set(x, y, c);
        }
    }

    /// Draw a line with the incremental (DDA) walk
    pub fn line_dda(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, c: Rgba) {
        for (x, y) in dda_points(x0, y0, x1, y1) {
            self.set(x, y, c);
        }
    }

    /// Connect consecutive points with lines, optionally closing the loop
    pub fn polyline(&mut self, points: &[Point], closed: bool, c: Rgba) {
        if points.len() < 2 {
            return;
        }
        for pair in points.windows(2) {
            let (x0, y0) = pair[0].to_pixel();
            let (x1, y1) = pair[1].to_pixel();
            self.line(x0, y0, x1, y1, c);
        }
        if closed {
            let (x0, y0) = points[points.len() - 1].to_pixel();
            let (x1, y1) = points[0].to_pixel();
            self.line(x0, y0, x1, y1, c);
        }
    }

    /// Closed outline through the rounded vertices
    pub fn stroke_polygon(&mut self, points: &[Point], c: Rgba) {
        self.polyline(points, true, c);
    }
}
