//! Scanline polygon fill built from horizontal spans only
//!
//! For each integer row between the rounded vertex extremes, every
//! non-horizontal edge whose half-open y range `[y_low, y_high)` contains the
//! row contributes one rounded x crossing. Crossings are sorted and paired
//! (even-odd), each pair becoming one inclusive span.

use crate::display::{PixelBuffer, Rgba};
use crate::geometry::Point;

/// One inclusive horizontal run of pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub y: i32,
    pub x0: i32,
    pub x1: i32,
}

impl Span {
    pub fn len(&self) -> i32 {
        self.x1 - self.x0 + 1
    }

    pub fn is_empty(&self) -> bool {
        self.x1 < self.x0
    }
}

/// Rounded vertical extent, or None when there is nothing to fill
fn row_range(points: &[Point]) -> Option<(i32, i32)> {
    if points.len() < 3 || points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return None;
    }
    let mut min_y = i32::MAX;
    let mut max_y = i32::MIN;
    for p in points {
        let y = p.y.round() as i32;
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    Some((min_y, max_y))
}

/// Collect the rounded x crossings of row `y` into `xs` (sorted)
fn row_crossings(points: &[Point], y: i32, xs: &mut Vec<i32>) {
    xs.clear();
    let yf = y as f32;
    let n = points.len();

    for i in 0..n {
        let (mut v0, mut v1) = (points[i], points[(i + 1) % n]);
        // Horizontal edges never cross a row
        if v0.y == v1.y {
            continue;
        }
        if v0.y > v1.y {
            std::mem::swap(&mut v0, &mut v1);
        }
        if yf < v0.y || yf >= v1.y {
            continue;
        }
        let t = (yf - v0.y) / (v1.y - v0.y);
        xs.push((v0.x + t * (v1.x - v0.x)).round() as i32);
    }

    xs.sort_unstable();
}

/// Pair sorted crossings into spans; an unpaired trailing crossing is dropped
fn pair_crossings(y: i32, xs: &[i32]) -> impl Iterator<Item = Span> + '_ {
    xs.chunks_exact(2).map(move |pair| Span {
        y,
        x0: pair[0],
        x1: pair[1],
    })
}

/// Run the scanline walk over rows `lo..=hi`, handing every span to `emit`
fn walk_spans(points: &[Point], lo: i32, hi: i32, mut emit: impl FnMut(Span)) {
    // Preallocate intersection buffer (reused per scanline)
    let mut xs = Vec::with_capacity(points.len());
    for y in lo..=hi {
        row_crossings(points, y, &mut xs);
        for span in pair_crossings(y, &xs) {
            emit(span);
        }
    }
}

/// All spans of a polygon, top to bottom in row order. Empty for fewer than
/// three vertices or non-finite coordinates.
pub fn scanline_spans(points: &[Point]) -> Vec<Span> {
    let mut spans = Vec::new();
    if let Some((lo, hi)) = row_range(points) {
        walk_spans(points, lo, hi, |s| spans.push(s));
    }
    spans
}

impl PixelBuffer {
    /// Fill a polygon (implicitly closed, even-odd) with horizontal spans
    pub fn fill_polygon(&mut self, points: &[Point], c: Rgba) {
        let Some((lo, hi)) = row_range(points) else {
            return;
        };
        // Rows outside the buffer would be dropped by hline anyway
        let lo = lo.max(0);
        let hi = hi.min(self.height() as i32 - 1);
        walk_spans(points, lo, hi, |s| self.hline(s.x0, s.x1, s.y, c));
    }

    /// Filled triangle through the generic polygon fill
    pub fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Rgba) {
        self.fill_polygon(&[a, b, c], color);
    }
}
