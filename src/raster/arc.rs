//! Circular arc sampling by trigonometry
//!
//! Angles are in degrees, measured counter-clockwise from +x in y-up
//! coordinates. Samples are spaced roughly one pixel of arc length apart.

use crate::display::{PixelBuffer, Rgba};
use crate::geometry::Point;

/// Fewest samples any arc gets, so tiny radii still produce a usable polygon
pub const MIN_ARC_STEPS: usize = 6;

/// Most samples any arc gets; longer arcs are sampled more coarsely
pub const MAX_ARC_STEPS: usize = 1 << 16;

/// How the sampler travels from the start angle to the end angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArcSweep {
    /// Linear from start to end: 30 -> 300 sweeps 270 degrees counter-clockwise,
    /// 300 -> 30 sweeps 270 degrees clockwise
    #[default]
    Direct,
    /// Take the shorter way around the circle. Exactly opposite angles
    /// sweep in the increasing-angle direction.
    Shortest,
}

/// Signed shortest angular difference from `a` to `b`, in (-180, 180]
pub fn shortest_delta(a: f32, b: f32) -> f32 {
    let delta = (b - a).rem_euclid(360.0);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

/// Interpolate between two angles along the shorter path; `t` is clamped to 0..1
pub fn lerp_angle(a: f32, b: f32, t: f32) -> f32 {
    a + shortest_delta(a, b) * t.clamp(0.0, 1.0)
}

/// Sample count for an arc: `max(6, ceil(radians(span) * radius))`, capped
/// at [`MAX_ARC_STEPS`]
pub fn arc_steps(radius: f32, span_deg: f32) -> usize {
    let arc_len = span_deg.abs().to_radians() * radius;
    if arc_len.is_nan() {
        return MIN_ARC_STEPS;
    }
    (arc_len.ceil().clamp(0.0, MAX_ARC_STEPS as f32) as usize).max(MIN_ARC_STEPS)
}

/// Boundary points of an arc, `steps + 1` of them, start and end included.
/// Empty when the radius is zero, negative or NaN.
pub fn arc_points(
    center: Point,
    radius: f32,
    start_deg: f32,
    end_deg: f32,
    sweep: ArcSweep,
) -> Vec<Point> {
    if radius.is_nan() || radius <= 0.0 {
        return Vec::new();
    }

    let span = match sweep {
        ArcSweep::Direct => end_deg - start_deg,
        ArcSweep::Shortest => shortest_delta(start_deg, end_deg),
    };
    sample_arc(center, radius, start_deg, span, arc_steps(radius, span))
}

/// `steps + 1` samples from `start_deg` through `start_deg + span_deg`.
/// Shapes that pair two arcs use this to give both the same sample count.
pub(crate) fn sample_arc(
    center: Point,
    radius: f32,
    start_deg: f32,
    span_deg: f32,
    steps: usize,
) -> Vec<Point> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| {
            let t = i as f32 / steps as f32;
            let (s, c) = (start_deg + span_deg * t).to_radians().sin_cos();
            Point::new(center.x + radius * c, center.y + radius * s)
        })
        .collect()
}

impl PixelBuffer {
    /// Plot each arc sample as a single rounded pixel
    pub fn arc(
        &mut self,
        center: Point,
        radius: f32,
        start_deg: f32,
        end_deg: f32,
        sweep: ArcSweep,
        c: Rgba,
    ) {
        for p in arc_points(center, radius, start_deg, end_deg, sweep) {
            let (x, y) = p.to_pixel();
            self.set(x, y, c);
        }
    }

    /// Arc drawn as `segments` connected line pieces (gap-free at any radius)
    pub fn arc_polyline(
        &mut self,
        center: Point,
        radius: f32,
        start_deg: f32,
        end_deg: f32,
        segments: usize,
        c: Rgba,
    ) {
        if radius.is_nan() || radius <= 0.0 || segments == 0 {
            return;
        }
        let points = sample_arc(center, radius, start_deg, end_deg - start_deg, segments);
        self.polyline(&points, false, c);
    }
}
