//! Filled curved shapes composed from arc samples and the scanline fill
//!
//! Descriptors are plain parameter bundles built per draw call. Everything
//! except the circle goes through [`PixelBuffer::fill_polygon`]; the circle
//! uses mirrored half-chord spans.

use serde::{Deserialize, Serialize};

use super::arc::{arc_points, arc_steps, sample_arc, ArcSweep, MIN_ARC_STEPS};
use crate::display::{PixelBuffer, Rgba};
use crate::geometry::{Point, Polygon, Rect};
use crate::math2d::Mat3;

/// A closed outline that can be scanline filled
pub trait Shape {
    /// Boundary polygon; empty when the shape is degenerate
    fn polygon(&self) -> Polygon;

    fn fill(&self, buffer: &mut PixelBuffer, c: Rgba) {
        buffer.fill_polygon(&self.polygon().vertices, c);
    }
}

impl Shape for Rect {
    fn polygon(&self) -> Polygon {
        Polygon::from_vertices(vec![
            Point::new(self.x, self.y),
            Point::new(self.x_max(), self.y),
            Point::new(self.x_max(), self.y_max()),
            Point::new(self.x, self.y_max()),
        ])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

impl Shape for Circle {
    /// Full arc-sampled ring, for callers that want the generic fill
    fn polygon(&self) -> Polygon {
        Polygon::from_vertices(arc_points(
            self.center,
            self.radius,
            0.0,
            360.0,
            ArcSweep::Direct,
        ))
    }

    fn fill(&self, buffer: &mut PixelBuffer, c: Rgba) {
        if self.radius.is_nan() || self.radius <= 0.0 {
            return;
        }
        let (cx, cy) = self.center.to_pixel();
        // Radii under half a pixel round to 0 and draw nothing
        buffer.fill_circle(cx, cy, self.radius.round() as i32, c);
    }
}

/// Region bounded by two radii and the arc between them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieWedge {
    pub center: Point,
    pub radius: f32,
    pub start_deg: f32,
    pub end_deg: f32,
}

impl Shape for PieWedge {
    /// center, arc start..end, center
    fn polygon(&self) -> Polygon {
        if self.end_deg == self.start_deg {
            return Polygon::new();
        }
        let arc = arc_points(
            self.center,
            self.radius,
            self.start_deg,
            self.end_deg,
            ArcSweep::Direct,
        );
        if arc.is_empty() {
            return Polygon::new();
        }
        let mut vertices = Vec::with_capacity(arc.len() + 2);
        vertices.push(self.center);
        vertices.extend(arc);
        vertices.push(self.center);
        Polygon::from_vertices(vertices)
    }
}

/// Annular slice between an inner and an outer radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingSegment {
    pub center: Point,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub start_deg: f32,
    pub end_deg: f32,
}

impl Shape for RingSegment {
    /// Outer arc start..end, then inner arc end..start
    fn polygon(&self) -> Polygon {
        let outer = self.outer_radius;
        let span = self.end_deg - self.start_deg;
        if outer.is_nan() || outer <= 0.0 || outer <= self.inner_radius || span == 0.0 {
            return Polygon::new();
        }
        let inner_radius = self.inner_radius.max(0.0);
        let steps = arc_steps(self.outer_radius, span);

        let mut vertices = sample_arc(self.center, self.outer_radius, self.start_deg, span, steps);
        let mut inner = sample_arc(self.center, inner_radius, self.start_deg, span, steps);
        inner.reverse();
        vertices.extend(inner);
        Polygon::from_vertices(vertices)
    }
}

/// Rectangle with quarter-circle corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundedRect {
    pub rect: Rect,
    pub radius: f32,
}

impl RoundedRect {
    /// Corner radius clamped to `0..=min(width, height) / 2`
    pub fn effective_radius(&self) -> f32 {
        let limit = (self.rect.width.min(self.rect.height) * 0.5).max(0.0);
        if self.radius.is_nan() {
            return 0.0;
        }
        self.radius.clamp(0.0, limit)
    }
}

impl Shape for RoundedRect {
    /// Four 90 degree corner arcs, clockwise from the top-left (y-up)
    fn polygon(&self) -> Polygon {
        let r = self.effective_radius();
        let Rect { x, y, .. } = self.rect;
        let (x_max, y_max) = (self.rect.x_max(), self.rect.y_max());
        let steps = (r.ceil() as usize).max(MIN_ARC_STEPS);

        let corners = [
            (Point::new(x + r, y_max - r), 180.0),
            (Point::new(x_max - r, y_max - r), 90.0),
            (Point::new(x_max - r, y + r), 0.0),
            (Point::new(x + r, y + r), -90.0),
        ];

        let mut vertices = Vec::with_capacity((steps + 1) * 4);
        for (center, start) in corners {
            vertices.extend(sample_arc(center, r, start, -90.0, steps));
        }
        Polygon::from_vertices(vertices)
    }
}

impl PixelBuffer {
    /// Filled circle from half-chord spans: each row at offset `dy` from the
    /// center gets half-width `round(sqrt(r^2 - dy^2))`. Only rows on the
    /// buffer are visited; a radius of zero or less draws nothing.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, c: Rgba) {
        if radius <= 0 {
            return;
        }
        let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(radius));
        let r_sq = (r * r) as f64;
        let width = i64::from(self.width());
        let lo = (cy - r).max(0);
        let hi = (cy + r).min(i64::from(self.height()) - 1);
        // Span ends are clamped just past the buffer edges so they fit in i32
        let clip = |x: i64| x.clamp(-1, width) as i32;

        for y in lo..=hi {
            let dy = (y - cy) as f64;
            let half = (r_sq - dy * dy).sqrt().round() as i64;
            self.hline(clip(cx - half), clip(cx + half), y as i32, c);
        }
    }

    pub fn fill_pie_wedge(&mut self, wedge: &PieWedge, c: Rgba) {
        wedge.fill(self, c);
    }

    pub fn fill_ring_segment(&mut self, ring: &RingSegment, c: Rgba) {
        ring.fill(self, c);
    }

    pub fn fill_rounded_rect(&mut self, rounded: &RoundedRect, c: Rgba) {
        rounded.fill(self, c);
    }

    /// Transform `points`, optionally fill the result, then outline it
    pub fn draw_transformed_polygon(
        &mut self,
        points: &[Point],
        m: &Mat3,
        fill: Option<Rgba>,
        outline: Rgba,
    ) {
        let moved = m.transform_points(points);
        if let Some(c) = fill {
            self.fill_polygon(&moved, c);
        }
        self.stroke_polygon(&moved, outline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const FILL: Rgba = Rgba::rgb(200, 120, 40);

    fn covered(buf: &PixelBuffer, c: Rgba) -> HashSet<(i32, i32)> {
        let mut set = HashSet::new();
        for y in 0..buf.height() as i32 {
            for x in 0..buf.width() as i32 {
                if buf.get(x, y) == Some(c) {
                    set.insert((x, y));
                }
            }
        }
        set
    }

    fn near(set: &HashSet<(i32, i32)>, (x, y): (i32, i32)) -> bool {
        (-1..=1).any(|dy| (-1..=1).any(|dx| set.contains(&(x + dx, y + dy))))
    }

    #[test]
    fn test_fast_circle_matches_polygon_circle() {
        for radius in [3, 10, 37] {
            let mut fast = PixelBuffer::with_size(100, 100).unwrap();
            let mut generic = PixelBuffer::with_size(100, 100).unwrap();
            let circle = Circle {
                center: Point::new(50.0, 50.0),
                radius: radius as f32,
            };
            circle.fill(&mut fast, FILL);
            generic.fill_polygon(&circle.polygon().vertices, FILL);

            let a = covered(&fast, FILL);
            let b = covered(&generic, FILL);
            for &p in a.symmetric_difference(&b) {
                assert!(
                    near(&a, p) && near(&b, p),
                    "radius {radius}: {p:?} differs by more than a pixel"
                );
            }
            // The two agree on the bulk of the disc
            let common = a.intersection(&b).count();
            assert!(
                common * 10 >= a.len() * 8,
                "radius {radius}: only {common} of {}",
                a.len()
            );
        }
    }

    #[test]
    fn test_fill_circle_shape() {
        let mut buf = PixelBuffer::with_size(21, 21).unwrap();
        buf.fill_circle(10, 10, 5, FILL);
        assert_eq!(buf.get(10, 10), Some(FILL));
        assert_eq!(buf.get(15, 10), Some(FILL));
        assert_eq!(buf.get(10, 15), Some(FILL));
        assert_eq!(buf.get(10, 5), Some(FILL));
        assert_eq!(buf.get(16, 10), Some(Rgba::TRANSPARENT));
        assert_eq!(buf.get(14, 14), Some(Rgba::TRANSPARENT));
        // Symmetric about both axes
        for y in 0..21 {
            for x in 0..21 {
                assert_eq!(buf.get(x, y), buf.get(20 - x, y));
                assert_eq!(buf.get(x, y), buf.get(x, 20 - y));
            }
        }
    }

    #[test]
    fn test_degenerate_circles() {
        let mut buf = PixelBuffer::with_size(8, 8).unwrap();
        buf.fill_circle(4, 4, -1, FILL);
        assert_eq!(buf.count_color(FILL), 0);
        buf.fill_circle(4, 4, 0, FILL);
        assert_eq!(buf.count_color(FILL), 0);
        for radius in [0.0, 0.3, -2.0, f32::NAN] {
            Circle {
                center: Point::new(4.0, 4.0),
                radius,
            }
            .fill(&mut buf, FILL);
        }
        assert_eq!(buf.count_color(FILL), 0);
    }

    #[test]
    fn test_huge_circle_covers_buffer_without_overflow() {
        let mut buf = PixelBuffer::with_size(8, 8).unwrap();
        buf.fill_circle(4, 4, i32::MAX, FILL);
        assert_eq!(buf.count_color(FILL), 64);

        let mut buf = PixelBuffer::with_size(8, 8).unwrap();
        buf.fill_circle(i32::MAX, i32::MIN, i32::MAX, FILL);
        buf.fill_circle(i32::MIN, 4, 3, FILL);
        assert_eq!(buf.count_color(FILL), 0);

        Circle {
            center: Point::new(4.0, 4.0),
            radius: 1e10,
        }
        .fill(&mut buf, FILL);
        assert_eq!(buf.count_color(FILL), 64);
    }

    #[test]
    fn test_pie_wedge_polygon_shape() {
        let wedge = PieWedge {
            center: Point::new(0.0, 0.0),
            radius: 10.0,
            start_deg: 0.0,
            end_deg: 90.0,
        };
        let poly = wedge.polygon();
        assert_eq!(poly.vertices.first(), Some(&wedge.center));
        assert_eq!(poly.vertices.last(), Some(&wedge.center));
        assert_eq!(poly.vertices.len(), arc_steps(10.0, 90.0) + 3);

        let zero = PieWedge {
            radius: 0.0,
            ..wedge
        };
        assert!(zero.polygon().vertices.is_empty());
    }

    #[test]
    fn test_zero_span_wedge_and_ring_draw_nothing() {
        let mut buf = PixelBuffer::with_size(40, 40).unwrap();
        let wedge = PieWedge {
            center: Point::new(20.0, 20.0),
            radius: 15.0,
            start_deg: 45.0,
            end_deg: 45.0,
        };
        assert!(wedge.polygon().vertices.is_empty());
        buf.fill_pie_wedge(&wedge, FILL);

        let ring = RingSegment {
            center: Point::new(20.0, 20.0),
            inner_radius: 5.0,
            outer_radius: 15.0,
            start_deg: 120.0,
            end_deg: 120.0,
        };
        assert!(ring.polygon().vertices.is_empty());
        buf.fill_ring_segment(&ring, FILL);
        assert_eq!(buf.count_color(FILL), 0);
    }

    #[test]
    fn test_pie_wedge_fill_covers_sector_only() {
        let mut buf = PixelBuffer::with_size(100, 100).unwrap();
        buf.fill_pie_wedge(
            &PieWedge {
                center: Point::new(50.0, 50.0),
                radius: 40.0,
                start_deg: 0.0,
                end_deg: 90.0,
            },
            FILL,
        );
        assert_eq!(buf.get(65, 65), Some(FILL));
        assert_eq!(buf.get(35, 65), Some(Rgba::TRANSPARENT));
        assert_eq!(buf.get(65, 35), Some(Rgba::TRANSPARENT));
        assert_eq!(buf.get(80, 80), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_ring_segment_leaves_hole() {
        let mut buf = PixelBuffer::with_size(100, 100).unwrap();
        let ring = RingSegment {
            center: Point::new(50.0, 50.0),
            inner_radius: 20.0,
            outer_radius: 40.0,
            start_deg: 0.0,
            end_deg: 180.0,
        };
        buf.fill_ring_segment(&ring, FILL);
        // Midway between radii, straight up
        assert_eq!(buf.get(50, 80), Some(FILL));
        // Inside the inner radius
        assert_eq!(buf.get(50, 60), Some(Rgba::TRANSPARENT));
        // Below the sweep
        assert_eq!(buf.get(50, 20), Some(Rgba::TRANSPARENT));
        // Beyond the outer radius
        assert_eq!(buf.get(50, 95), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_ring_segment_outer_must_exceed_inner() {
        let ring = RingSegment {
            center: Point::new(0.0, 0.0),
            inner_radius: 30.0,
            outer_radius: 30.0,
            start_deg: 0.0,
            end_deg: 90.0,
        };
        assert!(ring.polygon().vertices.is_empty());
        let ring = RingSegment {
            outer_radius: -1.0,
            inner_radius: -5.0,
            ..ring
        };
        assert!(ring.polygon().vertices.is_empty());
    }

    #[test]
    fn test_ring_segment_vertex_order() {
        let ring = RingSegment {
            center: Point::new(0.0, 0.0),
            inner_radius: 5.0,
            outer_radius: 10.0,
            start_deg: 0.0,
            end_deg: 90.0,
        };
        let v = ring.polygon().vertices;
        let steps = arc_steps(10.0, 90.0);
        assert_eq!(v.len(), 2 * (steps + 1));
        assert!(v[0].approx_eq(&Point::new(10.0, 0.0), 1e-3));
        assert!(v[steps].approx_eq(&Point::new(0.0, 10.0), 1e-3));
        assert!(v[steps + 1].approx_eq(&Point::new(0.0, 5.0), 1e-3));
        assert!(v[v.len() - 1].approx_eq(&Point::new(5.0, 0.0), 1e-3));
    }

    #[test]
    fn test_rounded_rect_radius_is_clamped() {
        let rr = RoundedRect {
            rect: Rect::new(0.0, 0.0, 40.0, 20.0),
            radius: 50.0,
        };
        assert_eq!(rr.effective_radius(), 10.0);
        let rr = RoundedRect { radius: -3.0, ..rr };
        assert_eq!(rr.effective_radius(), 0.0);
    }

    #[test]
    fn test_rounded_rect_starts_top_left_and_runs_clockwise() {
        let rr = RoundedRect {
            rect: Rect::new(10.0, 10.0, 60.0, 40.0),
            radius: 8.0,
        };
        let v = rr.polygon().vertices;
        // Leftmost point of the top-left corner, at the top edge's height minus r
        assert!(v[0].approx_eq(&Point::new(10.0, 42.0), 1e-3));
        // Next corner begins on the top edge
        let steps = 8;
        assert!(v[steps + 1].approx_eq(&Point::new(62.0, 50.0), 1e-3));
        // Signed area is negative for clockwise order in y-up coordinates
        let area: f32 = (0..v.len())
            .map(|i| {
                let (a, b) = (v[i], v[(i + 1) % v.len()]);
                a.x * b.y - b.x * a.y
            })
            .sum();
        assert!(area < 0.0);
    }

    #[test]
    fn test_rounded_rect_cuts_corners() {
        let mut buf = PixelBuffer::with_size(100, 100).unwrap();
        buf.fill_rounded_rect(
            &RoundedRect {
                rect: Rect::new(10.0, 10.0, 60.0, 40.0),
                radius: 12.0,
            },
            FILL,
        );
        assert_eq!(buf.get(40, 30), Some(FILL));
        assert_eq!(buf.get(11, 11), Some(Rgba::TRANSPARENT));
        assert_eq!(buf.get(68, 48), Some(Rgba::TRANSPARENT));
        assert_eq!(buf.get(11, 30), Some(FILL));
    }

    #[test]
    fn test_transformed_polygon_fill_and_outline() {
        let mut buf = PixelBuffer::with_size(60, 60).unwrap();
        let square = [
            Point::new(-5.0, -5.0),
            Point::new(5.0, -5.0),
            Point::new(5.0, 5.0),
            Point::new(-5.0, 5.0),
        ];
        let m = Mat3::trs(Point::new(30.0, 30.0), 0.0, Point::new(2.0, 2.0));
        buf.draw_transformed_polygon(&square, &m, Some(FILL), Rgba::BLACK);
        assert_eq!(buf.get(30, 30), Some(FILL));
        assert_eq!(buf.get(20, 30), Some(Rgba::BLACK));
        assert_eq!(buf.get(40, 25), Some(Rgba::BLACK));
        assert_eq!(buf.get(45, 30), Some(Rgba::TRANSPARENT));
    }
}
