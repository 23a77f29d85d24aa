//! One frame that exercises every primitive: DDA outline, trig arc,
//! scanline triangle, ring segment, wedges and a TRS-driven kite

use tracing::info;

use super::Demo;
use crate::display::{PixelBuffer, Rgba, Snapshot};
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::math2d::Mat3;
use crate::raster::{ArcSweep, PieWedge, RingSegment, RoundedRect, Shape};

const BACKGROUND: Rgba = Rgba::rgb(242, 250, 255);
const BACKDROP: Rgba = Rgba::rgb(237, 245, 255);
const BIG_WEDGE: Rgba = Rgba::rgb(255, 242, 217);
const ARC: Rgba = Rgba::rgb(255, 230, 128);
const TRIANGLE: Rgba = Rgba::rgb(77, 153, 217);
const RING: Rgba = Rgba::rgb(51, 128, 51);
const SMALL_WEDGE: Rgba = Rgba::new(255, 255, 255, 89);
const KITE: Rgba = Rgba::rgb(242, 242, 255);

const OUTLINE: [(i32, i32); 10] = [
    (120, 480),
    (200, 520),
    (280, 500),
    (340, 450),
    (320, 380),
    (260, 340),
    (200, 360),
    (160, 400),
    (140, 440),
    (120, 480),
];

const KITE_SHAPE: [Point; 4] = [
    Point::new(-20.0, 0.0),
    Point::new(0.0, 40.0),
    Point::new(20.0, 0.0),
    Point::new(0.0, -60.0),
];

pub struct Showcase {
    buffer: PixelBuffer,
    background: Snapshot,
}

impl Showcase {
    /// Large static fills are drawn once here and restored every frame
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let mut buffer = PixelBuffer::with_size(width, height)?;
        for y in 0..height as i32 {
            buffer.hline(0, width as i32 - 1, y, BACKGROUND);
        }
        RoundedRect {
            rect: Rect::new(60.0, 60.0, 420.0, 260.0),
            radius: 30.0,
        }
        .fill(&mut buffer, BACKDROP);
        PieWedge {
            center: Point::new(280.0, 220.0),
            radius: 130.0,
            start_deg: 210.0,
            end_deg: 330.0,
        }
        .fill(&mut buffer, BIG_WEDGE);

        let background = buffer.snapshot();
        info!(width, height, "showcase ready");
        Ok(Self { buffer, background })
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Kite placement at time `t`: sweeps left to right and back, tilting
    /// only while `sin(t)` is positive
    pub fn kite_transform(t: f32) -> Mat3 {
        let u = (t * 0.9).sin() * 0.5 + 0.5;
        let x = 100.0 + (1180.0 - 100.0) * u;
        let tilt = -20.0 + 40.0 * t.sin().clamp(0.0, 1.0);
        Mat3::trs(Point::new(x, 520.0), tilt, Point::new(1.0, 1.0))
    }
}

impl Demo for Showcase {
    fn render(&mut self, t: f32) -> &PixelBuffer {
        let buf = &mut self.buffer;
        buf.restore(&self.background);

        for pair in OUTLINE.windows(2) {
            let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
            buf.line_dda(x0, y0, x1, y1, Rgba::BLACK);
        }

        buf.arc(Point::new(520.0, 520.0), 90.0, 30.0, 300.0, ArcSweep::Shortest, ARC);

        let (a, b, c) = (
            Point::new(540.0, 180.0),
            Point::new(660.0, 180.0),
            Point::new(600.0, 320.0),
        );
        buf.fill_triangle(a, b, c, TRIANGLE);
        buf.line(540, 180, 660, 180, Rgba::BLACK);
        buf.line(660, 180, 600, 320, Rgba::BLACK);
        buf.line(600, 320, 540, 180, Rgba::BLACK);

        let hub = Point::new(1040.0, 520.0);
        buf.fill_ring_segment(
            &RingSegment {
                center: hub,
                inner_radius: 36.0,
                outer_radius: 62.0,
                start_deg: 220.0,
                end_deg: 320.0,
            },
            RING,
        );
        buf.fill_pie_wedge(
            &PieWedge {
                center: hub,
                radius: 40.0,
                start_deg: 30.0,
                end_deg: 140.0,
            },
            SMALL_WEDGE,
        );

        buf.draw_transformed_polygon(
            &KITE_SHAPE,
            &Self::kite_transform(t),
            Some(KITE),
            Rgba::BLACK,
        );

        &self.buffer
    }

    fn name(&self) -> &str {
        "showcase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(t: f32) -> Showcase {
        let mut demo = Showcase::new(1280, 720).unwrap();
        demo.render(t);
        demo
    }

    #[test]
    fn test_background_layers() {
        let demo = frame(0.0);
        let buf = demo.buffer();
        assert_eq!(buf.get(5, 5), Some(BACKGROUND));
        assert_eq!(buf.get(100, 300), Some(BACKDROP));
        // Wedge midpoint: 270 degrees, half the radius
        assert_eq!(buf.get(280, 155), Some(BIG_WEDGE));
    }

    #[test]
    fn test_primitives_land_where_expected() {
        let demo = frame(0.0);
        let buf = demo.buffer();
        assert_eq!(buf.get(120, 480), Some(Rgba::BLACK));
        assert_eq!(buf.get(600, 227), Some(TRIANGLE));
        assert_eq!(buf.get(600, 180), Some(Rgba::BLACK));
        assert_eq!(buf.get(1040, 471), Some(RING));
        assert_eq!(buf.get(1040, 535), Some(SMALL_WEDGE));
    }

    #[test]
    fn test_arc_takes_the_short_way() {
        let demo = frame(0.0);
        let buf = demo.buffer();
        assert_eq!(buf.get(610, 520), Some(ARC));
        assert_ne!(buf.get(430, 520), Some(ARC));
    }

    #[test]
    fn test_kite_moves_with_time() {
        let at_center = Showcase::kite_transform(0.0).apply(Point::new(0.0, 0.0));
        assert!(at_center.approx_eq(&Point::new(640.0, 520.0), 1e-3));

        let demo = frame(0.0);
        assert_eq!(demo.buffer().get(640, 520), Some(KITE));

        let later = frame(1.0);
        assert_ne!(later.buffer().get(640, 520), Some(KITE));
    }
}
