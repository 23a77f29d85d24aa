//! Span-based software rasterizer.
//!
//! Everything draws into a [`PixelBuffer`]: lines (DDA and Bresenham),
//! trigonometric arcs, scanline-filled polygons and the curved shapes built on
//! them, plus a small affine transform. Filled shapes only ever write whole
//! horizontal spans. Scene coordinates are y-up; row 0 is the bottom of the
//! picture.
//!
//! The [`scene`] module holds two demos driven by elapsed time: a crane
//! swinging a wrecking ball into a brick wall, and a showcase of every
//! primitive.

pub mod display;
pub mod error;
pub mod geometry;
pub mod math2d;
pub mod raster;
pub mod scene;
pub mod util;

pub use display::{PixelBuffer, Rgba, Snapshot, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use error::{RasterError, Result};
pub use geometry::{point_in_polygon, Point, Polygon, Rect};
pub use math2d::Mat3;
pub use raster::{ArcSweep, Circle, PieWedge, RingSegment, RoundedRect, Shape};
pub use scene::{DestructibleGrid, Demo, Showcase, WreckingYard, YardConfig, ZoomPulse};
