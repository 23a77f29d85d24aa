mod arc;
mod line;
mod polygon;
mod shapes;

pub use arc::{
    arc_points, arc_steps, lerp_angle, shortest_delta, ArcSweep, MAX_ARC_STEPS, MIN_ARC_STEPS,
};
pub use line::{bresenham_points, dda_points};
pub use polygon::{scanline_spans, Span};
pub use shapes::{Circle, PieWedge, RingSegment, RoundedRect, Shape};
