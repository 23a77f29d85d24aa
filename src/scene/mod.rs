mod config;
mod grid;
mod showcase;
mod timer;
mod wrecking;

pub use config::{
    CraneLayout, Palette, PendulumConfig, WallConfig, YardConfig, ZoomConfig, MAX_PENDULUM_EXTENT,
};
pub use grid::DestructibleGrid;
pub use showcase::Showcase;
pub use timer::ZoomPulse;
pub use wrecking::WreckingYard;

use crate::display::PixelBuffer;

/// A frame-driven scene that owns its pixel buffer
pub trait Demo {
    /// Redraw the frame for elapsed time `t` (seconds) and hand back the result
    fn render(&mut self, t: f32) -> &PixelBuffer;

    /// Demo name for logs and the window title
    fn name(&self) -> &str;
}
