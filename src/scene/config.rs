//! JSON-backed settings for the wrecking yard

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::display::{Rgba, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::{RasterError, Result};
use crate::geometry::{Point, Rect};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PendulumConfig {
    /// Swings per second
    pub speed: f32,
    pub amplitude_deg: f32,
    pub rope_length: f32,
    pub ball_radius: f32,
}

impl Default for PendulumConfig {
    fn default() -> Self {
        Self {
            speed: 0.65,
            amplitude_deg: 26.0,
            rope_length: 220.0,
            ball_radius: 36.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallConfig {
    pub rect: Rect,
    pub cols: usize,
    pub rows: usize,
}

impl WallConfig {
    /// Whole-pixel brick size
    pub fn brick_size(&self) -> (f32, f32) {
        (
            (self.rect.width / self.cols as f32).floor(),
            (self.rect.height / self.rows as f32).floor(),
        )
    }

    pub fn origin(&self) -> Point {
        Point::new(self.rect.x, self.rect.y)
    }
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            rect: Rect::new(900.0, 320.0, 240.0, 260.0),
            cols: 6,
            rows: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CraneLayout {
    pub tower: Rect,
    pub cab: Rect,
    pub counterweight: Rect,
    /// Boom tip relative to the cab's top-right corner
    pub apex_offset: Point,
}

impl CraneLayout {
    /// Where the rope hangs from
    pub fn apex(&self) -> Point {
        Point::new(self.cab.x_max(), self.cab.y_max()) + self.apex_offset
    }
}

impl Default for CraneLayout {
    fn default() -> Self {
        Self {
            tower: Rect::new(210.0, 260.0, 120.0, 260.0),
            cab: Rect::new(330.0, 430.0, 120.0, 80.0),
            counterweight: Rect::new(190.0, 430.0, 70.0, 60.0),
            apex_offset: Point::new(70.0, 35.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub interval: f32,
    pub duration: f32,
    pub strength: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            interval: 8.0,
            duration: 2.0,
            strength: 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub sky: Rgba,
    pub steel: Rgba,
    pub crane: Rgba,
    pub boom: Rgba,
    pub counterweight: Rgba,
    pub window: Rgba,
    pub rope: Rgba,
    pub path: Rgba,
    pub ball: Rgba,
    pub mortar: Rgba,
    pub brick: Rgba,
    pub flag: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            sky: Rgba::rgb(224, 224, 230),
            steel: Rgba::rgb(38, 38, 46),
            crane: Rgba::rgb(26, 115, 204),
            boom: Rgba::rgb(20, 89, 166),
            counterweight: Rgba::rgb(20, 64, 115),
            window: Rgba::rgb(217, 235, 255),
            rope: Rgba::rgb(64, 64, 71),
            path: Rgba::new(255, 255, 255, 140),
            ball: Rgba::rgb(31, 31, 31),
            mortar: Rgba::rgb(51, 51, 56),
            brick: Rgba::rgb(191, 89, 46),
            flag: Rgba::rgb(230, 64, 51),
        }
    }
}

/// Everything the wrecking yard needs to lay itself out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YardConfig {
    pub width: u32,
    pub height: u32,
    pub pendulum: PendulumConfig,
    pub wall: WallConfig,
    pub crane: CraneLayout,
    pub zoom: ZoomConfig,
    pub palette: Palette,
}

impl Default for YardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            pendulum: PendulumConfig::default(),
            wall: WallConfig::default(),
            crane: CraneLayout::default(),
            zoom: ZoomConfig::default(),
            palette: Palette::default(),
        }
    }
}

/// Longest rope and largest ball the yard accepts, in pixels
pub const MAX_PENDULUM_EXTENT: f32 = 10_000.0;

impl YardConfig {
    /// Reject values the scene cannot be built from
    pub fn validate(&self) -> Result<()> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        let extent = |v: f32| positive(v) && v <= MAX_PENDULUM_EXTENT;

        let problem = if self.width == 0 || self.height == 0 {
            Some(format!("canvas must be non-empty, got {}x{}", self.width, self.height))
        } else if self.wall.cols == 0 || self.wall.rows == 0 {
            Some(format!(
                "wall needs at least one brick, got {}x{}",
                self.wall.cols, self.wall.rows
            ))
        } else if !extent(self.pendulum.rope_length) {
            Some(format!(
                "rope_length must be in (0, {MAX_PENDULUM_EXTENT}], got {}",
                self.pendulum.rope_length
            ))
        } else if !extent(self.pendulum.ball_radius) {
            Some(format!(
                "ball_radius must be in (0, {MAX_PENDULUM_EXTENT}], got {}",
                self.pendulum.ball_radius
            ))
        } else if !self.pendulum.speed.is_finite() || !self.pendulum.amplitude_deg.is_finite() {
            Some("pendulum speed and amplitude must be finite".to_string())
        } else {
            let (bw, bh) = self.wall.brick_size();
            (!positive(bw) || !positive(bh))
                .then(|| format!("wall is too small for its bricks ({bw}x{bh} px each)"))
        };

        match problem {
            Some(msg) => {
                warn!(%msg, "rejecting yard config");
                Err(RasterError::Config(msg))
            },
            None => Ok(()),
        }
    }

    /// Save config to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load and validate a config from a JSON file; missing fields take
    /// their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }
}
