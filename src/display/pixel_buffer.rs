use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::{RasterError, Result};

// ============================================================================
// Color
// ============================================================================

/// 8-bit RGBA color. Stored as-is, no blending on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

const fn opaque() -> u8 {
    255
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// From normalized 0..1 channels (values outside are clamped)
    pub fn from_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(q(r), q(g), q(b), q(a))
    }
}

impl From<(u8, u8, u8)> for Rgba {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

/// Write ABGR pixel to slice (RGBA8888 little-endian byte order)
#[inline]
fn write_pixel(dest: &mut [u8], c: Rgba) {
    dest[0] = c.a; // A
    dest[1] = c.b; // B
    dest[2] = c.g; // G
    dest[3] = c.r; // R
}

#[inline]
fn read_pixel(src: &[u8]) -> Rgba {
    Rgba::new(src[3], src[2], src[1], src[0])
}

/// Byte offset of pixel (x, y) in a row-major buffer `width` pixels wide
#[inline]
fn pixel_offset(width: u32, x: u32, y: u32) -> usize {
    (y as usize * width as usize + x as usize) * 4
}

// ============================================================================
// Snapshot
// ============================================================================

/// A captured copy of a buffer's pixels, restored wholesale each frame so
/// static content is drawn once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl Snapshot {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

// ============================================================================
// PixelBuffer
// ============================================================================

/// RGBA8888 pixel buffer for software rendering.
///
/// Row-major, pixel (x, y) lives at index `y * width + x`. Every write is
/// bounds checked and silently dropped outside `[0, width) x [0, height)`.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Create a pixel buffer with the default 1280x720 resolution
    pub fn new() -> Self {
        Self::alloc(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Create a pixel buffer with custom resolution, cleared to transparent black
    pub fn with_size(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions { width, height });
        }
        let bytes = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(RasterError::InvalidDimensions { width, height })?;
        Ok(Self {
            pixels: vec![0; bytes],
            width,
            height,
        })
    }

    fn alloc(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; pixel_offset(width, 0, height)],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Calculate byte offset for pixel at (x, y)
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        pixel_offset(self.width, x, y)
    }

    /// Fill the whole buffer with one color
    pub fn clear(&mut self, c: Rgba) {
        for chunk in self.pixels.chunks_exact_mut(4) {
            write_pixel(chunk, c);
        }
    }

    /// Set a single pixel (bounds checked, out-of-range writes are dropped)
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, c: Rgba) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            write_pixel(&mut self.pixels[idx..idx + 4], c);
        }
    }

    /// Read a pixel, or None if out of bounds
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Rgba> {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            Some(read_pixel(&self.pixels[idx..idx + 4]))
        } else {
            None
        }
    }

    /// Inclusive horizontal span on row `y`. Endpoints may come in either
    /// order and are clamped to the buffer. The only primitive the filled
    /// shapes write through.
    pub fn hline(&mut self, x0: i32, x1: i32, y: i32, c: Rgba) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let start = x0.max(0);
        let end = x1.min(self.width as i32 - 1);
        if start > end {
            return;
        }

        let from = self.pixel_index(start as u32, y as u32);
        let to = self.pixel_index(end as u32, y as u32) + 4;
        for chunk in self.pixels[from..to].chunks_exact_mut(4) {
            write_pixel(chunk, c);
        }
    }

    /// Fill a `w` x `h` rectangle whose minimum corner is (x, y)
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgba) {
        if w <= 0 || h <= 0 {
            return;
        }
        let x1 = x.saturating_add(w - 1);
        let lo = y.max(0);
        let hi = y.saturating_add(h).min(self.height as i32);
        for row in lo..hi {
            self.hline(x, x1, row, c);
        }
    }

    /// Rectangle outline through the corners (x, y) and (x + w, y + h)
    pub fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgba) {
        let (x1, y1) = (x.saturating_add(w), y.saturating_add(h));
        self.line(x, y, x1, y, c);
        self.line(x1, y, x1, y1, c);
        self.line(x1, y1, x, y1, c);
        self.line(x, y1, x, y, c);
    }

    // ========================================================================
    // Snapshot / restore
    // ========================================================================

    /// Capture the current contents
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pixels: self.pixels.clone(),
            width: self.width,
            height: self.height,
        }
    }

    /// Overwrite the whole buffer from a snapshot of the same size.
    /// Returns false (and leaves the buffer untouched) on a size mismatch.
    pub fn restore(&mut self, snapshot: &Snapshot) -> bool {
        if snapshot.width != self.width || snapshot.height != self.height {
            warn!(
                snapshot_width = snapshot.width,
                snapshot_height = snapshot.height,
                width = self.width,
                height = self.height,
                "ignoring snapshot with mismatched size"
            );
            return false;
        }
        self.pixels.copy_from_slice(&snapshot.pixels);
        true
    }

    /// Raw bytes for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Count pixels equal to `c` (handy for coverage checks)
    pub fn count_color(&self, c: Rgba) -> usize {
        self.pixels
            .chunks_exact(4)
            .filter(|px| read_pixel(px) == c)
            .count()
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}
