//! Brick grid with permanently breakable cells

use tracing::debug;

use crate::error::{RasterError, Result};
use crate::geometry::Point;

/// Horizontal shift of a staggered row: odd rows move right by half a cell
/// (whole pixels, so drawn bricks and hit-testing agree)
pub fn stagger_offset(row: usize, cell_width: f32) -> f32 {
    if row % 2 == 0 {
        0.0
    } else {
        (cell_width / 2.0).floor()
    }
}

/// `cols` x `rows` flags, flat and column-major so `(col, row)` indexing is
/// bounds checked in one place. Cells only ever go from intact to broken
/// until [`DestructibleGrid::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestructibleGrid {
    cols: usize,
    rows: usize,
    broken: Vec<bool>,
}

impl DestructibleGrid {
    pub fn new(cols: usize, rows: usize) -> Result<Self> {
        let cells = cols
            .checked_mul(rows)
            .filter(|&n| n > 0)
            .ok_or(RasterError::InvalidGrid { cols, rows })?;
        Ok(Self {
            cols,
            rows,
            broken: vec![false; cells],
        })
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn index(&self, col: usize, row: usize) -> Option<usize> {
        (col < self.cols && row < self.rows).then(|| col * self.rows + row)
    }

    /// Out-of-range cells read as intact
    pub fn is_broken(&self, col: usize, row: usize) -> bool {
        self.index(col, row).is_some_and(|i| self.broken[i])
    }

    /// Flag a cell as broken. Returns true only the first time a cell breaks;
    /// repeats and out-of-range cells change nothing.
    pub fn mark_broken(&mut self, col: usize, row: usize) -> bool {
        let Some(i) = self.index(col, row) else {
            return false;
        };
        if self.broken[i] {
            return false;
        }
        self.broken[i] = true;
        debug!(col, row, "brick smashed");
        true
    }

    /// Broken cells as `(col, row)`, column by column
    pub fn broken_cells(&self) -> Vec<(usize, usize)> {
        self.broken
            .iter()
            .enumerate()
            .filter(|(_, &b)| b)
            .map(|(i, _)| (i / self.rows, i % self.rows))
            .collect()
    }

    pub fn broken_count(&self) -> usize {
        self.broken.iter().filter(|&&b| b).count()
    }

    /// Rebuild the wall
    pub fn reset(&mut self) {
        self.broken.fill(false);
    }

    /// Map a world point to the staggered cell under it. The row is found
    /// first so its stagger can be removed before the column is computed;
    /// both are clamped into the grid.
    pub fn cell_at(
        &self,
        p: Point,
        origin: Point,
        cell_width: f32,
        cell_height: f32,
    ) -> Result<(usize, usize)> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(cell_width) || !valid(cell_height) {
            return Err(RasterError::ZeroCellSize {
                width: cell_width,
                height: cell_height,
            });
        }

        let row = clamp_index(((p.y - origin.y) / cell_height).floor(), self.rows);
        let offset = stagger_offset(row, cell_width);
        let col = clamp_index(((p.x - origin.x - offset) / cell_width).floor(), self.cols);
        Ok((col, row))
    }

    /// Break the cell under `p`; Ok(true) when it was still intact
    pub fn smash(
        &mut self,
        p: Point,
        origin: Point,
        cell_width: f32,
        cell_height: f32,
    ) -> Result<bool> {
        let (col, row) = self.cell_at(p, origin, cell_width, cell_height)?;
        Ok(self.mark_broken(col, row))
    }
}

/// Saturating float-to-index conversion into `0..len`
fn clamp_index(v: f32, len: usize) -> usize {
    if v <= 0.0 || v.is_nan() {
        0
    } else {
        (v as usize).min(len - 1)
    }
}
