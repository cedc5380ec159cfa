//! Sprite-sheet slicing.
//!
//! A [`FrameAtlas`] describes a sheet as a grid of `rows` × `columns`
//! equally-sized cells and produces their [`FrameRect`]s in row-major order:
//!
//! ```text
//! +---+---+---+---+
//! | 0 | 1 | 2 | 3 |  <-- row 0, read left to right
//! +---+---+---+---+
//! | 4 | 5 | 6 | 7 |  <-- row 1
//! +---+---+---+---+
//! ```
//!
//! Cell size is `width / columns` by `height / rows` (integer division). A
//! sheet whose size is not a multiple of the grid is truncated: the trailing
//! pixels on the right/bottom edge are never sampled, and a warning is logged.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::AnimError;

/// Axis-aligned pixel rectangle into a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl FrameRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Grid layout of a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameAtlas {
    pub rows: u32,
    pub columns: u32,
}

impl FrameAtlas {
    pub fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }

    /// Size of one cell for a sheet of `width` × `height` pixels.
    pub fn cell_size(&self, width: u32, height: u32) -> Result<(u32, u32), AnimError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(AnimError::config(format!(
                "atlas grid must have at least one row and one column, got {}x{}",
                self.rows, self.columns
            )));
        }
        let cell_w = width / self.columns;
        let cell_h = height / self.rows;
        if cell_w == 0 || cell_h == 0 {
            return Err(AnimError::config(format!(
                "{}x{} grid does not fit a {}x{} texture",
                self.rows, self.columns, width, height
            )));
        }
        if width % self.columns != 0 || height % self.rows != 0 {
            warn!(
                "{}x{} texture is not evenly divisible by a {}x{} grid; trailing pixels are dropped",
                width, height, self.rows, self.columns
            );
        }
        Ok((cell_w, cell_h))
    }

    /// Every cell of the sheet, row 0 first, each row left to right.
    pub fn split(&self, width: u32, height: u32) -> Result<Vec<FrameRect>, AnimError> {
        let (cell_w, cell_h) = self.cell_size(width, height)?;
        let mut frames = Vec::with_capacity((self.rows * self.columns) as usize);
        for row in 0..self.rows {
            for col in 0..self.columns {
                frames.push(FrameRect::new(col * cell_w, row * cell_h, cell_w, cell_h));
            }
        }
        Ok(frames)
    }

    /// The cells of a single row, left to right.
    pub fn row(&self, width: u32, height: u32, row: u32) -> Result<Vec<FrameRect>, AnimError> {
        if row >= self.rows {
            return Err(AnimError::config(format!(
                "row {} is outside a grid of {} rows",
                row, self.rows
            )));
        }
        let (cell_w, cell_h) = self.cell_size(width, height)?;
        Ok((0..self.columns)
            .map(|col| FrameRect::new(col * cell_w, row * cell_h, cell_w, cell_h))
            .collect())
    }
}
