//! Sprite-sheet slicing
//!
//! Cuts a sheet of `width` x `height` pixels into equally sized cells. The
//! result is a list of [`Region`]s describing where each frame sits on the
//! sheet; loading and blitting the pixels is left to the host toolkit.
//!
//! Cell sizes use integer division, so pixels left over on the right or bottom
//! edge are not part of any cell.

use serde::{Deserialize, Serialize};

use crate::error::{AnimationError, Result};

/// A rectangular area of a sprite sheet, in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Grouping of cells returned by [`SpriteSheet::slice_grid`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SliceOrder {
    /// One list per row, cells left to right
    #[default]
    RowsFirst,
    /// One list per column, cells top to bottom
    ColumnsFirst,
}

/// Pixel dimensions of a sprite sheet
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSheet {
    pub width: u32,
    pub height: u32,
}

impl SpriteSheet {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Cut the sheet into `count` cells laid out left to right
    ///
    /// `ABCD` becomes `[A, B, C, D]`.
    pub fn slice_columns(&self, count: u32) -> Result<Vec<Region>> {
        let cell_width = cell_size(self.width, count, "column")?;
        Ok((0..count)
            .map(|i| Region::new(i * cell_width, 0, cell_width, self.height))
            .collect())
    }

    /// Cut the sheet into `count` cells stacked top to bottom
    pub fn slice_rows(&self, count: u32) -> Result<Vec<Region>> {
        let cell_height = cell_size(self.height, count, "row")?;
        Ok((0..count)
            .map(|i| Region::new(0, i * cell_height, self.width, cell_height))
            .collect())
    }

    /// Cut the sheet into a `columns` x `rows` grid
    ///
    /// For the sheet
    ///
    /// ```text
    /// ABCD
    /// EFGH
    /// IJKL
    /// ```
    ///
    /// [`SliceOrder::RowsFirst`] gives `[[A, B, C, D], [E, F, G, H], [I, J, K, L]]`
    /// and [`SliceOrder::ColumnsFirst`] gives `[[A, E, I], [B, F, J], [C, G, K], [D, H, L]]`.
    pub fn slice_grid(
        &self,
        columns: u32,
        rows: u32,
        order: SliceOrder,
    ) -> Result<Vec<Vec<Region>>> {
        let cell_width = cell_size(self.width, columns, "column")?;
        let cell_height = cell_size(self.height, rows, "row")?;
        let cell = |column: u32, row: u32| {
            Region::new(column * cell_width, row * cell_height, cell_width, cell_height)
        };

        Ok(match order {
            SliceOrder::RowsFirst => (0..rows)
                .map(|row| (0..columns).map(|column| cell(column, row)).collect())
                .collect(),
            SliceOrder::ColumnsFirst => (0..columns)
                .map(|column| (0..rows).map(|row| cell(column, row)).collect())
                .collect(),
        })
    }
}

fn cell_size(extent: u32, count: u32, axis: &str) -> Result<u32> {
    if count == 0 {
        return Err(AnimationError::InvalidArgument(format!(
            "{axis} count must be at least 1"
        )));
    }
    match extent / count {
        0 => Err(AnimationError::InvalidArgument(format!(
            "{count} {axis}s do not fit in {extent} pixels"
        ))),
        size => Ok(size),
    }
}
