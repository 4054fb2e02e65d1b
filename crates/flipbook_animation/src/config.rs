//! Scene descriptions
//!
//! A scene is a sprite sheet plus the animations cut from it, written in TOML:
//!
//! ```toml
//! [sheet]
//! width = 128
//! height = 64
//! columns = 4
//! rows = 2
//! order = "rows-first"
//!
//! [[animation]]
//! name = "walk"
//! frames = [0, 1, 2, 3]
//! durations = 5
//!
//! [[animation]]
//! name = "jump"
//! frames = [4, 5, 6]
//! durations = [2, 6]
//! start = 1
//! ```
//!
//! Frame numbers index the sheet's cells after flattening them in `order`.
//! Leaving `frames` out uses every cell.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::animation::{Animation, Durations};
use crate::error::{AnimationError, Result};
use crate::manager::AnimationManager;
use crate::sheet::{Region, SliceOrder, SpriteSheet};

/// Top-level scene description
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SceneConfig {
    pub sheet: SheetConfig,
    #[serde(default, rename = "animation")]
    pub animations: Vec<AnimationConfig>,
}

/// Sprite sheet geometry
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SheetConfig {
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_cells")]
    pub columns: u32,
    #[serde(default = "default_cells")]
    pub rows: u32,
    #[serde(default)]
    pub order: SliceOrder,
}

fn default_cells() -> u32 {
    1
}

/// One named animation
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AnimationConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frames: Option<Vec<usize>>,
    pub durations: Durations,
    #[serde(default)]
    pub start: usize,
}

impl SheetConfig {
    /// Every cell of the sheet, flattened in slice order
    pub fn cells(&self) -> Result<Vec<Region>> {
        let grid = SpriteSheet::new(self.width, self.height).slice_grid(
            self.columns,
            self.rows,
            self.order,
        )?;
        Ok(grid.into_iter().flatten().collect())
    }
}

impl SceneConfig {
    /// Parse a scene from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| AnimationError::Config(err.to_string()))
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|err| AnimationError::Config(err.to_string()))
    }

    /// Slice the sheet and build every animation into a manager
    pub fn build(&self) -> Result<AnimationManager<Region>> {
        let cells = self.sheet.cells()?;
        let mut manager = AnimationManager::new();

        for config in &self.animations {
            let frames = match &config.frames {
                Some(indices) => indices
                    .iter()
                    .map(|&index| {
                        cells.get(index).copied().ok_or(AnimationError::OutOfRange {
                            index,
                            len: cells.len(),
                        })
                    })
                    .collect::<Result<Vec<_>>>()?,
                None => cells.clone(),
            };

            let animation =
                Animation::with_starting_index(frames, config.durations.clone(), config.start)?;
            manager.add(config.name.as_str(), animation)?;
        }

        debug!(
            "SceneConfig: built {} animations from {} cells",
            manager.len(),
            cells.len()
        );
        Ok(manager)
    }
}
