//! Navigation grid configuration section.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::GridCoord;
use crate::error::PathError;
use crate::grid::NavGrid;

use super::defaults;

/// Grid settings section
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GridSection {
    /// Columns (world X)
    #[serde(default = "defaults::grid_size")]
    pub width: usize,

    /// Rows (world Z)
    #[serde(default = "defaults::grid_size")]
    pub height: usize,

    /// Cell edge length in world units
    #[serde(default = "defaults::cell_size")]
    pub cell_size: f32,

    /// Minimum corner of cell (0, 0); its Y is the grid's floor height
    #[serde(default = "defaults::origin")]
    pub origin: Vec3,

    /// Static obstacles as `[x, y]` cell indices
    #[serde(default)]
    pub blocked: Vec<[i32; 2]>,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            cell_size: 1.0,
            origin: Vec3::ZERO,
            blocked: Vec::new(),
        }
    }
}

impl GridSection {
    /// Build the grid described by this section.
    ///
    /// Obstacles outside the grid are ignored with a warning.
    pub fn build(&self) -> Result<NavGrid, PathError> {
        let mut grid = NavGrid::new(self.width, self.height, self.cell_size, self.origin)?;
        for &[x, y] in &self.blocked {
            if !grid.set_blocked(GridCoord::new(x, y), true) {
                log::warn!("[Config] blocked cell ({}, {}) outside grid, ignored", x, y);
            }
        }
        Ok(grid)
    }
}
