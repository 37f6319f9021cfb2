//! Navigation grid: one [`PathNode`] per cell, stored in an arena.
//!
//! ```rust,ignore
//! use marga::grid::NavGrid;
//! use marga::core::GridCoord;
//!
//! let mut grid = NavGrid::new(20, 20, 1.0, Vec3::ZERO)?;
//! grid.set_blocked(GridCoord::new(5, 5), true);
//!
//! // Before every search run
//! grid.reset_nodes();
//! ```

mod nav_grid;
mod node;

pub use nav_grid::NavGrid;
pub use node::PathNode;
