//! Path planning and smoothing.
//!
//! - **Search**: the [`PathSearch`] trait, with an A* implementation over
//!   the [`NavGrid`](crate::grid::NavGrid) arena
//! - **Smoothing**: Catmull-Rom interpolation of the resulting cell path
//!
//! ## A* Pathfinding
//!
//! ```rust,ignore
//! use marga::pathfinding::{AStarPlanner, AStarConfig};
//!
//! let mut planner = AStarPlanner::new(&mut grid, AStarConfig::default());
//! let result = planner.plan_world(start, goal);
//! if result.success() {
//!     println!("Path found with {} cells", result.path.len());
//! }
//! ```
//!
//! ## Path Smoothing
//!
//! ```rust,ignore
//! use marga::pathfinding::{PathSmoother, SmoothingConfig};
//!
//! let smoother = PathSmoother::new(SmoothingConfig::with_subdivisions(8))?;
//! let waypoints = smoother.smooth(&result.path, agent_height)?;
//! ```

pub mod astar;
pub mod smoothing;

use glam::Vec3;

use crate::grid::PathNode;

pub use astar::{AStarConfig, AStarPlanner, PathFailure, PathResult, find_path};
pub use smoothing::{PathSmoother, SmoothingConfig, catmull_rom, path_length};

/// Shortest-path query between two world positions.
///
/// Implementations return the ordered nodes from the origin's cell to the
/// destination's cell inclusive, each consecutive pair grid-adjacent. An
/// empty result means no path exists; a single node means both points share
/// a cell.
pub trait PathSearch {
    /// Find the path from `origin` to `destination`
    fn find_path(&mut self, origin: Vec3, destination: Vec3) -> Vec<PathNode>;
}

impl<S: PathSearch + ?Sized> PathSearch for &mut S {
    fn find_path(&mut self, origin: Vec3, destination: Vec3) -> Vec<PathNode> {
        (**self).find_path(origin, destination)
    }
}
