//! A* pathfinding algorithm.
//!
//! Reference [`PathSearch`](crate::pathfinding::PathSearch) implementation
//! over the [`NavGrid`] node arena:
//! - integer step costs (10 cardinal / 14 diagonal)
//! - 8-connected movement without corner cutting
//! - octile heuristic

mod planner;
mod types;

pub use planner::AStarPlanner;
pub use types::{AStarConfig, PathFailure, PathResult};

use glam::Vec3;

use crate::grid::{NavGrid, PathNode};

/// Quick path finding with default configuration
pub fn find_path(grid: &mut NavGrid, start: Vec3, goal: Vec3) -> Vec<PathNode> {
    let mut planner = AStarPlanner::with_defaults(grid);
    planner.plan_world(start, goal).path
}
