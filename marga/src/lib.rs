//! # Marga: Smoothed Grid Paths for Click-to-Move Agents
//!
//! Turns the cell-by-cell output of a grid search into a smooth, drivable
//! trajectory and walks an agent along it at constant speed.
//!
//! ## Pipeline
//!
//! ```text
//! PathSearch ──► Vec<PathNode> ──► PathSmoother ──► Vec<Vec3> ──► PathFollower
//!  (A* on NavGrid)   (ordered cells)   (Catmull-Rom)    (waypoints)    (per tick)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use glam::Vec3;
//! use marga::{Agent, AStarPlanner, MargaConfig};
//!
//! let config = MargaConfig::default();
//! let mut grid = config.build_grid().unwrap();
//! let mut agent = Agent::from_config(Vec3::new(0.5, 0.0, 0.5), &config).unwrap();
//!
//! let mut planner = AStarPlanner::new(&mut grid, config.to_astar_config());
//! match agent.request_path(&mut planner, Vec3::new(12.5, 0.0, 7.5)) {
//!     Ok(count) => println!("Following {} waypoints", count),
//!     Err(e) if e.is_recoverable() => println!("Already there: {}", e),
//!     Err(e) => panic!("{}", e),
//! }
//!
//! while !agent.tick(1.0 / 60.0).path_complete {}
//! ```
//!
//! ## Coordinate Frame
//!
//! - Y is up; the grid lies in the X/Z plane
//! - Grid column `x` follows world +X, row `y` follows world +Z
//! - Smoothed waypoints are pinned to the agent's height

pub mod config;
pub mod core;
pub mod error;
pub mod grid;
pub mod navigation;
pub mod pathfinding;

pub use config::{ConfigLoadError, MargaConfig};
pub use crate::core::{GridCoord, NodeType};
pub use error::PathError;
pub use grid::{NavGrid, PathNode};
pub use navigation::{Agent, FollowResult, PathFollower};
pub use pathfinding::{
    AStarConfig, AStarPlanner, PathFailure, PathResult, PathSearch, PathSmoother, SmoothingConfig,
};
