//! Pathfinding configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Pathfinding settings section
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct PathfindingSection {
    /// A* algorithm settings
    #[serde(default)]
    pub astar: AStarSettings,
}

/// A* algorithm settings
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AStarSettings {
    /// Enable 8-directional movement
    #[serde(default = "defaults::enabled")]
    pub allow_diagonal: bool,

    /// Cost of a cardinal step
    #[serde(default = "defaults::straight_cost")]
    pub straight_cost: i32,

    /// Cost of a diagonal step
    #[serde(default = "defaults::diagonal_cost")]
    pub diagonal_cost: i32,

    /// Maximum nodes to expand
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: usize,
}

impl Default for AStarSettings {
    fn default() -> Self {
        Self {
            allow_diagonal: true,
            straight_cost: 10,
            diagonal_cost: 14,
            max_iterations: 100_000,
        }
    }
}
