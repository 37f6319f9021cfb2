//! A* pathfinding types.

use std::cmp::Ordering;

use crate::error::PathError;
use crate::grid::PathNode;

/// Entry in the A* open set
#[derive(Clone, Copy, Debug)]
pub(super) struct OpenEntry {
    pub index: usize,
    pub total_cost: i32,
    pub heuristic: i32,
}

impl Eq for OpenEntry {}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior, ties broken by lower h
        other
            .total_cost
            .cmp(&self.total_cost)
            .then_with(|| other.heuristic.cmp(&self.heuristic))
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* pathfinding configuration
#[derive(Clone, Debug)]
pub struct AStarConfig {
    /// Allow diagonal movement (8-connected vs 4-connected)
    pub allow_diagonal: bool,
    /// Cost of a cardinal step
    pub straight_cost: i32,
    /// Cost of a diagonal step (about straight_cost * sqrt(2))
    pub diagonal_cost: i32,
    /// Maximum number of nodes to expand before giving up
    pub max_iterations: usize,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self {
            allow_diagonal: true,
            straight_cost: 10,
            diagonal_cost: 14,
            max_iterations: 100_000,
        }
    }
}

impl AStarConfig {
    /// 4-connected search
    pub fn cardinal_only() -> Self {
        Self {
            allow_diagonal: false,
            ..Default::default()
        }
    }

    /// Check step costs.
    ///
    /// The octile heuristic only stays admissible while
    /// `straight_cost <= diagonal_cost <= 2 * straight_cost`.
    pub fn validate(&self) -> Result<(), PathError> {
        if self.straight_cost <= 0 {
            return Err(PathError::invalid_config(format!(
                "straight_cost must be positive, got {}",
                self.straight_cost
            )));
        }
        if self.allow_diagonal
            && !(self.straight_cost..=self.straight_cost.saturating_mul(2))
                .contains(&self.diagonal_cost)
        {
            return Err(PathError::invalid_config(format!(
                "diagonal_cost must be in [{}, {}], got {}",
                self.straight_cost,
                self.straight_cost.saturating_mul(2),
                self.diagonal_cost
            )));
        }
        Ok(())
    }
}

/// Result of A* pathfinding
#[derive(Clone, Debug)]
pub struct PathResult {
    /// Nodes from start to goal inclusive (empty if no path found)
    pub path: Vec<PathNode>,
    /// Total path cost (g of the goal)
    pub cost: i32,
    /// Number of nodes expanded during search
    pub nodes_expanded: usize,
    /// Reason for failure (if any)
    pub failure_reason: Option<PathFailure>,
}

impl PathResult {
    /// Create a failed result
    pub(super) fn failed(reason: PathFailure, nodes_expanded: usize) -> Self {
        Self {
            path: Vec::new(),
            cost: i32::MAX,
            nodes_expanded,
            failure_reason: Some(reason),
        }
    }

    /// Whether a path was found
    pub fn success(&self) -> bool {
        self.failure_reason.is_none()
    }

    /// Path length in cells
    pub fn length_cells(&self) -> usize {
        self.path.len()
    }
}

/// Reason for path failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathFailure {
    /// Start or goal is out of bounds
    OutOfBounds,
    /// Start position is not traversable
    StartBlocked,
    /// Goal position is not traversable
    GoalBlocked,
    /// No path exists between start and goal
    NoPath,
    /// Maximum iterations exceeded
    MaxIterationsExceeded,
}
