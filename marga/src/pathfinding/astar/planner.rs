//! A* planner implementation.

use glam::Vec3;
use log::{debug, trace};
use std::collections::BinaryHeap;

use crate::core::{GridCoord, NodeType};
use crate::grid::{NavGrid, PathNode};
use crate::pathfinding::PathSearch;

use super::types::{AStarConfig, OpenEntry, PathFailure, PathResult};

/// A* pathfinder over a [`NavGrid`].
///
/// Search state (costs, parents, Start/End marks) is written straight into
/// the grid's node arena by index. Every run begins with a bulk
/// [`NavGrid::reset_nodes`] pass.
pub struct AStarPlanner<'a> {
    grid: &'a mut NavGrid,
    config: AStarConfig,
}

impl<'a> AStarPlanner<'a> {
    /// Create a new A* planner
    pub fn new(grid: &'a mut NavGrid, config: AStarConfig) -> Self {
        Self { grid, config }
    }

    /// Create with default configuration
    pub fn with_defaults(grid: &'a mut NavGrid) -> Self {
        Self::new(grid, AStarConfig::default())
    }

    /// Read access to the grid (and the node state left by the last run)
    pub fn grid(&self) -> &NavGrid {
        &*self.grid
    }

    /// Find a path from start to goal (grid coordinates)
    pub fn plan(&mut self, start: GridCoord, goal: GridCoord) -> PathResult {
        trace!(
            "[AStar] plan: start=({},{}) goal=({},{})",
            start.x, start.y, goal.x, goal.y
        );

        let (Some(start_idx), Some(goal_idx)) = (self.grid.index_of(start), self.grid.index_of(goal))
        else {
            debug!("[AStar] FAILED: OutOfBounds - start or goal outside grid");
            return PathResult::failed(PathFailure::OutOfBounds, 0);
        };

        self.grid.reset_nodes();

        if self.grid.is_blocked(start) {
            debug!("[AStar] FAILED: StartBlocked at ({},{})", start.x, start.y);
            return PathResult::failed(PathFailure::StartBlocked, 0);
        }
        if self.grid.is_blocked(goal) {
            debug!("[AStar] FAILED: GoalBlocked at ({},{})", goal.x, goal.y);
            return PathResult::failed(PathFailure::GoalBlocked, 0);
        }

        self.grid.node_at_mut(goal_idx).node_type = NodeType::End;
        self.grid.node_at_mut(start_idx).node_type = NodeType::Start;

        if start_idx == goal_idx {
            return PathResult {
                path: vec![self.grid.node_at(start_idx).clone()],
                cost: 0,
                nodes_expanded: 0,
                failure_reason: None,
            };
        }

        let h_start = self.heuristic(start, goal);
        {
            let node = self.grid.node_at_mut(start_idx);
            node.heuristic = h_start;
            node.total_cost = h_start;
        }

        let mut open_set = BinaryHeap::new();
        let mut closed = vec![false; self.grid.cell_count()];
        open_set.push(OpenEntry {
            index: start_idx,
            total_cost: h_start,
            heuristic: h_start,
        });

        let mut nodes_expanded = 0;

        while let Some(current) = open_set.pop() {
            if closed[current.index] {
                continue;
            }

            nodes_expanded += 1;
            if nodes_expanded > self.config.max_iterations {
                debug!(
                    "[AStar] FAILED: MaxIterationsExceeded ({} nodes)",
                    nodes_expanded
                );
                return PathResult::failed(PathFailure::MaxIterationsExceeded, nodes_expanded);
            }

            // Goal reached
            if current.index == goal_idx {
                return self.reconstruct_path(goal, nodes_expanded);
            }

            closed[current.index] = true;

            let current_coord = self.grid.coord_of(current.index);
            let current_g = self.grid.node_at(current.index).dist_to_start;

            let neighbors = if self.config.allow_diagonal {
                current_coord.neighbors_8().to_vec()
            } else {
                current_coord.neighbors_4().to_vec()
            };

            for (i, neighbor) in neighbors.iter().enumerate() {
                let Some(n_idx) = self.grid.index_of(*neighbor) else {
                    continue;
                };
                if closed[n_idx] || self.grid.is_blocked(*neighbor) {
                    continue;
                }

                let is_diagonal = i >= 4;
                if is_diagonal && self.cuts_corner(current_coord, *neighbor) {
                    continue;
                }

                let move_cost = if is_diagonal {
                    self.config.diagonal_cost
                } else {
                    self.config.straight_cost
                };
                let tentative_g = current_g + move_cost;

                let h = self.heuristic(*neighbor, goal);
                let node = self.grid.node_at_mut(n_idx);
                let discovered = node.parent.is_some();
                if !discovered || tentative_g < node.dist_to_start {
                    node.parent = Some(current_coord);
                    node.dist_to_start = tentative_g;
                    node.heuristic = h;
                    node.total_cost = tentative_g + h;

                    open_set.push(OpenEntry {
                        index: n_idx,
                        total_cost: node.total_cost,
                        heuristic: h,
                    });
                }
            }
        }

        debug!(
            "[AStar] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        PathResult::failed(PathFailure::NoPath, nodes_expanded)
    }

    /// Find a path from start to goal (world coordinates)
    pub fn plan_world(&mut self, start: Vec3, goal: Vec3) -> PathResult {
        let start_grid = self.grid.world_to_grid(start);
        let goal_grid = self.grid.world_to_grid(goal);
        self.plan(start_grid, goal_grid)
    }

    /// Diagonal steps may not squeeze between two cells sharing a blocked corner
    fn cuts_corner(&self, from: GridCoord, to: GridCoord) -> bool {
        self.grid.is_blocked(GridCoord::new(to.x, from.y))
            || self.grid.is_blocked(GridCoord::new(from.x, to.y))
    }

    /// Heuristic function (octile for 8-connected, Manhattan for 4-connected)
    fn heuristic(&self, from: GridCoord, to: GridCoord) -> i32 {
        let dx = (from.x - to.x).abs();
        let dy = (from.y - to.y).abs();

        if self.config.allow_diagonal {
            let min = dx.min(dy);
            let max = dx.max(dy);
            min * self.config.diagonal_cost + (max - min) * self.config.straight_cost
        } else {
            (dx + dy) * self.config.straight_cost
        }
    }

    /// Reconstruct the path from the parent links in the arena
    fn reconstruct_path(&self, goal: GridCoord, nodes_expanded: usize) -> PathResult {
        let path: Vec<PathNode> = self.grid.trace_path(goal);
        let cost = path.last().map_or(0, |n| n.dist_to_start);

        trace!(
            "[AStar] SUCCESS: path length={} cells, cost={}, nodes_expanded={}",
            path.len(),
            cost,
            nodes_expanded
        );

        PathResult {
            path,
            cost,
            nodes_expanded,
            failure_reason: None,
        }
    }
}

impl PathSearch for AStarPlanner<'_> {
    fn find_path(&mut self, origin: Vec3, destination: Vec3) -> Vec<PathNode> {
        let result = self.plan_world(origin, destination);
        if let Some(reason) = result.failure_reason {
            debug!("[AStar] no path: {:?}", reason);
        }
        result.path
    }
}
