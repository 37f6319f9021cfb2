//! Per-cell pathfinding record.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, NodeType};

/// One cell of the navigation grid as seen by the search.
///
/// `coord` is the node's identity. Everything else except `position` is
/// transient bookkeeping owned by the search run and wiped by [`reset`].
///
/// [`reset`]: PathNode::reset
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathNode {
    /// World position of the cell center
    pub position: Vec3,
    /// Classification for the current search run
    pub node_type: NodeType,
    /// Cell index on the grid
    pub coord: GridCoord,
    /// Predecessor on the best known path, `None` until discovered
    pub parent: Option<GridCoord>,
    /// Cost from the start cell (g)
    pub dist_to_start: i32,
    /// Estimated cost to the goal (h)
    pub heuristic: i32,
    /// g + h
    pub total_cost: i32,
}

impl PathNode {
    /// Create an unvisited node at the given world position and grid cell
    pub fn new(position: Vec3, coord: GridCoord) -> Self {
        Self {
            position,
            node_type: NodeType::Walkable,
            coord,
            parent: None,
            dist_to_start: 0,
            heuristic: 0,
            total_cost: 0,
        }
    }

    /// Clear search bookkeeping.
    ///
    /// Everything is treated as walkable until the grid re-applies its
    /// static obstacles.
    pub fn reset(&mut self) {
        self.node_type = NodeType::Walkable;
        self.parent = None;
        self.dist_to_start = 0;
        self.heuristic = 0;
        self.total_cost = 0;
    }

    /// Column index
    #[inline]
    pub fn x(&self) -> i32 {
        self.coord.x
    }

    /// Row index
    #[inline]
    pub fn y(&self) -> i32 {
        self.coord.y
    }

    /// Can a path pass through this node?
    #[inline]
    pub fn is_walkable(&self) -> bool {
        self.node_type.is_traversable()
    }

    /// Has the search linked this node to a predecessor?
    #[inline]
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_unvisited() {
        let node = PathNode::new(Vec3::new(0.5, 0.0, 1.5), GridCoord::new(0, 1));
        assert_eq!(node.node_type, NodeType::Walkable);
        assert_eq!(node.parent, None);
        assert_eq!(node.total_cost, 0);
        assert_eq!((node.x(), node.y()), (0, 1));
    }

    #[test]
    fn test_reset_clears_search_state() {
        let mut node = PathNode::new(Vec3::ZERO, GridCoord::new(3, 4));
        node.node_type = NodeType::End;
        node.parent = Some(GridCoord::new(2, 4));
        node.dist_to_start = 30;
        node.heuristic = 14;
        node.total_cost = 44;

        node.reset();

        assert_eq!(node.node_type, NodeType::Walkable);
        assert!(!node.has_parent());
        assert_eq!(node.dist_to_start, 0);
        assert_eq!(node.heuristic, 0);
        assert_eq!(node.total_cost, 0);
        // Identity and position survive
        assert_eq!(node.coord, GridCoord::new(3, 4));
        assert_eq!(node.position, Vec3::ZERO);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut node = PathNode::new(Vec3::ONE, GridCoord::new(1, 1));
        node.node_type = NodeType::Blocked;
        node.reset();
        let once = node.clone();
        node.reset();
        assert_eq!(node, once);
    }
}
