//! Node arena for the navigation grid.

use glam::Vec3;
use log::trace;

use crate::core::{GridCoord, NodeType};
use crate::error::PathError;

use super::node::PathNode;

/// Arena of [`PathNode`]s, one per cell, indexed by grid coordinate.
///
/// The grid uses a coordinate system where:
/// - cell (0, 0) has its minimum corner at `origin`
/// - column `x` grows along world +X, row `y` along world +Z
/// - cell (x, y) covers `origin + x*cell_size .. origin + (x+1)*cell_size`
///
/// Searches mutate nodes through [`node_mut`](Self::node_mut) /
/// [`node_at_mut`](Self::node_at_mut); nodes are never copied back in.
/// Obstacles live in a separate static layer so that [`reset_nodes`]
/// can restore them after every run.
///
/// [`reset_nodes`]: NavGrid::reset_nodes
#[derive(Clone, Debug)]
pub struct NavGrid {
    nodes: Vec<PathNode>,
    blocked: Vec<bool>,
    width: usize,
    height: usize,
    cell_size: f32,
    origin: Vec3,
}

impl NavGrid {
    /// Create a grid with every cell walkable.
    pub fn new(
        width: usize,
        height: usize,
        cell_size: f32,
        origin: Vec3,
    ) -> Result<Self, PathError> {
        if width == 0 || height == 0 {
            return Err(PathError::invalid_config(format!(
                "grid must have at least one cell, got {}x{}",
                width, height
            )));
        }
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(PathError::invalid_config(format!(
                "cell_size must be positive, got {}",
                cell_size
            )));
        }
        if width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(PathError::invalid_config("grid dimensions exceed i32 range"));
        }

        let mut grid = Self {
            nodes: Vec::with_capacity(width * height),
            blocked: vec![false; width * height],
            width,
            height,
            cell_size,
            origin,
        };

        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let coord = GridCoord::new(x, y);
                let position = grid.grid_to_world(coord);
                grid.nodes.push(PathNode::new(position, coord));
            }
        }

        Ok(grid)
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// World units per cell
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// World position of the minimum corner of cell (0, 0)
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Convert world coordinates to grid coordinates (height is ignored)
    ///
    /// Non-finite X/Z map to `(-1, -1)`, which is outside every grid.
    #[inline]
    pub fn world_to_grid(&self, point: Vec3) -> GridCoord {
        if !(point.x.is_finite() && point.z.is_finite()) {
            return GridCoord::new(-1, -1);
        }
        let x = ((point.x - self.origin.x) / self.cell_size).floor() as i32;
        let y = ((point.z - self.origin.z) / self.cell_size).floor() as i32;
        GridCoord::new(x, y)
    }

    /// Convert grid coordinates to world coordinates (cell center)
    #[inline]
    pub fn grid_to_world(&self, coord: GridCoord) -> Vec3 {
        Vec3::new(
            self.origin.x + (coord.x as f32 + 0.5) * self.cell_size,
            self.origin.y,
            self.origin.z + (coord.y as f32 + 0.5) * self.cell_size,
        )
    }

    /// Check if grid coordinates are within bounds
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Convert grid coordinates to arena index
    #[inline]
    pub fn index_of(&self, coord: GridCoord) -> Option<usize> {
        if self.is_valid_coord(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Convert arena index to grid coordinates
    #[inline]
    pub fn coord_of(&self, index: usize) -> GridCoord {
        GridCoord::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Node at grid coordinates
    #[inline]
    pub fn node(&self, coord: GridCoord) -> Option<&PathNode> {
        self.index_of(coord).map(|i| &self.nodes[i])
    }

    /// Mutable node at grid coordinates
    #[inline]
    pub fn node_mut(&mut self, coord: GridCoord) -> Option<&mut PathNode> {
        self.index_of(coord).map(move |i| &mut self.nodes[i])
    }

    /// Node by arena index
    #[inline]
    pub fn node_at(&self, index: usize) -> &PathNode {
        &self.nodes[index]
    }

    /// Mutable node by arena index
    #[inline]
    pub fn node_at_mut(&mut self, index: usize) -> &mut PathNode {
        &mut self.nodes[index]
    }

    /// All nodes in arena order (row-major)
    #[inline]
    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    /// Mark or clear a static obstacle. Returns false if out of bounds.
    ///
    /// Takes effect on the node immediately and survives every reset.
    pub fn set_blocked(&mut self, coord: GridCoord, blocked: bool) -> bool {
        let Some(idx) = self.index_of(coord) else {
            return false;
        };

        self.blocked[idx] = blocked;
        let node = &mut self.nodes[idx];
        if blocked {
            node.node_type = NodeType::Blocked;
        } else if node.node_type == NodeType::Blocked {
            node.node_type = NodeType::Walkable;
        }
        true
    }

    /// Is the cell a static obstacle? Out-of-bounds cells count as blocked.
    #[inline]
    pub fn is_blocked(&self, coord: GridCoord) -> bool {
        self.index_of(coord).is_none_or(|i| self.blocked[i])
    }

    /// Number of static obstacle cells
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|b| **b).count()
    }

    /// Reset every node for a new search run, then re-apply static obstacles.
    pub fn reset_nodes(&mut self) {
        for (node, &blocked) in self.nodes.iter_mut().zip(&self.blocked) {
            node.reset();
            if blocked {
                node.node_type = NodeType::Blocked;
            }
        }
        trace!("[NavGrid] reset {} nodes", self.nodes.len());
    }

    /// Follow parent links back from `goal` and return the path start-first.
    ///
    /// A goal with no parent yields just the goal node. Returns an empty
    /// path for an out-of-bounds goal.
    pub fn trace_path(&self, goal: GridCoord) -> Vec<PathNode> {
        let mut path = Vec::new();
        let mut current = self.node(goal);

        while let Some(node) = current {
            path.push(node.clone());
            // A parent chain can never be longer than the arena
            if path.len() > self.nodes.len() {
                log::warn!("[NavGrid] parent cycle detected at {:?}", node.coord);
                return Vec::new();
            }
            current = node.parent.and_then(|p| self.node(p));
        }

        path.reverse();
        path
    }

    /// ASCII rendering of node classifications, top row first
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                out.push(self.nodes[y * self.width + x].node_type.as_char());
            }
            out.push('\n');
        }
        out
    }
}
