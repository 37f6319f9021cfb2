//! Integration tests for marga
//!
//! Exercise the full pipeline: grid search, Catmull-Rom smoothing and
//! constant-speed following, plus YAML configuration loading.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration -- --nocapture
//! ```

mod pipeline;
mod scenarios;
mod yaml_config;

use glam::Vec3;
use marga::{GridCoord, PathNode};

/// Nodes on a unit grid in the X/Z plane at height 0
pub fn unit_path(cells: &[(i32, i32)]) -> Vec<PathNode> {
    cells
        .iter()
        .map(|&(x, y)| PathNode::new(Vec3::new(x as f32, 0.0, y as f32), GridCoord::new(x, y)))
        .collect()
}
