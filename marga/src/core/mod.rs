//! Core types for the marga navigation library.
//!
//! - [`GridCoord`]: integer cell index on the navigation grid
//! - [`NodeType`]: per-cell classification used during a search run
//! - world-space helpers over [`glam::Vec3`] (Y is up)

mod cell;
mod point;

pub use cell::NodeType;
pub use point::{GridCoord, move_towards, planar_distance, with_height};
