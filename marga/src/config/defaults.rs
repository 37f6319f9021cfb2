//! Default value functions for serde deserialization.

use glam::Vec3;

pub fn speed() -> f32 {
    10.0
}

pub fn subdivisions() -> usize {
    50
}

pub fn grid_size() -> usize {
    20
}

pub fn cell_size() -> f32 {
    1.0
}

pub fn origin() -> Vec3 {
    Vec3::ZERO
}

pub fn enabled() -> bool {
    true
}

pub fn straight_cost() -> i32 {
    10
}

pub fn diagonal_cost() -> i32 {
    14
}

pub fn max_iterations() -> usize {
    100_000
}
