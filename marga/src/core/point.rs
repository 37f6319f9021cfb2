//! Grid coordinates and world-space point helpers.
//!
//! World positions use [`glam::Vec3`] with Y as the vertical axis. The
//! navigation grid lies in the horizontal X/Z plane: grid column `x` maps to
//! world X and grid row `y` maps to world Z.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Grid coordinates (integer cell indices)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Chebyshev distance (max of x and y distance) - used for 8-connected grids
    #[inline]
    pub fn chebyshev_distance(&self, other: &GridCoord) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Get the 4 cardinal neighbors (N, E, S, W)
    #[inline]
    pub fn neighbors_4(&self) -> [GridCoord; 4] {
        [
            GridCoord::new(self.x, self.y + 1), // North
            GridCoord::new(self.x + 1, self.y), // East
            GridCoord::new(self.x, self.y - 1), // South
            GridCoord::new(self.x - 1, self.y), // West
        ]
    }

    /// Get the 8 neighbors, cardinals first then diagonals.
    ///
    /// Indices 0..4 match [`neighbors_4`](Self::neighbors_4); indices 4..8
    /// are NE, SE, SW, NW.
    #[inline]
    pub fn neighbors_8(&self) -> [GridCoord; 8] {
        [
            GridCoord::new(self.x, self.y + 1),     // N
            GridCoord::new(self.x + 1, self.y),     // E
            GridCoord::new(self.x, self.y - 1),     // S
            GridCoord::new(self.x - 1, self.y),     // W
            GridCoord::new(self.x + 1, self.y + 1), // NE
            GridCoord::new(self.x + 1, self.y - 1), // SE
            GridCoord::new(self.x - 1, self.y - 1), // SW
            GridCoord::new(self.x - 1, self.y + 1), // NW
        ]
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.x - other.x, self.y - other.y)
    }
}

/// Replace the vertical component of a world point.
#[inline]
pub fn with_height(point: Vec3, height: f32) -> Vec3 {
    Vec3::new(point.x, height, point.z)
}

/// Horizontal (X/Z) distance between two world points, ignoring height.
#[inline]
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    let dx = a.x - b.x;
    let dz = a.z - b.z;
    (dx * dx + dz * dz).sqrt()
}

/// Move `current` toward `target` by at most `max_delta`.
///
/// Never overshoots: when the remaining distance fits inside the step the
/// exact `target` value is returned, so callers can compare positions with
/// `==`. A non-positive `max_delta` leaves `current` unchanged.
#[inline]
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let delta = target - current;
    let distance = delta.length();

    if max_delta <= 0.0 {
        return current;
    }
    if distance <= f32::EPSILON || distance <= max_delta {
        return target;
    }

    current + delta / distance * max_delta
}
