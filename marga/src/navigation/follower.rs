//! Constant-speed waypoint following.

use glam::Vec3;
use log::trace;

use crate::core::move_towards;
use crate::error::PathError;

/// Result of a path following step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowResult {
    /// Cursor after the step (index of the next unreached waypoint).
    pub waypoint_idx: usize,
    /// Whether every waypoint has been reached (or there are none).
    pub path_complete: bool,
    /// Distance left to the waypoint under the cursor.
    pub distance_to_waypoint: f32,
}

impl FollowResult {
    fn complete(waypoint_idx: usize) -> Self {
        Self {
            waypoint_idx,
            path_complete: true,
            distance_to_waypoint: 0.0,
        }
    }
}

/// Drives a position along a waypoint sequence at fixed speed.
///
/// Each [`advance`](Self::advance) moves the position straight toward the
/// waypoint under the cursor by at most `speed * delta_time`, never past it.
/// The cursor moves on only when the position lands exactly on the waypoint;
/// the final partial step always lands exactly, so arrival does not depend
/// on floating-point accumulation.
///
/// # Example
///
/// ```rust,ignore
/// use marga::navigation::PathFollower;
/// use glam::Vec3;
///
/// let mut follower = PathFollower::new(10.0)?;
/// follower.set_waypoints(vec![Vec3::new(5.0, 0.0, 0.0)]);
///
/// let mut position = Vec3::ZERO;
/// let result = follower.advance(&mut position, 1.0);
/// assert!(result.path_complete);
/// ```
#[derive(Clone, Debug)]
pub struct PathFollower {
    /// World units per unit time.
    speed: f32,
    /// Current sequence, empty when idle.
    waypoints: Vec<Vec3>,
    /// Index of the next unreached waypoint.
    cursor: usize,
}

impl PathFollower {
    /// Create a follower with no path.
    pub fn new(speed: f32) -> Result<Self, PathError> {
        validate_speed(speed)?;
        Ok(Self {
            speed,
            waypoints: Vec::new(),
            cursor: 0,
        })
    }

    /// Movement speed.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Change the movement speed.
    pub fn set_speed(&mut self, speed: f32) -> Result<(), PathError> {
        validate_speed(speed)?;
        self.speed = speed;
        Ok(())
    }

    /// Replace the waypoint sequence and restart from its first waypoint.
    ///
    /// The caller's position is left alone; the first waypoint may be
    /// behind or ahead of it.
    pub fn set_waypoints(&mut self, waypoints: Vec<Vec3>) {
        trace!("[Follower] new path with {} waypoints", waypoints.len());
        self.waypoints = waypoints;
        self.cursor = 0;
    }

    /// Drop the current sequence. The follower reports arrived afterwards.
    pub fn clear(&mut self) {
        self.waypoints.clear();
        self.cursor = 0;
    }

    /// Current waypoint sequence (for visualization).
    pub fn waypoints(&self) -> &[Vec3] {
        &self.waypoints
    }

    /// Index of the next unreached waypoint.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Waypoint under the cursor, if any.
    pub fn current_target(&self) -> Option<Vec3> {
        self.waypoints.get(self.cursor).copied()
    }

    /// Waypoints not yet reached.
    pub fn remaining(&self) -> usize {
        self.waypoints.len().saturating_sub(self.cursor)
    }

    /// True when there is nothing left to follow.
    pub fn is_arrived(&self) -> bool {
        self.cursor >= self.waypoints.len()
    }

    /// Advance `position` by one simulation tick.
    ///
    /// No-op once the path is complete. A non-positive `delta_time` does not
    /// move the position.
    pub fn advance(&mut self, position: &mut Vec3, delta_time: f32) -> FollowResult {
        let Some(target) = self.current_target() else {
            return FollowResult::complete(self.cursor);
        };

        *position = move_towards(*position, target, self.speed * delta_time);

        if *position == target {
            self.cursor += 1;
            trace!(
                "[Follower] reached waypoint {}/{}",
                self.cursor,
                self.waypoints.len()
            );
        }

        match self.current_target() {
            Some(next) => FollowResult {
                waypoint_idx: self.cursor,
                path_complete: false,
                distance_to_waypoint: position.distance(next),
            },
            None => FollowResult::complete(self.cursor),
        }
    }
}

fn validate_speed(speed: f32) -> Result<(), PathError> {
    if speed.is_finite() && speed > 0.0 {
        Ok(())
    } else {
        Err(PathError::invalid_config(format!(
            "speed must be positive, got {}",
            speed
        )))
    }
}
