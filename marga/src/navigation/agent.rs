//! Click-to-move agent: search, smooth, follow.

use glam::Vec3;
use log::{debug, info};

use crate::config::MargaConfig;
use crate::error::PathError;
use crate::grid::PathNode;
use crate::pathfinding::{PathSearch, PathSmoother, SmoothingConfig};

use super::follower::{FollowResult, PathFollower};

/// An agent that walks smoothed grid paths.
///
/// Owns its world position. Each [`request_path`](Self::request_path)
/// discards whatever was being followed, queries the search from the current
/// position, and installs a freshly smoothed waypoint sequence at the
/// agent's current height. [`tick`](Self::tick) is driven by whatever owns
/// the simulation loop.
#[derive(Clone, Debug)]
pub struct Agent {
    position: Vec3,
    follower: PathFollower,
    smoother: PathSmoother,
    /// Last ordered path returned by the search
    path: Vec<PathNode>,
}

impl Agent {
    /// Create an agent at `position`.
    pub fn new(
        position: Vec3,
        speed: f32,
        smoothing: SmoothingConfig,
    ) -> Result<Self, PathError> {
        Ok(Self {
            position,
            follower: PathFollower::new(speed)?,
            smoother: PathSmoother::new(smoothing)?,
            path: Vec::new(),
        })
    }

    /// Create an agent from the agent section of a config.
    pub fn from_config(position: Vec3, config: &MargaConfig) -> Result<Self, PathError> {
        Self::new(position, config.agent.speed, config.to_smoothing_config())
    }

    /// Current world position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Teleport the agent. The current path, if any, is kept.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// The follower driving this agent
    pub fn follower(&self) -> &PathFollower {
        &self.follower
    }

    /// Current waypoint sequence (advisory, for drawing)
    pub fn waypoints(&self) -> &[Vec3] {
        self.follower.waypoints()
    }

    /// Ordered node path behind the current waypoints
    pub fn path(&self) -> &[PathNode] {
        &self.path
    }

    /// True when there is nothing left to follow
    pub fn is_arrived(&self) -> bool {
        self.follower.is_arrived()
    }

    /// Handle a "path requested" event.
    ///
    /// Returns the number of waypoints installed. When the search yields
    /// fewer than two nodes the agent is left in the arrived state and
    /// [`PathError::NoPathFound`] is returned; callers treat that as a no-op.
    pub fn request_path<S>(&mut self, search: &mut S, destination: Vec3) -> Result<usize, PathError>
    where
        S: PathSearch + ?Sized,
    {
        self.follower.clear();
        self.path = search.find_path(self.position, destination);

        if self.path.len() < 2 {
            debug!(
                "[Agent] no path to ({:.2}, {:.2}, {:.2}): search returned {} node(s)",
                destination.x,
                destination.y,
                destination.z,
                self.path.len()
            );
            return Err(PathError::NoPathFound);
        }

        let waypoints = self.smoother.smooth(&self.path, self.position.y)?;
        let count = waypoints.len();
        self.follower.set_waypoints(waypoints);

        info!(
            "[Agent] following {} nodes as {} waypoints",
            self.path.len(),
            count
        );
        Ok(count)
    }

    /// Advance one simulation tick.
    pub fn tick(&mut self, delta_time: f32) -> FollowResult {
        self.follower.advance(&mut self.position, delta_time)
    }
}
