//! Path following.
//!
//! - [`PathFollower`]: moves a position along a waypoint sequence at constant
//!   speed, one tick at a time
//! - [`Agent`]: owns a position and wires search, smoothing and following
//!   together for click-to-move style requests

mod agent;
mod follower;

pub use agent::Agent;
pub use follower::{FollowResult, PathFollower};
