//! Agent motion configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Agent settings section
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AgentSection {
    /// Travel speed in world units per second
    #[serde(default = "defaults::speed")]
    pub speed: f32,

    /// Spline samples per node-to-node segment
    #[serde(default = "defaults::subdivisions")]
    pub subdivisions_per_segment: usize,

    /// Append the exact destination cell centre as the last waypoint
    #[serde(default)]
    pub include_destination: bool,
}

impl Default for AgentSection {
    fn default() -> Self {
        Self {
            speed: 10.0,
            subdivisions_per_segment: 50,
            include_destination: false,
        }
    }
}
