//! Main MargaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PathError;
use crate::grid::NavGrid;
use crate::pathfinding::{AStarConfig, SmoothingConfig};

use super::agent::AgentSection;
use super::error::ConfigLoadError;
use super::grid::GridSection;
use super::pathfinding::PathfindingSection;

/// Full marga configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct MargaConfig {
    /// Agent motion and smoothing
    #[serde(default)]
    pub agent: AgentSection,

    /// Navigation grid
    #[serde(default)]
    pub grid: GridSection,

    /// Pathfinding settings
    #[serde(default)]
    pub pathfinding: PathfindingSection,
}

impl MargaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Check every value the runtime components would reject.
    pub fn validate(&self) -> Result<(), PathError> {
        let speed = self.agent.speed;
        if !(speed.is_finite() && speed > 0.0) {
            return Err(PathError::invalid_config(format!(
                "agent.speed must be positive, got {}",
                speed
            )));
        }
        self.to_smoothing_config().validate()?;

        if self.grid.width == 0 || self.grid.height == 0 {
            return Err(PathError::invalid_config(format!(
                "grid must have at least one cell, got {}x{}",
                self.grid.width, self.grid.height
            )));
        }
        if !(self.grid.cell_size.is_finite() && self.grid.cell_size > 0.0) {
            return Err(PathError::invalid_config(format!(
                "grid.cell_size must be positive, got {}",
                self.grid.cell_size
            )));
        }

        self.to_astar_config().validate()
    }

    /// Convert to SmoothingConfig
    pub fn to_smoothing_config(&self) -> SmoothingConfig {
        SmoothingConfig {
            subdivisions_per_segment: self.agent.subdivisions_per_segment,
            include_destination: self.agent.include_destination,
        }
    }

    /// Convert to AStarConfig
    pub fn to_astar_config(&self) -> AStarConfig {
        AStarConfig {
            allow_diagonal: self.pathfinding.astar.allow_diagonal,
            straight_cost: self.pathfinding.astar.straight_cost,
            diagonal_cost: self.pathfinding.astar.diagonal_cost,
            max_iterations: self.pathfinding.astar.max_iterations,
        }
    }

    /// Build the navigation grid
    pub fn build_grid(&self) -> Result<NavGrid, PathError> {
        self.grid.build()
    }
}
