//! Unified configuration loading for marga.
//!
//! Loads all configuration from a single YAML file; every field has a
//! default so a partial file is fine.
//!
//! ## Example YAML
//!
//! ```yaml
//! agent:
//!   speed: 10.0
//!   subdivisions_per_segment: 50
//!   include_destination: false
//!
//! grid:
//!   width: 20
//!   height: 20
//!   cell_size: 1.0
//!   origin: [0.0, 0.0, 0.0]
//!   blocked:
//!     - [5, 5]
//!
//! pathfinding:
//!   astar:
//!     allow_diagonal: true
//! ```

mod agent;
mod defaults;
mod error;
mod grid;
mod marga;
mod pathfinding;

// Re-export main types
pub use error::ConfigLoadError;
pub use marga::MargaConfig;

// Re-export section types
pub use agent::AgentSection;
pub use grid::GridSection;
pub use pathfinding::{AStarSettings, PathfindingSection};
