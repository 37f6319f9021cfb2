//! YAML configuration loading.

use std::io::Write;

use glam::Vec3;
use marga::{Agent, AStarPlanner, ConfigLoadError, GridCoord, MargaConfig};

const CONFIG: &str = r#"
agent:
  speed: 4.0
  subdivisions_per_segment: 6
grid:
  width: 10
  height: 6
  cell_size: 0.5
  origin: [-2.5, 0.0, -1.5]
  blocked:
    - [4, 0]
    - [4, 1]
    - [4, 2]
    - [4, 3]
pathfinding:
  astar:
    allow_diagonal: false
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CONFIG.as_bytes()).unwrap();

        let config = MargaConfig::load(file.path()).unwrap();

        assert_eq!(config.agent.speed, 4.0);
        assert_eq!(config.agent.subdivisions_per_segment, 6);
        assert!(!config.pathfinding.astar.allow_diagonal);
        assert_eq!(config.grid.origin, Vec3::new(-2.5, 0.0, -1.5));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = MargaConfig::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Io(_)));
    }

    #[test]
    fn test_configured_pipeline_runs() {
        let config = MargaConfig::from_yaml(CONFIG).unwrap();
        let mut grid = config.build_grid().unwrap();
        assert!(grid.is_blocked(GridCoord::new(4, 2)));

        let start = grid.grid_to_world(GridCoord::new(1, 1));
        let goal = grid.grid_to_world(GridCoord::new(8, 1));
        let mut agent = Agent::from_config(start, &config).unwrap();
        let mut planner = AStarPlanner::new(&mut grid, config.to_astar_config());

        let count = agent.request_path(&mut planner, goal).unwrap();

        assert_eq!(count % 6, 0);
        // 4-connected detour over the wall top at row 4
        let path = agent.path();
        assert!(path.iter().any(|n| n.coord.y >= 4));
        for w in path.windows(2) {
            assert_eq!(w[0].coord.manhattan_distance(&w[1].coord), 1);
        }
    }

    #[test]
    fn test_invalid_values_rejected() {
        let yaml = "agent:\n  speed: 0\n";
        assert!(matches!(
            MargaConfig::from_yaml(yaml),
            Err(ConfigLoadError::Invalid(_))
        ));

        let yaml = "grid:\n  width: 0\n";
        assert!(MargaConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_shipped_config_parses() {
        let yaml = include_str!("../../configs/config.yaml");
        let config = MargaConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.build_grid().unwrap().blocked_count(), 7);
    }
}
