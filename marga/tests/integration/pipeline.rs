//! End-to-end: A* on a NavGrid feeding the agent.

use glam::Vec3;
use marga::pathfinding::path_length;
use marga::{AStarConfig, AStarPlanner, Agent, GridCoord, NavGrid, NodeType, PathSearch, SmoothingConfig};

fn walled_grid() -> NavGrid {
    let mut grid = NavGrid::new(12, 12, 1.0, Vec3::ZERO).unwrap();
    // Vertical wall at x = 5 with a gap at the top
    for y in 0..10 {
        grid.set_blocked(GridCoord::new(5, y), true);
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_walks_around_wall() {
        let mut grid = walled_grid();
        let start = Vec3::new(1.5, 0.25, 1.5);
        let goal = Vec3::new(9.5, 0.0, 1.5);

        let mut agent = Agent::new(start, 4.0, SmoothingConfig::with_subdivisions(8)).unwrap();
        let mut planner = AStarPlanner::new(&mut grid, AStarConfig::default());

        let count = agent.request_path(&mut planner, goal).unwrap();
        let nodes = agent.path().len();
        assert_eq!(count, (nodes - 1) * 8);

        // Detour must go through the gap (y >= 10)
        assert!(agent.path().iter().any(|n| n.coord.y >= 10));
        assert!(agent.path().iter().all(|n| n.node_type != NodeType::Blocked));
        assert_eq!(agent.path()[0].coord, GridCoord::new(1, 1));
        assert_eq!(agent.path().last().unwrap().coord, GridCoord::new(9, 1));

        // Waypoints are at the agent's height, not the grid's
        assert!(agent.waypoints().iter().all(|p| p.y == 0.25));

        let mut ticks = 0;
        while !agent.tick(1.0 / 60.0).path_complete {
            ticks += 1;
            assert!(ticks < 100_000);
        }

        let end = agent.position();
        assert_eq!(end, *agent.waypoints().last().unwrap());
        // Last sample sits within one cell of the goal centre
        assert!(end.distance(Vec3::new(9.5, 0.25, 1.5)) < 1.0);
    }

    #[test]
    fn test_include_destination_reaches_goal_centre() {
        let mut grid = walled_grid();
        let config = SmoothingConfig {
            subdivisions_per_segment: 5,
            include_destination: true,
        };
        let mut agent = Agent::new(Vec3::new(0.5, 0.0, 11.5), 6.0, config).unwrap();
        let mut planner = AStarPlanner::with_defaults(&mut grid);

        agent.request_path(&mut planner, Vec3::new(10.5, 0.0, 11.5)).unwrap();
        while !agent.tick(0.05).path_complete {}

        assert_eq!(agent.position(), Vec3::new(10.5, 0.0, 11.5));
    }

    #[test]
    fn test_unreachable_goal_is_noop() {
        let mut grid = NavGrid::new(8, 8, 1.0, Vec3::ZERO).unwrap();
        for y in 0..8 {
            grid.set_blocked(GridCoord::new(4, y), true);
        }
        let mut agent = Agent::new(Vec3::new(1.5, 0.0, 1.5), 1.0, SmoothingConfig::default()).unwrap();
        let mut planner = AStarPlanner::with_defaults(&mut grid);

        let err = agent.request_path(&mut planner, Vec3::new(6.5, 0.0, 6.5)).unwrap_err();

        assert!(err.is_recoverable());
        assert!(agent.is_arrived());
        let result = agent.tick(1.0);
        assert!(result.path_complete);
        assert_eq!(agent.position(), Vec3::new(1.5, 0.0, 1.5));
    }

    #[test]
    fn test_same_cell_request_is_noop() {
        let mut grid = NavGrid::new(4, 4, 1.0, Vec3::ZERO).unwrap();
        let mut planner = AStarPlanner::with_defaults(&mut grid);
        let path = planner.find_path(Vec3::new(2.1, 0.0, 2.1), Vec3::new(2.9, 0.0, 2.8));
        assert_eq!(path.len(), 1);

        let mut agent = Agent::new(Vec3::new(2.1, 0.0, 2.1), 1.0, SmoothingConfig::default()).unwrap();
        assert!(agent.request_path(&mut planner, Vec3::new(2.9, 0.0, 2.8)).is_err());
        assert!(agent.is_arrived());
    }

    #[test]
    fn test_waypoints_pass_through_every_cell_centre() {
        let mut grid = NavGrid::new(20, 20, 1.0, Vec3::ZERO).unwrap();
        let mut agent =
            Agent::new(Vec3::new(0.5, 0.0, 0.5), 1.0, SmoothingConfig::with_subdivisions(10)).unwrap();
        let mut planner = AStarPlanner::with_defaults(&mut grid);

        agent.request_path(&mut planner, Vec3::new(15.5, 0.0, 5.5)).unwrap();

        let nodes = agent.path();
        let waypoints = agent.waypoints();
        for (i, node) in nodes[..nodes.len() - 1].iter().enumerate() {
            assert_eq!(waypoints[i * 10], node.position);
        }
        assert!(path_length(waypoints) > 0.0);
    }
}
