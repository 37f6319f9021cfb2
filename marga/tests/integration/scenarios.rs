//! Behavioural scenarios for smoothing and following.

use glam::Vec3;
use marga::{Agent, PathError, PathFollower, PathNode, PathSearch, PathSmoother, SmoothingConfig};

use super::unit_path;

struct FixedSearch(Vec<PathNode>);

impl PathSearch for FixedSearch {
    fn find_path(&mut self, _origin: Vec3, _destination: Vec3) -> Vec<PathNode> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_three_cells_gives_eight_waypoints() {
        let smoother = PathSmoother::new(SmoothingConfig::with_subdivisions(4)).unwrap();
        let path = unit_path(&[(0, 0), (1, 0), (2, 0)]);

        let waypoints = smoother.smooth(&path, 0.0).unwrap();

        assert_eq!(waypoints.len(), 8);
        assert!(waypoints[..4].iter().all(|p| (0.0..=1.0).contains(&p.x)));
        assert!(waypoints[4..].iter().all(|p| (1.0..=2.0).contains(&p.x)));
    }

    #[test]
    fn test_single_node_search_means_arrived_without_ticks() {
        let mut agent = Agent::new(Vec3::ZERO, 10.0, SmoothingConfig::default()).unwrap();
        let mut search = FixedSearch(unit_path(&[(0, 0)]));

        let result = agent.request_path(&mut search, Vec3::new(0.2, 0.0, 0.2));

        assert_eq!(result, Err(PathError::NoPathFound));
        assert!(agent.waypoints().is_empty());
        assert!(agent.is_arrived());
        assert_eq!(agent.position(), Vec3::ZERO);
    }

    #[test]
    fn test_speed_ten_tick_one() {
        let mut follower = PathFollower::new(10.0).unwrap();
        follower.set_waypoints(vec![Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 25.0)]);
        let mut position = Vec3::ZERO;

        follower.advance(&mut position, 1.0);
        assert_eq!(position, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(follower.cursor(), 1);

        follower.advance(&mut position, 1.0);
        assert_eq!(position, Vec3::new(0.0, 0.0, 15.0));
        assert_eq!(follower.cursor(), 1);
    }

    #[test]
    fn test_cursor_strictly_increases_through_whole_path() {
        let smoother = PathSmoother::new(SmoothingConfig::with_subdivisions(6)).unwrap();
        let path = unit_path(&[(0, 0), (1, 0), (2, 1), (2, 2), (3, 3)]);
        let waypoints = smoother.smooth(&path, 0.0).unwrap();
        let total = waypoints.len();

        let mut follower = PathFollower::new(1.5).unwrap();
        follower.set_waypoints(waypoints);
        let mut position = Vec3::ZERO;

        let mut last_cursor = 0;
        let mut ticks = 0;
        while !follower.is_arrived() {
            let target = follower.current_target().unwrap();
            let before = position;
            follower.advance(&mut position, 1.0 / 30.0);

            // Never moves further than the remaining distance
            assert!(before.distance(position) <= before.distance(target) + 1e-5);
            if position == target {
                assert_eq!(follower.cursor(), last_cursor + 1);
            } else {
                assert_eq!(follower.cursor(), last_cursor);
            }
            last_cursor = follower.cursor();

            ticks += 1;
            assert!(ticks < 100_000);
        }

        assert_eq!(follower.cursor(), total);
    }

    #[test]
    fn test_new_request_keeps_position_and_restarts_cursor() {
        let mut agent = Agent::new(Vec3::ZERO, 1.0, SmoothingConfig::with_subdivisions(4)).unwrap();
        let mut first = FixedSearch(unit_path(&[(0, 0), (4, 0)]));
        agent.request_path(&mut first, Vec3::new(4.0, 0.0, 0.0)).unwrap();

        for _ in 0..10 {
            agent.tick(0.1);
        }
        let mid = agent.position();
        assert!(agent.follower().cursor() > 0);

        let mut second = FixedSearch(unit_path(&[(0, 0), (0, 4)]));
        agent.request_path(&mut second, Vec3::new(0.0, 0.0, 4.0)).unwrap();

        assert_eq!(agent.position(), mid);
        assert_eq!(agent.follower().cursor(), 0);
        // First waypoint of the new path is behind the agent; it walks back to it
        agent.tick(100.0);
        assert_eq!(agent.position(), Vec3::ZERO);
    }
}
