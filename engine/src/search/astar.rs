//! A* search over a roadmap

use crate::search::SearchError;
use crate::search::graph::{NodeId, Roadmap};
use crate::search::util::{best_first_search, distance_to_goal, path_length};

/// A* search from `start` to `goal`.
///
/// Candidate paths are expanded in order of f(x) = g(x) + h(x), where g(x)
/// is the accumulated path length and h(x) is the straight-line distance
/// from the path's last node to the goal. The heuristic takes the goal as
/// an explicit argument of every evaluation.
///
/// # Errors
///
/// [`SearchError::NodeOutOfRange`] if start or goal is not in the roadmap;
/// [`SearchError::NoPath`] if the goal is unreachable.
pub fn astar(roadmap: &Roadmap, start: NodeId, goal: NodeId) -> Result<Vec<NodeId>, SearchError> {
    best_first_search(roadmap, start, goal, |map, path| {
        path_length(map, path) + distance_to_goal(map, path, goal)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_astar_prefers_short_route() {
        // start - a - goal is shorter than start - b - goal
        let mut map = Roadmap::new();
        let start = map.add_node(Vec3::ZERO);
        let a = map.add_node(Vec3::new(1.0, 0.0, 0.0));
        let b = map.add_node(Vec3::new(0.0, 5.0, 0.0));
        let goal = map.add_node(Vec3::new(2.0, 0.0, 0.0));
        map.connect(start, a);
        map.connect(start, b);
        map.connect(a, goal);
        map.connect(b, goal);

        let path = astar(&map, start, goal).unwrap();
        assert_eq!(path, vec![start, a, goal]);
    }

    #[test]
    fn test_astar_trivial_start_is_goal() {
        let mut map = Roadmap::new();
        let start = map.add_node(Vec3::ZERO);
        assert_eq!(astar(&map, start, start).unwrap(), vec![start]);
    }

    #[test]
    fn test_astar_missing_node_errors() {
        let mut map = Roadmap::new();
        let start = map.add_node(Vec3::ZERO);
        assert_eq!(
            astar(&map, start, 9),
            Err(SearchError::NodeOutOfRange(9))
        );
    }

    #[test]
    fn test_astar_disconnected_graph() {
        let mut map = Roadmap::new();
        let start = map.add_node(Vec3::ZERO);
        let goal = map.add_node(Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(astar(&map, start, goal), Err(SearchError::NoPath));
    }
}
