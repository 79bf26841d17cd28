//! Uniform-cost search over a roadmap

use crate::search::SearchError;
use crate::search::graph::{NodeId, Roadmap};
use crate::search::util::{best_first_search, path_length};

/// Uniform-cost search from `start` to `goal`.
///
/// Identical to [`crate::search::astar`] except candidate paths are
/// expanded in order of g(x) alone.
///
/// # Errors
///
/// [`SearchError::NodeOutOfRange`] if start or goal is not in the roadmap;
/// [`SearchError::NoPath`] if the goal is unreachable.
pub fn uniform_cost(
    roadmap: &Roadmap,
    start: NodeId,
    goal: NodeId,
) -> Result<Vec<NodeId>, SearchError> {
    best_first_search(roadmap, start, goal, path_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_ucs_finds_cheap_route() {
        let mut map = Roadmap::new();
        let start = map.add_node(Vec3::ZERO);
        let near = map.add_node(Vec3::new(1.0, 0.0, 0.0));
        let far = map.add_node(Vec3::new(0.0, 8.0, 0.0));
        let goal = map.add_node(Vec3::new(2.0, 0.0, 0.0));
        map.connect(start, near);
        map.connect(start, far);
        map.connect(near, goal);
        map.connect(far, goal);

        let path = uniform_cost(&map, start, goal).unwrap();
        assert_eq!(path, vec![start, near, goal]);
    }

    #[test]
    fn test_ucs_missing_start_errors() {
        let map = Roadmap::new();
        assert_eq!(
            uniform_cost(&map, 0, 0),
            Err(SearchError::NodeOutOfRange(0))
        );
    }
}
