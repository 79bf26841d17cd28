//! Path cost helpers and the shared best-first frontier
//!
//! Both searches explore a frontier of whole candidate paths ordered by a
//! scoring function — naive (paths are cloned on extension) but simple,
//! and fine at roadmap scale.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::collections::HashSet;

use crate::search::SearchError;
use crate::search::graph::{NodeId, Roadmap};

/// Sum of Euclidean edge lengths along `path`, including the final
/// segment. Used as g(x).
pub fn path_length(roadmap: &Roadmap, path: &[NodeId]) -> f32 {
    path.windows(2)
        .filter_map(|pair| {
            let a = roadmap.position(pair[0])?;
            let b = roadmap.position(pair[1])?;
            Some(a.distance(b))
        })
        .sum()
}

/// Straight-line distance from the last node of `path` to `goal`. Used as
/// the admissible heuristic h(x).
pub fn distance_to_goal(roadmap: &Roadmap, path: &[NodeId], goal: NodeId) -> f32 {
    let (Some(&last), Some(goal_pos)) = (path.last(), roadmap.position(goal)) else {
        return 0.0;
    };
    roadmap
        .position(last)
        .map(|pos| pos.distance(goal_pos))
        .unwrap_or(0.0)
}

/// A candidate path in the frontier, ordered so the *cheapest* path pops
/// first from a max-heap.
struct Candidate {
    cost: f32,
    path: Vec<NodeId>,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cost.total_cmp(&other.cost) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want lowest cost first.
        other.cost.total_cmp(&self.cost)
    }
}

/// Best-first search over whole candidate paths.
///
/// `score` ranks a candidate path; lower is explored first. Nodes are
/// marked visited when first enqueued, so each node joins the frontier at
/// most once.
pub(crate) fn best_first_search<F>(
    roadmap: &Roadmap,
    start: NodeId,
    goal: NodeId,
    score: F,
) -> Result<Vec<NodeId>, SearchError>
where
    F: Fn(&Roadmap, &[NodeId]) -> f32,
{
    if !roadmap.contains(start) {
        return Err(SearchError::NodeOutOfRange(start));
    }
    if !roadmap.contains(goal) {
        return Err(SearchError::NodeOutOfRange(goal));
    }

    let mut visited: HashSet<NodeId> = HashSet::from([start]);
    let mut frontier = BinaryHeap::new();
    frontier.push(Candidate {
        cost: score(roadmap, &[start]),
        path: vec![start],
    });

    while let Some(Candidate { path, .. }) = frontier.pop() {
        let &current = path.last().unwrap_or(&start);
        if current == goal {
            return Ok(path);
        }

        for &neighbor in roadmap.neighbors(current) {
            if visited.insert(neighbor) {
                let mut next_path = path.clone();
                next_path.push(neighbor);
                frontier.push(Candidate {
                    cost: score(roadmap, &next_path),
                    path: next_path,
                });
            }
        }
    }

    Err(SearchError::NoPath)
}
