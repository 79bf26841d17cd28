//! Search Tests - Roadmap Queries and Agent Path Following
//!
//! Scenario tests for A* / uniform-cost search over roadmaps, plus an
//! end-to-end run of an agent steering its body along a found path.

use glam::Vec3;
use sandbox_engine::agent::Agent;
use sandbox_engine::physics::{Body, Collider};
use sandbox_engine::search::{Roadmap, SearchError, astar, uniform_cost};

/// A 3x3 grid of nodes spaced 1 m apart in the XZ plane, 4-connected.
///
/// Node ids: `row * 3 + col`.
fn grid_roadmap() -> Roadmap {
    let mut map = Roadmap::new();
    for row in 0..3 {
        for col in 0..3 {
            map.add_node(Vec3::new(col as f32, 0.0, row as f32));
        }
    }
    for row in 0..3 {
        for col in 0..3 {
            let id = row * 3 + col;
            if col + 1 < 3 {
                map.connect(id, id + 1);
            }
            if row + 1 < 3 {
                map.connect(id, id + 3);
            }
        }
    }
    map
}

#[test]
fn test_astar_crosses_the_grid() {
    let map = grid_roadmap();
    let path = astar(&map, 0, 8).unwrap();

    assert_eq!(*path.first().unwrap(), 0);
    assert_eq!(*path.last().unwrap(), 8);
    // Manhattan-shortest on a unit grid: 4 edges, 5 nodes.
    assert_eq!(path.len(), 5);
}

#[test]
fn test_ucs_agrees_with_astar_on_path_cost() {
    let map = grid_roadmap();
    let a = astar(&map, 0, 8).unwrap();
    let u = uniform_cost(&map, 0, 8).unwrap();

    let cost = |path: &[usize]| -> f32 {
        path.windows(2)
            .map(|w| {
                map.position(w[0])
                    .unwrap()
                    .distance(map.position(w[1]).unwrap())
            })
            .sum()
    };
    assert_eq!(cost(&a), cost(&u));
}

#[test]
fn test_detour_around_a_gap() {
    // A line with the middle connection missing, plus a detour node above.
    //
    //        d
    //       / \
    //  a - b   c - e
    let mut map = Roadmap::new();
    let a = map.add_node(Vec3::new(0.0, 0.0, 0.0));
    let b = map.add_node(Vec3::new(1.0, 0.0, 0.0));
    let c = map.add_node(Vec3::new(3.0, 0.0, 0.0));
    let e = map.add_node(Vec3::new(4.0, 0.0, 0.0));
    let d = map.add_node(Vec3::new(2.0, 2.0, 0.0));
    map.connect(a, b);
    map.connect(c, e);
    map.connect(b, d);
    map.connect(d, c);

    let path = astar(&map, a, e).unwrap();
    assert_eq!(path, vec![a, b, d, c, e]);
}

#[test]
fn test_search_error_cases() {
    let map = grid_roadmap();
    assert_eq!(astar(&map, 0, 99), Err(SearchError::NodeOutOfRange(99)));
    assert_eq!(
        uniform_cost(&map, 99, 0),
        Err(SearchError::NodeOutOfRange(99))
    );

    // Isolated island: reachable ids, no connecting edges.
    let mut island = Roadmap::new();
    let a = island.add_node(Vec3::ZERO);
    let b = island.add_node(Vec3::new(5.0, 0.0, 0.0));
    assert_eq!(astar(&island, a, b), Err(SearchError::NoPath));
}

// ============================================================================
// Agent follows a searched path
// ============================================================================

#[test]
fn test_agent_walks_found_path() {
    // Straight run along the grid's first row.
    let map = grid_roadmap();
    let path_ids = astar(&map, 0, 2).unwrap();
    let goal = map.position(2).unwrap();

    let body = Body::new(Collider::None { pos: Vec3::ZERO }, 1.0).unwrap();
    let mut agent = Agent::new(body, goal, 1.0);
    agent.set_path(
        path_ids
            .iter()
            .map(|&id| map.position(id).unwrap())
            .collect(),
    );

    // Steer at 60 Hz for up to 30 simulated seconds.
    let dt = 1.0 / 60.0;
    for _ in 0..(30 * 60) {
        let force = agent.seek_force();
        agent.body_mut().apply_force(force);
        agent.body_mut().update(dt);
        if agent.path_complete() {
            break;
        }
    }

    assert!(agent.path_complete(), "agent never finished its path");
    assert!(agent.body().pos().distance(goal) < 0.5);
}
