//! Path-following agents
//!
//! An [`Agent`] is a physics [`Body`] composed with navigation state: a
//! goal, the roadmap path toward it, and a cruising speed. Composition
//! over inheritance — the body stays a plain body, and navigation is a
//! capability layered on top.

use glam::Vec3;

use crate::physics::Body;

/// How close an agent must get to a waypoint before moving on to the next
/// one (meters).
pub const WAYPOINT_RADIUS: f32 = 0.25;

/// A body that steers along a path of world-space waypoints.
#[derive(Debug, Clone)]
pub struct Agent {
    body: Body,
    goal: Vec3,
    path: Vec<Vec3>,
    /// Index of the waypoint currently steered toward.
    next_waypoint: usize,
    target_speed: f32,
}

impl Agent {
    /// Create an agent from a body, its goal, and a cruising speed.
    ///
    /// The agent starts with an empty path; assign one with
    /// [`Agent::set_path`] once a search has produced it.
    pub fn new(body: Body, goal: Vec3, target_speed: f32) -> Self {
        Self {
            body,
            goal,
            path: Vec::new(),
            next_waypoint: 0,
            target_speed,
        }
    }

    /// Steering force toward the current waypoint.
    ///
    /// Classic seek: desired velocity is the direction to the waypoint at
    /// `target_speed`, and the force is desired minus current velocity.
    /// Waypoints within [`WAYPOINT_RADIUS`] are consumed first. Returns
    /// zero when the path is exhausted.
    ///
    /// The caller applies the result through [`Body::apply_force`], which
    /// clamps it by the body's own force limit.
    pub fn seek_force(&mut self) -> Vec3 {
        while let Some(&waypoint) = self.path.get(self.next_waypoint) {
            if self.body.pos().distance(waypoint) > WAYPOINT_RADIUS {
                let desired = (waypoint - self.body.pos()).normalize_or_zero() * self.target_speed;
                return desired - self.body.vel();
            }
            self.next_waypoint += 1;
        }
        Vec3::ZERO
    }

    /// True once every waypoint has been consumed.
    pub fn path_complete(&self) -> bool {
        self.next_waypoint >= self.path.len()
    }

    /// Replace the path and restart from its first waypoint.
    pub fn set_path(&mut self, path: Vec<Vec3>) {
        self.path = path;
        self.next_waypoint = 0;
    }

    /// The path currently being followed.
    pub fn path(&self) -> &[Vec3] {
        &self.path
    }

    /// Navigation goal.
    pub fn goal(&self) -> Vec3 {
        self.goal
    }

    /// Replace the navigation goal (the path is not recomputed here).
    pub fn set_goal(&mut self, goal: Vec3) {
        self.goal = goal;
    }

    /// The underlying physics body.
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Mutable access to the underlying physics body.
    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::Collider;

    fn agent_at(pos: Vec3, target_speed: f32) -> Agent {
        let body = Body::new(Collider::None { pos }, 1.0).unwrap();
        Agent::new(body, Vec3::ZERO, target_speed)
    }

    #[test]
    fn test_seek_points_at_waypoint() {
        let mut agent = agent_at(Vec3::ZERO, 2.0);
        agent.set_path(vec![Vec3::new(10.0, 0.0, 0.0)]);

        let force = agent.seek_force();
        // At rest, the seek force is the desired velocity itself.
        assert_eq!(force, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_waypoints_are_consumed() {
        let mut agent = agent_at(Vec3::ZERO, 1.0);
        agent.set_path(vec![
            Vec3::new(0.1, 0.0, 0.0), // already within the waypoint radius
            Vec3::new(5.0, 0.0, 0.0),
        ]);

        let force = agent.seek_force();
        assert!(force.x > 0.0);
        assert!(!agent.path_complete());

        // Teleport next to the last waypoint; the path completes.
        agent.body_mut().set_pos(Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(agent.seek_force(), Vec3::ZERO);
        assert!(agent.path_complete());
    }

    #[test]
    fn test_empty_path_yields_zero_force() {
        let mut agent = agent_at(Vec3::ZERO, 3.0);
        assert_eq!(agent.seek_force(), Vec3::ZERO);
        assert!(agent.path_complete());
    }
}
