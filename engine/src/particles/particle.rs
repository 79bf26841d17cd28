//! A single emitted particle

use glam::Vec3;

use crate::physics::Body;

/// One particle: a collision-less physics body plus the visual state a
/// renderer consumes (spin, size, color, opacity).
#[derive(Debug, Clone)]
pub struct Particle {
    body: Body,
    /// Constant acceleration assigned at spawn, re-applied every step
    /// because a body consumes its accumulated force per update.
    acc: Vec3,
    /// Remaining lifetime (seconds)
    pub lifespan: f32,
    /// Sprite rotation (radians)
    pub angle: f32,
    /// Sprite rotation rate (radians/second)
    pub angle_vel: f32,
    /// Sprite rotation acceleration (radians/second²)
    pub angle_acc: f32,
    /// Render radius (meters)
    pub radius: f32,
    /// RGB color, each channel in 0..=1
    pub color: Vec3,
    /// Opacity in 0..=1
    pub opacity: f32,
}

impl Particle {
    /// Spawn a particle with the given kinematics and visuals.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pos: Vec3,
        vel: Vec3,
        acc: Vec3,
        lifespan: f32,
        angle: f32,
        angle_vel: f32,
        angle_acc: f32,
        radius: f32,
        color: Vec3,
        opacity: f32,
    ) -> Self {
        // Particles never collide, so the body only tracks a position.
        let body = Body::collisionless(pos).with_velocity(vel);
        Self {
            body,
            acc,
            lifespan,
            angle,
            angle_vel,
            angle_acc,
            radius,
            color,
            opacity,
        }
    }

    /// Advance the particle by `dt` seconds.
    ///
    /// Re-applies the spawn acceleration, integrates the body, advances
    /// the sprite rotation, and burns lifetime.
    pub fn update(&mut self, dt: f32) {
        self.body.apply_force(self.acc);
        self.body.update(dt);

        self.angle_vel += self.angle_acc * dt;
        self.angle += self.angle_vel * dt;

        self.lifespan -= dt;
    }

    /// Add an external force (wind, explosions) on top of the spawn
    /// acceleration for this step.
    pub fn apply_force(&mut self, force: Vec3) {
        self.body.apply_force(force);
    }

    /// Is the particle past its lifetime?
    pub fn is_dead(&self) -> bool {
        self.lifespan < 0.0
    }

    /// Current world position.
    pub fn pos(&self) -> Vec3 {
        self.body.pos()
    }

    /// Current velocity.
    pub fn vel(&self) -> Vec3 {
        self.body.vel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_particle(lifespan: f32) -> Particle {
        Particle::new(
            Vec3::ZERO,
            Vec3::ZERO,
            Vec3::ZERO,
            lifespan,
            0.0,
            0.0,
            0.0,
            1.0,
            Vec3::ONE,
            1.0,
        )
    }

    #[test]
    fn test_lifespan_burns_down() {
        let mut p = plain_particle(0.5);
        assert!(!p.is_dead());
        p.update(0.4);
        assert!(!p.is_dead());
        p.update(0.2);
        assert!(p.is_dead());
    }

    #[test]
    fn test_spawn_acceleration_persists_across_steps() {
        let mut p = Particle::new(
            Vec3::ZERO,
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            10.0,
            0.0,
            0.0,
            0.0,
            1.0,
            Vec3::ONE,
            1.0,
        );
        p.update(1.0);
        assert_eq!(p.vel(), Vec3::new(1.0, 0.0, 0.0));
        // Unlike a one-shot force, the spawn acceleration keeps acting.
        p.update(1.0);
        assert_eq!(p.vel(), Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_angle_kinematics() {
        let mut p = Particle::new(
            Vec3::ZERO,
            Vec3::ZERO,
            Vec3::ZERO,
            10.0,
            0.0,
            1.0,
            0.0,
            1.0,
            Vec3::ONE,
            1.0,
        );
        p.update(0.5);
        assert!((p.angle - 0.5).abs() < 1e-6);
    }
}
