//! Rigid body kinematics and forward Euler integration
//!
//! A [`Body`] owns one collider plus its kinematic state and advances it
//! with explicit (forward) Euler: velocity first, then position, both from
//! the current step's acceleration. That scheme trades stability for
//! simplicity and accumulates energy error over long runs — a known
//! approximation at sandbox scale, not a bug.
//!
//! The collider is synced to the body's position lazily, on read, through
//! [`Body::collider`]. That is the only sync path: collision tests must go
//! through it within the same tick.

use glam::Vec3;

use crate::physics::collider::Collider;
use crate::physics::error::PhysicsError;

/// One simulated rigid body: kinematic state plus exactly one collider.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pos: Vec3,
    /// Last position at which the collider was physically located.
    old_pos: Vec3,
    vel: Vec3,
    acc: Vec3,
    mass: f32,
    max_force: f32,
    collider: Collider,
}

impl Body {
    /// Create a body at the collider's center with the given mass.
    ///
    /// The body starts at rest with no accumulated force and no force
    /// limit. Fails if `mass` is not strictly positive.
    pub fn new(collider: Collider, mass: f32) -> Result<Self, PhysicsError> {
        if mass <= 0.0 {
            return Err(PhysicsError::InvalidGeometry(format!(
                "body mass must be > 0, got {mass}"
            )));
        }
        let pos = collider.center();
        Ok(Self {
            pos,
            old_pos: pos,
            vel: Vec3::ZERO,
            acc: Vec3::ZERO,
            mass,
            max_force: f32::INFINITY,
            collider,
        })
    }

    /// Body with no collision geometry at `pos`, with unit mass.
    ///
    /// Infallible counterpart of [`Body::new`] for callers that only need
    /// the integration primitive (particles, markers): a tracked position
    /// cannot be invalid and unit mass keeps force and acceleration
    /// interchangeable.
    pub fn collisionless(pos: Vec3) -> Self {
        Self {
            pos,
            old_pos: pos,
            vel: Vec3::ZERO,
            acc: Vec3::ZERO,
            mass: 1.0,
            max_force: f32::INFINITY,
            collider: Collider::None { pos },
        }
    }

    /// Set the initial velocity, builder style.
    pub fn with_velocity(mut self, vel: Vec3) -> Self {
        self.vel = vel;
        self
    }

    /// Set a force magnitude limit, builder style.
    ///
    /// The default is `f32::INFINITY`, meaning **no limiting**: only a
    /// finite limit clamps applied forces.
    pub fn with_max_force(mut self, max_force: f32) -> Self {
        self.max_force = max_force;
        self
    }

    /// Accumulate a force into this step's acceleration.
    ///
    /// If a finite `max_force` is set and the force magnitude exceeds it,
    /// the force is rescaled to that magnitude with its direction
    /// preserved. The force is then divided by mass (a = F/m) and added to
    /// the accumulator. The caller's value is never modified.
    pub fn apply_force(&mut self, force: Vec3) {
        let force = if self.max_force.is_finite() {
            force.clamp_length_max(self.max_force)
        } else {
            force
        };
        self.acc += force / self.mass;
    }

    /// Advance the body by `dt` seconds of forward Euler integration.
    ///
    /// Consumes exactly one step's accumulated force: the acceleration
    /// accumulator is zeroed at the end of every update.
    pub fn update(&mut self, dt: f32) {
        self.vel += self.acc * dt;
        self.pos += self.vel * dt;
        self.acc = Vec3::ZERO;
    }

    /// Return this body's collider, synced to the current position.
    ///
    /// Applies exactly the displacement accumulated since the previous
    /// sync, then records the current position as the new sync point.
    /// Callers must fetch colliders through this method before any
    /// collision test in the same tick.
    pub fn collider(&mut self) -> Collider {
        let displacement = self.pos - self.old_pos;
        self.collider.transform(displacement);
        self.old_pos = self.pos;
        self.collider
    }

    /// Current position.
    pub fn pos(&self) -> Vec3 {
        self.pos
    }

    /// Teleport the body. The collider follows on the next sync.
    pub fn set_pos(&mut self, pos: Vec3) {
        self.pos = pos;
    }

    /// Current velocity.
    pub fn vel(&self) -> Vec3 {
        self.vel
    }

    /// Overwrite the velocity (used by the collision response).
    pub fn set_vel(&mut self, vel: Vec3) {
        self.vel = vel;
    }

    /// Acceleration accumulated so far this step.
    pub fn acc(&self) -> Vec3 {
        self.acc
    }

    /// Body mass (kg).
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Current force limit; infinite means unlimited.
    pub fn max_force(&self) -> f32 {
        self.max_force
    }
}
