//! Broad-phase sweep and the per-tick simulation loop
//!
//! [`PhysicsEngine`] owns the full set of simulated bodies and advances
//! them one tick at a time. Each tick runs an exhaustive O(n²) pairwise
//! collision sweep over freshly synced colliders, applies the collision
//! response to every intersecting pair, and only then integrates all
//! bodies forward. The quadratic sweep is a documented scaling limit:
//! fine for tens of bodies, wrong for thousands.
//!
//! The current response is a deliberate placeholder — both velocities are
//! inverted once per intersecting pair. It is symmetric and independent of
//! pair iteration order, but neither momentum-conserving nor
//! position-correcting; impulse resolution is out of scope.

use glam::Vec3;

use crate::physics::body::Body;
use crate::physics::error::PhysicsError;

/// Per-tick diagnostics returned by [`PhysicsEngine::update`] so callers
/// can observe the broad phase without reaching into the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepSummary {
    /// Number of pairwise intersection tests run (always `n*(n-1)/2`)
    pub pairs_tested: usize,
    /// Number of pairs found intersecting this tick
    pub contacts: usize,
}

/// Owns the simulated bodies and steps the world forward.
///
/// Bodies live for the engine's lifetime once added; there is no removal
/// path. Insertion order is the simulation order, which carries no
/// physical meaning.
#[derive(Debug, Default)]
pub struct PhysicsEngine {
    bodies: Vec<Body>,
}

impl PhysicsEngine {
    /// Create an engine with no bodies.
    pub fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    /// Register a body with the simulation.
    ///
    /// No duplicate check and no capacity limit.
    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Apply the same force to every managed body.
    ///
    /// Example use case: global gravity. Each body receives its own copy
    /// of the vector, so per-body clamping and mass division never bleed
    /// across bodies.
    pub fn apply_force(&mut self, force: Vec3) {
        for body in &mut self.bodies {
            body.apply_force(force);
        }
    }

    /// Advance the world by `dt` seconds.
    ///
    /// Runs the broad-phase sweep and collision response first, then
    /// integrates every body. `dt` is in seconds — the engine has exactly
    /// one time unit convention.
    ///
    /// # Errors
    ///
    /// An unsupported collider pair aborts the tick immediately; the
    /// world state for that tick is undefined and the caller decides
    /// whether to stop or reset. There is no retry or partial result.
    pub fn update(&mut self, dt: f32) -> Result<StepSummary, PhysicsError> {
        let summary = self.handle_collisions()?;

        for body in &mut self.bodies {
            body.update(dt);
        }

        Ok(summary)
    }

    /// Exhaustive pairwise sweep with velocity-inversion response.
    ///
    /// Every unordered pair `(i, j)` with `i < j` is tested exactly once
    /// against synced colliders. On intersection both velocities flip,
    /// once per pair; the effect is symmetric in i and j.
    fn handle_collisions(&mut self) -> Result<StepSummary, PhysicsError> {
        let mut summary = StepSummary::default();

        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                let (head, tail) = self.bodies.split_at_mut(j);
                let a = &mut head[i];
                let b = &mut tail[0];

                let data = a.collider().intersect(&b.collider())?;
                summary.pairs_tested += 1;

                if data.intersecting {
                    summary.contacts += 1;
                    a.set_vel(a.vel() * -1.0);
                    b.set_vel(b.vel() * -1.0);
                }
            }
        }

        Ok(summary)
    }

    /// Number of managed bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// True if no bodies have been added yet.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Read access to a body by insertion index.
    pub fn body(&self, idx: usize) -> Option<&Body> {
        self.bodies.get(idx)
    }

    /// Mutable access to a body by insertion index.
    pub fn body_mut(&mut self, idx: usize) -> Option<&mut Body> {
        self.bodies.get_mut(idx)
    }

    /// Iterate over all bodies in insertion order.
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }
}
