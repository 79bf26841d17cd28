//! Sandbox Engine Library
//!
//! A small rigid-body physics sandbox with roadmap path search and a
//! data-driven particle emitter. Built from scratch without external
//! physics library dependencies — the point is to own the math.
//!
//! # Unit System
//!
//! **1 unit = 1 meter, time in seconds** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Accelerations in m/s²
//! - Mass in kg
//!
//! # Modules
//!
//! - [`physics`] - Colliders, intersection tests, body integration, and the
//!   broad-phase simulation loop
//! - [`search`] - A* and uniform-cost search over position roadmaps
//! - [`agent`] - Path-following bodies composed from a physics [`Body`]
//! - [`particles`] - Data-driven particle emitter reusing the physics
//!   integration primitive
//!
//! # Example
//!
//! ```ignore
//! use sandbox_engine::physics::{Body, BoundingSphere, Collider, PhysicsEngine, Vec3};
//!
//! let mut engine = PhysicsEngine::new();
//! let sphere = Collider::Sphere(BoundingSphere::new(Vec3::ZERO, 1.0)?);
//! engine.add_body(Body::new(sphere, 1.0)?);
//!
//! // Per frame: apply gravity, then step by dt seconds.
//! engine.apply_force(Vec3::new(0.0, -9.81, 0.0));
//! let summary = engine.update(1.0 / 60.0)?;
//! println!("tested {} pairs", summary.pairs_tested);
//! ```

pub mod agent;
pub mod particles;
pub mod physics;
pub mod search;

// Re-export the core simulation types at crate level for convenience
pub use physics::{Body, Collider, IntersectData, PhysicsEngine, PhysicsError, StepSummary};
// Re-export search entry points
pub use search::{Roadmap, SearchError, astar, uniform_cost};
// Re-export agent and particle types
pub use agent::Agent;
pub use particles::{EmitterConfig, Particle, ParticleSystem};
