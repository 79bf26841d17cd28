//! Physics Module
//!
//! Collision detection and rigid-body simulation for the sandbox.
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types re-exported from glam
//! - [`intersect`] - Intersection test result payload
//! - [`collider`] - Collider shapes and pairwise intersection math
//! - [`body`] - Kinematic state and forward Euler integration
//! - [`engine`] - Broad-phase sweep and the per-tick simulation loop
//! - [`error`] - Failure taxonomy shared by the physics types
//!
//! # Simulation shape
//!
//! One tick is: zero or more [`Body::apply_force`] calls, then one
//! [`PhysicsEngine::update`] call. The engine runs the O(n²) pairwise
//! collision sweep against freshly synced colliders, applies the collision
//! response, and only then integrates every body forward. A tick either
//! completes or fails hard with a [`PhysicsError`]; there is no partial
//! result.

pub mod body;
pub mod collider;
pub mod engine;
pub mod error;
pub mod intersect;
pub mod types;

// Re-export commonly used types at the physics module level
pub use body::Body;
pub use collider::{Aabb, BoundingSphere, Collider, Plane};
pub use engine::{PhysicsEngine, StepSummary};
pub use error::PhysicsError;
pub use intersect::IntersectData;
pub use types::Vec3;
