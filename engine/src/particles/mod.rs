//! Particle Effects Module
//!
//! A data-driven particle emitter built on the same integration primitive
//! as the rigid bodies: every particle owns a [`crate::physics::Body`]
//! with no collision geometry.
//!
//! # Submodules
//!
//! - [`particle`] - One particle: body plus visual kinematics
//! - [`system`] - The emitter: spawn configuration and lifecycle

pub mod particle;
pub mod system;

pub use particle::Particle;
pub use system::{EmitterConfig, EmitterShape, ParticleSystem};
