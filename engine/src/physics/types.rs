//! Physics type re-exports from glam
//!
//! This module provides the core mathematical type used throughout the
//! sandbox, re-exported from the glam library. glam vectors are plain
//! `Copy` values with pure combinators, so forces and positions can never
//! alias each other across bodies.

pub use glam::Vec3;
