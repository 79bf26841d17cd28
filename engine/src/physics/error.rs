//! Physics failure taxonomy
//!
//! Everything in this module is a programming error, not a runtime
//! condition to recover from: a bad shape pair or inverted geometry means
//! the host wired the simulation up wrong. Errors propagate synchronously
//! to the caller of `update`/`intersect` and abort the current tick.

use thiserror::Error;

/// Errors raised by collider construction and intersection tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhysicsError {
    /// Two collider variants with no defined pairwise test were compared
    /// (e.g. plane vs AABB). Treating this as "no collision" would hide
    /// integration bugs, so it fails loudly instead.
    #[error("unsupported collision pair: {a} vs {b}")]
    UnsupportedCollisionPair {
        /// Variant name of the left-hand collider
        a: &'static str,
        /// Variant name of the right-hand collider
        b: &'static str,
    },

    /// A shape or body was constructed with nonsensical parameters
    /// (inverted AABB extents, negative sphere radius, non-positive mass).
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}
