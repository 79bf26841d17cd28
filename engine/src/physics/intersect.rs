//! Intersection test result payload

/// Immutable result of one pairwise intersection test.
///
/// `distance` semantics depend on the shape pair that produced it:
///
/// - Sphere–sphere, AABB–AABB, plane–sphere: **signed** separation, where a
///   negative value means the shapes penetrate.
/// - Sphere–AABB: **unsigned** distance from the sphere center to the
///   closest point on the box.
///
/// The collision response only consumes `intersecting` today, but the
/// distance is part of the observable contract and tests pin it down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectData {
    /// Whether the two shapes overlap
    pub intersecting: bool,
    /// Separation metric, per-pair semantics as documented above
    pub distance: f32,
}

impl IntersectData {
    /// Create a new intersection result.
    pub fn new(intersecting: bool, distance: f32) -> Self {
        Self {
            intersecting,
            distance,
        }
    }

    /// The canonical "no collision possible" result, used whenever one side
    /// of a test has no collision geometry.
    pub fn none() -> Self {
        Self {
            intersecting: false,
            distance: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_result() {
        let data = IntersectData::none();
        assert!(!data.intersecting);
        assert_eq!(data.distance, 0.0);
    }

    #[test]
    fn test_new_preserves_fields() {
        let data = IntersectData::new(true, -0.25);
        assert!(data.intersecting);
        assert_eq!(data.distance, -0.25);
    }
}
