//! Collider shapes and pairwise intersection math
//!
//! A [`Collider`] is pure intersection geometry plus a placement, fully
//! decoupled from any body's kinematic state. The supported shapes are a
//! tracked-position-only `None` variant, bounding spheres, axis-aligned
//! bounding boxes, and planes.
//!
//! # Dispatch
//!
//! `Collider` is a closed enum and [`Collider::intersect`] matches
//! exhaustively over the variant pair, so adding a new shape forces every
//! call site to be revisited at compile time. Pairs with no defined test
//! (plane vs AABB, plane vs plane) return
//! [`PhysicsError::UnsupportedCollisionPair`] rather than a silent
//! "no collision".
//!
//! # Intersection math
//!
//! - Sphere–sphere: signed gap `|c1 - c2| - (r1 + r2)`, hit when negative.
//! - AABB–AABB: per-axis separation via the componentwise max of the two
//!   min/max difference vectors, hit when the largest axis separation is
//!   negative.
//! - Sphere–AABB: clamp the sphere center into the box extents to find the
//!   closest point, hit when that point lies within the radius.
//! - Plane–sphere: `|normal · center - plane_distance| - radius`, hit when
//!   negative. The plane is assumed already normalized by the caller.

use glam::Vec3;

use crate::physics::error::PhysicsError;
use crate::physics::intersect::IntersectData;

/// A sphere described by its center and radius.
///
/// A zero radius is valid and behaves as a point collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    center: Vec3,
    radius: f32,
}

impl BoundingSphere {
    /// Create a sphere, rejecting negative radii.
    pub fn new(center: Vec3, radius: f32) -> Result<Self, PhysicsError> {
        if radius < 0.0 {
            return Err(PhysicsError::InvalidGeometry(format!(
                "sphere radius must be >= 0, got {radius}"
            )));
        }
        Ok(Self { center, radius })
    }

    /// Sphere center in world space.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Sphere radius (meters).
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Signed-gap test against another sphere.
    ///
    /// Touching spheres (gap exactly 0) do **not** intersect.
    pub fn intersect_sphere(&self, other: &BoundingSphere) -> IntersectData {
        let radius_distance = self.radius + other.radius;
        let center_distance = self.center.distance(other.center);
        let distance = center_distance - radius_distance;
        IntersectData::new(distance < 0.0, distance)
    }

    /// Closest-point test against an AABB.
    ///
    /// Clamps the sphere center into the box extents; the distance reported
    /// is the unsigned distance from that closest point to the center.
    pub fn intersect_aabb(&self, other: &Aabb) -> IntersectData {
        let closest = self
            .center
            .clamp(other.min_extents(), other.max_extents());
        let distance = closest.distance(self.center);
        IntersectData::new(distance < self.radius, distance)
    }
}

/// An axis-aligned bounding box described by its min/max corners.
///
/// A degenerate box with `min == max` is valid and behaves as a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    min_extents: Vec3,
    max_extents: Vec3,
}

impl Aabb {
    /// Create an AABB, rejecting inverted extents.
    pub fn new(min_extents: Vec3, max_extents: Vec3) -> Result<Self, PhysicsError> {
        if min_extents.cmpgt(max_extents).any() {
            return Err(PhysicsError::InvalidGeometry(format!(
                "AABB min extents {min_extents} exceed max extents {max_extents}"
            )));
        }
        Ok(Self {
            min_extents,
            max_extents,
        })
    }

    /// Minimum corner of the box.
    pub fn min_extents(&self) -> Vec3 {
        self.min_extents
    }

    /// Maximum corner of the box.
    pub fn max_extents(&self) -> Vec3 {
        self.max_extents
    }

    /// Box midpoint.
    pub fn center(&self) -> Vec3 {
        (self.min_extents + self.max_extents) * 0.5
    }

    /// Per-axis separation test against another AABB.
    ///
    /// The reported distance is the signed separation along the most
    /// separated axis; the boxes overlap iff it is negative.
    pub fn intersect_aabb(&self, other: &Aabb) -> IntersectData {
        let distances1 = other.min_extents - self.max_extents;
        let distances2 = self.min_extents - other.max_extents;
        let distances = distances1.max(distances2);
        let max_distance = distances.max_element();
        IntersectData::new(max_distance < 0.0, max_distance)
    }
}

/// An infinite plane in normal–distance form: `normal · p = distance`.
///
/// The intersection tests assume `normal` is already unit length; call
/// [`Plane::normalized`] first if it is not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vec3,
    distance: f32,
}

impl Plane {
    /// Create a plane from a normal and its distance from the origin.
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Plane normal.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Distance from the origin along the normal.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Return a new plane with a unit-length normal describing the same
    /// surface. Does not mutate `self`.
    pub fn normalized(&self) -> Plane {
        let mag = self.normal.length();
        Plane {
            normal: self.normal / mag,
            distance: self.distance * mag,
        }
    }

    /// Signed-distance test against a sphere.
    ///
    /// The reported distance is from the sphere surface to the plane;
    /// negative means the sphere crosses the plane.
    pub fn intersect_sphere(&self, other: &BoundingSphere) -> IntersectData {
        let distance_from_center = (self.normal.dot(other.center()) - self.distance).abs();
        let distance_from_sphere = distance_from_center - other.radius();
        IntersectData::new(distance_from_sphere < 0.0, distance_from_sphere)
    }
}

/// Collision geometry attached to a body.
///
/// `None` carries no geometry but still tracks a position, so a body
/// without collision response keeps a meaningful center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collider {
    /// No collision geometry; only a tracked position
    None {
        /// Tracked world position
        pos: Vec3,
    },
    /// Bounding sphere
    Sphere(BoundingSphere),
    /// Axis-aligned bounding box
    Aabb(Aabb),
    /// Infinite plane
    Plane(Plane),
}

impl Collider {
    /// Variant name for error reporting.
    fn variant_name(&self) -> &'static str {
        match self {
            Collider::None { .. } => "none",
            Collider::Sphere(_) => "sphere",
            Collider::Aabb(_) => "aabb",
            Collider::Plane(_) => "plane",
        }
    }

    /// Translate the shape's internal geometry by `displacement`.
    ///
    /// A zero displacement leaves the collider unchanged. Planes have no
    /// finite placement to move, so translation shifts their origin
    /// distance along the normal instead.
    pub fn transform(&mut self, displacement: Vec3) {
        match self {
            Collider::None { pos } => *pos += displacement,
            Collider::Sphere(sphere) => sphere.center += displacement,
            Collider::Aabb(aabb) => {
                aabb.min_extents += displacement;
                aabb.max_extents += displacement;
            }
            Collider::Plane(plane) => plane.distance += plane.normal.dot(displacement),
        }
    }

    /// The shape's centroid: sphere center, AABB midpoint, the tracked
    /// position for `None`, and the closest point to the origin for planes.
    pub fn center(&self) -> Vec3 {
        match self {
            Collider::None { pos } => *pos,
            Collider::Sphere(sphere) => sphere.center(),
            Collider::Aabb(aabb) => aabb.center(),
            Collider::Plane(plane) => plane.normal() * plane.distance(),
        }
    }

    /// Run the pairwise intersection test for `self` vs `other`.
    ///
    /// If either side is [`Collider::None`] the result is unconditionally
    /// "no intersection". Pairs with no defined test fail with
    /// [`PhysicsError::UnsupportedCollisionPair`].
    ///
    /// The boolean outcome is symmetric: `a.intersect(b)` and
    /// `b.intersect(a)` always agree.
    pub fn intersect(&self, other: &Collider) -> Result<IntersectData, PhysicsError> {
        match (self, other) {
            (Collider::None { .. }, _) | (_, Collider::None { .. }) => Ok(IntersectData::none()),
            (Collider::Sphere(a), Collider::Sphere(b)) => Ok(a.intersect_sphere(b)),
            (Collider::Sphere(sphere), Collider::Aabb(aabb))
            | (Collider::Aabb(aabb), Collider::Sphere(sphere)) => {
                Ok(sphere.intersect_aabb(aabb))
            }
            (Collider::Aabb(a), Collider::Aabb(b)) => Ok(a.intersect_aabb(b)),
            (Collider::Plane(plane), Collider::Sphere(sphere))
            | (Collider::Sphere(sphere), Collider::Plane(plane)) => {
                Ok(plane.intersect_sphere(sphere))
            }
            (Collider::Plane(_), Collider::Aabb(_))
            | (Collider::Aabb(_), Collider::Plane(_))
            | (Collider::Plane(_), Collider::Plane(_)) => {
                Err(PhysicsError::UnsupportedCollisionPair {
                    a: self.variant_name(),
                    b: other.variant_name(),
                })
            }
        }
    }
}
