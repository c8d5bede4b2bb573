//=========================================================================
// Geometry
//=========================================================================
//
// Axis-aligned bounding boxes and the overlap test used for contact checks.
//
// Boxes are value types: they are rebuilt from a center and half-extents
// every frame and never mutated in place.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;

//=== Aabb ================================================================

/// Axis-aligned bounding box defined by its minimum and maximum corners.
///
/// Invariant: `min <= max` on every axis when built from non-negative
/// half-extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Builds a box centered at `center` reaching `half_extents` along each axis.
    #[inline]
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Returns `true` if both boxes intersect on all three axes.
    ///
    /// Touching faces count as an overlap.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Full edge lengths of the box.
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
