//! Axis-aligned bounding volumes used to derive camera framings.
//!
//! Bounds are always expressed in world space: a nested or rotated child's
//! extents must be transformed into the common frame before accumulation,
//! which is why aggregation works on world-space points and world-space
//! child boxes rather than local geometry.

use glam::Vec3;

/// Axis-aligned bounding box in world space.
///
/// Invariant: `min <= max` componentwise. A box built from a single point
/// is degenerate (zero size on every axis) but still valid; framing code
/// substitutes a minimum extent instead of erroring on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Componentwise minimum corner.
    pub min: Vec3,
    /// Componentwise maximum corner.
    pub max: Vec3,
}

/// Sphere enclosing a bounding box.
///
/// The radius reaches from the box center to its farthest corner (half the
/// diagonal), so the sphere always contains the full box. This definition
/// is applied uniformly to every object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// Sphere center (the box center).
    pub center: Vec3,
    /// Sphere radius, `>= 0`.
    pub radius: f32,
}

impl BoundingBox {
    /// Box collapsed to a single point. Used for objects with no geometry,
    /// anchored at the object's own position.
    #[must_use]
    pub fn at_point(point: Vec3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Accumulate world-space points into a box.
    ///
    /// Returns `None` for an empty iterator; callers map that onto a
    /// degenerate box at the owning object's position.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::at_point(first);
        for p in iter {
            bounds.min = bounds.min.min(p);
            bounds.max = bounds.max.max(p);
        }
        Some(bounds)
    }

    /// Smallest box containing both `self` and `other`. Aggregating a
    /// subtree is a fold of this over the children's world boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Geometric center of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Per-axis extent (`max - min`).
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Length of the main diagonal.
    #[must_use]
    pub fn diagonal(&self) -> f32 {
        self.size().length()
    }

    /// Whether the box has zero extent on every axis.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.size().max_element() <= 0.0
    }

    /// Whether `point` lies inside or on the boundary of the box.
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Sphere centered on the box reaching its farthest corner.
    ///
    /// Pure read of the current extents, never cached: callers recompute
    /// whenever geometry may have changed.
    #[must_use]
    pub fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere {
            center: self.center(),
            radius: self.diagonal() * 0.5,
        }
    }
}
