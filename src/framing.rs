//! Derives a camera pose that fits an object's bounds in view.
//!
//! The framing distance comes from the object's bounding sphere and the
//! camera's vertical field of view: placing the eye `radius / sin(fovy/2)`
//! away puts the sphere exactly inside the frustum, and the fit offset adds
//! a margin so the object never touches the frustum edges.

use glam::Vec3;

use crate::bounds::BoundingBox;

/// Margin multiplier applied to the exact-fit distance. `1.0` means the
/// bounding sphere touches the frustum edges.
pub const DEFAULT_FIT_OFFSET: f32 = 1.5;

/// Radius substituted for objects whose bounds collapse to a point,
/// equivalent to treating them as 1 unit across.
pub const MIN_RADIUS: f32 = 0.5;

/// Eye position and look-at target proposed by the core.
///
/// Projection, field of view, and clip-plane application stay with the
/// render side; the core only ever proposes these two vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye (camera) position in world space.
    pub position: Vec3,
    /// Look-at target position.
    pub target: Vec3,
}

/// Policy for turning object bounds into a camera pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramingPolicy {
    /// Margin multiplier on the exact-fit distance, clamped to `>= 1` at
    /// use so framing can never crop the object.
    pub fit_offset: f32,
    /// Viewing direction from the target toward the eye. Normalized at
    /// use; a zero vector falls back to the default direction.
    pub view_direction: Vec3,
}

/// Default view direction before normalization: above and diagonally off
/// the target, matching the viewer's startup angle.
const DEFAULT_VIEW_DIRECTION: Vec3 = Vec3::new(0.5, 1.0, 0.5);

impl Default for FramingPolicy {
    fn default() -> Self {
        Self {
            fit_offset: DEFAULT_FIT_OFFSET,
            view_direction: DEFAULT_VIEW_DIRECTION,
        }
    }
}

impl FramingPolicy {
    /// Compute a pose that frames `bounds` for a camera with the given
    /// vertical field of view in degrees.
    ///
    /// The target is the bounds center; the eye sits along the viewing
    /// direction at `(radius / sin(fovy/2)) * fit_offset`. The direction
    /// is the caller's `direction_hint` if given, otherwise the policy's
    /// configured one. Degenerate bounds use a substitute radius so the
    /// result is always usable, and a computed eye that still falls
    /// inside the box is pushed out along the viewing direction.
    #[must_use]
    pub fn frame_object(
        &self,
        bounds: &BoundingBox,
        fovy_deg: f32,
        direction_hint: Option<Vec3>,
    ) -> CameraPose {
        let target = bounds.center();
        let radius = effective_radius(bounds);

        // Guard against meaningless projections; hosts configure fovy well
        // inside this range.
        let fovy = fovy_deg.clamp(1.0, 179.0);
        let distance = radius / (fovy.to_radians() * 0.5).sin() * self.fit_offset.max(1.0);

        let direction = direction_hint
            .unwrap_or(self.view_direction)
            .try_normalize()
            .unwrap_or_else(|| DEFAULT_VIEW_DIRECTION.normalize());
        let position = push_outside(bounds, target + direction * distance, direction);

        CameraPose { position, target }
    }

    /// Near/far clip planes scaled to the framed object's radius.
    ///
    /// Keeps depth precision reasonable across wildly different object
    /// scales without manual tuning.
    #[must_use]
    pub fn clip_planes(radius: f32) -> (f32, f32) {
        let near = (radius / 50.0).max(0.1);
        let far = (radius * 20.0).max(near + 1.0);
        (near, far)
    }
}

/// Bounding sphere radius with the degenerate-bounds substitution: zero
/// radius falls back to half the largest axis extent, floored at
/// [`MIN_RADIUS`].
fn effective_radius(bounds: &BoundingBox) -> f32 {
    let radius = bounds.bounding_sphere().radius;
    if radius > 0.0 {
        radius
    } else {
        (bounds.size().max_element() * 0.5).max(MIN_RADIUS)
    }
}

/// Push `position` along `direction` in box-diagonal steps until it no
/// longer lies inside `bounds`.
///
/// Very flat or very large objects can otherwise leave the eye embedded in
/// geometry. The step is the full diagonal, so one step always clears a
/// non-degenerate box.
fn push_outside(bounds: &BoundingBox, mut position: Vec3, direction: Vec3) -> Vec3 {
    let step = bounds.diagonal();
    if step > 0.0 {
        while bounds.contains(position) {
            position += direction * step;
        }
    }
    position
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOVY: f32 = 45.0;

    fn cube(half: f32) -> BoundingBox {
        BoundingBox {
            min: Vec3::splat(-half),
            max: Vec3::splat(half),
        }
    }

    #[test]
    fn test_target_is_bounds_center() {
        let bounds = BoundingBox {
            min: Vec3::new(2.0, 4.0, 6.0),
            max: Vec3::new(4.0, 8.0, 10.0),
        };
        let pose = FramingPolicy::default().frame_object(&bounds, FOVY, None);
        assert_eq!(pose.target, Vec3::new(3.0, 6.0, 8.0));
    }

    #[test]
    fn test_distance_matches_sphere_fit() {
        // Sphere radius 2, fovy 45, fit offset 1.5:
        // distance = 2 / sin(22.5°) * 1.5 ≈ 7.84.
        let half = 2.0 / 3.0_f32.sqrt();
        let pose = FramingPolicy::default().frame_object(&cube(half), FOVY, None);

        let expected_distance = 2.0 / (22.5_f32.to_radians()).sin() * 1.5;
        assert!((expected_distance - 7.84).abs() < 0.01);

        let expected = Vec3::new(0.5, 1.0, 0.5).normalize() * expected_distance;
        assert!((pose.position - expected).length() < 1e-3);
    }

    #[test]
    fn test_position_outside_bounds() {
        let boxes = [
            cube(0.5),
            cube(100.0),
            // Very flat slab
            BoundingBox {
                min: Vec3::new(-50.0, -0.01, -50.0),
                max: Vec3::new(50.0, 0.01, 50.0),
            },
            // Long thin beam, off-center
            BoundingBox {
                min: Vec3::new(10.0, -0.5, -0.5),
                max: Vec3::new(500.0, 0.5, 0.5),
            },
        ];
        let policy = FramingPolicy::default();
        for bounds in &boxes {
            let pose = policy.frame_object(bounds, FOVY, None);
            assert!(
                !bounds.contains(pose.position),
                "camera embedded in {bounds:?}"
            );
        }
    }

    #[test]
    fn test_degenerate_bounds_use_substitute_radius() {
        let bounds = BoundingBox::at_point(Vec3::new(1.0, 2.0, 3.0));
        let pose = FramingPolicy::default().frame_object(&bounds, FOVY, None);
        assert_eq!(pose.target, Vec3::new(1.0, 2.0, 3.0));

        let expected_distance = MIN_RADIUS / (22.5_f32.to_radians()).sin() * 1.5;
        assert!((pose.position.distance(pose.target) - expected_distance).abs() < 1e-4);
    }

    #[test]
    fn test_zero_view_direction_falls_back() {
        let policy = FramingPolicy {
            view_direction: Vec3::ZERO,
            ..FramingPolicy::default()
        };
        let pose = policy.frame_object(&cube(1.0), FOVY, None);
        assert!(pose.position.is_finite());
        assert!(!cube(1.0).contains(pose.position));
    }

    #[test]
    fn test_push_outside_clears_box() {
        let bounds = cube(10.0);
        let direction = Vec3::X;
        let inside = Vec3::new(3.0, 0.0, 0.0);
        let pushed = push_outside(&bounds, inside, direction);
        assert!(!bounds.contains(pushed));
        // Still on the ray from the original position.
        assert_eq!(pushed.y, 0.0);
        assert_eq!(pushed.z, 0.0);
    }

    #[test]
    fn test_clip_planes_scale_with_radius() {
        let (near, far) = FramingPolicy::clip_planes(2.0);
        assert_eq!(near, 0.1);
        assert_eq!(far, 40.0);

        let (near, far) = FramingPolicy::clip_planes(10_000.0);
        assert_eq!(near, 200.0);
        assert_eq!(far, 200_000.0);

        // Tiny radius: far stays ahead of near.
        let (near, far) = FramingPolicy::clip_planes(0.001);
        assert_eq!(near, 0.1);
        assert!(far >= near + 1.0);
    }
}
