//! Orchestrates camera transitions against injected collaborators.
//!
//! The controller owns the transition state machine and the framing policy
//! and exposes the public control surface (`move_to`, `focus_on`, `tick`).
//! The scene graph and the rendering camera stay behind the
//! [`SceneProvider`] and [`CameraSink`] traits, so the transition math has
//! no dependency on any particular rendering library and is unit-testable
//! with synthetic bounds.

use glam::Vec3;

use crate::bounds::BoundingBox;
use crate::error::FlytoError;
use crate::framing::{CameraPose, FramingPolicy};
use crate::options::Options;
use crate::transition::CameraTransition;

/// Read-only scene lookup the controller frames objects through.
///
/// Implementations resolve a stable string name to an opaque handle and
/// report the world-space extents of that object's subtree. The core never
/// mutates scene data and holds no references into it between calls.
pub trait SceneProvider {
    /// Opaque object handle, valid for the duration of one call sequence.
    type Handle;

    /// Look up an object by name.
    fn find_by_name(&self, name: &str) -> Option<Self::Handle>;

    /// World-space bounds of the object's subtree, recomputed at call
    /// time. Objects without geometry return a degenerate box at their
    /// own position; framing substitutes a minimum extent downstream.
    fn world_bounds(&self, handle: &Self::Handle) -> BoundingBox;
}

/// Receives the interpolated pose once per tick.
///
/// The sink owns the actual camera: field of view, projection matrix, and
/// clip-plane application all happen on its side.
pub trait CameraSink {
    /// Apply the pose to the rendering camera (position + look-at).
    fn apply_pose(&mut self, position: Vec3, target: Vec3);
}

/// Public control surface over the camera engine.
///
/// `move_to` and `focus_on` are fire-and-forget: completion is observable
/// only by polling [`is_animating`](Self::is_animating). The host's render
/// loop drives [`tick`](Self::tick) once per frame.
pub struct ViewController {
    transition: CameraTransition,
    framing: FramingPolicy,
    fovy: f32,
}

impl ViewController {
    /// Build a controller from options, idle at the configured startup
    /// pose.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let initial = CameraPose {
            position: options.camera.initial_position,
            target: options.camera.initial_target,
        };
        Self {
            transition: CameraTransition::with_params(
                initial,
                options.transition.lerp_factor,
                options.transition.epsilon,
            ),
            framing: FramingPolicy {
                fit_offset: options.framing.fit_offset,
                view_direction: options.framing.view_direction,
            },
            fovy: options.camera.fovy,
        }
    }

    /// Fly the camera to `position`, looking at `target` (world origin if
    /// omitted).
    ///
    /// Rejects NaN or infinite components before touching any state: a
    /// non-finite value that reached the interpolator would corrupt every
    /// subsequent frame.
    pub fn move_to(&mut self, position: Vec3, target: Option<Vec3>) -> Result<(), FlytoError> {
        let target = target.unwrap_or(Vec3::ZERO);
        ensure_finite(position, "position")?;
        ensure_finite(target, "target")?;
        self.transition.set_goal(position, target);
        Ok(())
    }

    /// Fly the camera to a framing of the named object.
    ///
    /// Not-found is warning class: the error is returned, a warning is
    /// logged, and camera state is left exactly as it was.
    pub fn focus_on<S: SceneProvider>(&mut self, scene: &S, name: &str) -> Result<(), FlytoError> {
        let Some(handle) = scene.find_by_name(name) else {
            log::warn!("focus_on: object not found: {name}");
            return Err(FlytoError::ObjectNotFound(name.to_owned()));
        };
        let bounds = scene.world_bounds(&handle);
        let pose = self.framing.frame_object(&bounds, self.fovy, None);
        log::debug!(
            "focus_on {name}: bounds center {:?}, eye {:?}",
            pose.target,
            pose.position
        );
        self.transition.set_goal(pose.position, pose.target);
        Ok(())
    }

    /// Advance the transition one frame and push the pose into the sink.
    ///
    /// This is the only place the core touches the render collaborator.
    /// Returns the pose that was applied.
    pub fn tick<C: CameraSink>(&mut self, camera: &mut C) -> CameraPose {
        let pose = self.transition.tick();
        camera.apply_pose(pose.position, pose.target);
        pose
    }

    /// Whether a transition is still in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_animating()
    }

    /// Pose as of the last tick.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.transition.current()
    }
}

fn ensure_finite(v: Vec3, what: &'static str) -> Result<(), FlytoError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(FlytoError::NonFiniteInput(what))
    }
}
