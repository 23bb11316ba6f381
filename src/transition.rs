//! Per-frame camera interpolation state machine.
//!
//! Each tick closes a fixed fraction of the remaining distance to the goal
//! (exponential approach, not constant speed), so the machine is driven by
//! tick count rather than wall clock. Hosts call [`CameraTransition::tick`]
//! once per frame; the cadence is assumed roughly constant. Hosts with
//! variable frame rates can rescale the factor per frame themselves.

use glam::Vec3;

use crate::framing::CameraPose;

/// Fraction of the remaining distance closed per tick.
pub const DEFAULT_LERP_FACTOR: f32 = 0.08;

/// Convergence threshold, in scene units.
pub const DEFAULT_EPSILON: f32 = 0.01;

/// Smooth interpolation toward a goal pose.
///
/// Two states: Idle (current equals the last set goal, `tick` is a no-op)
/// and Animating (interpolating). [`set_goal`](Self::set_goal) always
/// preempts: the last write wins and there is no queueing. Stopping in
/// place is just setting the goal to the current pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransition {
    current: CameraPose,
    goal: CameraPose,
    lerp_factor: f32,
    epsilon: f32,
    animating: bool,
}

impl CameraTransition {
    /// Create an idle transition at `initial`, with default factor and
    /// epsilon.
    #[must_use]
    pub fn new(initial: CameraPose) -> Self {
        Self::with_params(initial, DEFAULT_LERP_FACTOR, DEFAULT_EPSILON)
    }

    /// Create an idle transition with explicit parameters.
    ///
    /// `lerp_factor` is clamped into (0, 1]; 1 degenerates to an instant
    /// snap on the first tick. `epsilon` is clamped to be positive.
    #[must_use]
    pub fn with_params(initial: CameraPose, lerp_factor: f32, epsilon: f32) -> Self {
        Self {
            current: initial,
            goal: initial,
            lerp_factor: lerp_factor.clamp(1e-4, 1.0),
            epsilon: epsilon.max(1e-6),
            animating: false,
        }
    }

    /// Replace the goal and start (or retarget) the animation.
    ///
    /// Overwrites any in-flight goal immediately; the old goal is never
    /// revisited.
    pub fn set_goal(&mut self, position: Vec3, target: Vec3) {
        self.goal = CameraPose { position, target };
        self.animating = true;
        log::debug!(
            "camera goal set: position {:?} target {:?}",
            position,
            target
        );
    }

    /// Advance one frame and return the resulting pose.
    ///
    /// While animating, moves `current` toward the goal by the lerp factor
    /// on both position and target. Once both are within epsilon of the
    /// goal, snaps `current` to the goal exactly (no residual drift) and
    /// goes Idle. Idle ticks do no work.
    pub fn tick(&mut self) -> CameraPose {
        if !self.animating {
            return self.current;
        }

        self.current.position = self.current.position.lerp(self.goal.position, self.lerp_factor);
        self.current.target = self.current.target.lerp(self.goal.target, self.lerp_factor);

        let converged = self.current.position.distance(self.goal.position) < self.epsilon
            && self.current.target.distance(self.goal.target) < self.epsilon;
        if converged {
            self.current = self.goal;
            self.animating = false;
            log::debug!("camera transition converged at {:?}", self.goal.position);
        }

        self.current
    }

    /// Pose as of the last tick (or the initial pose before any tick).
    #[must_use]
    pub fn current(&self) -> CameraPose {
        self.current
    }

    /// The goal pose the machine is (or was last) converging toward.
    #[must_use]
    pub fn goal(&self) -> CameraPose {
        self.goal
    }

    /// Whether an animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_origin() -> CameraTransition {
        CameraTransition::new(CameraPose {
            position: Vec3::ZERO,
            target: Vec3::ZERO,
        })
    }

    /// Upper bound on ticks to converge from distance `d0`:
    /// remaining distance after n ticks is `d0 * (1 - α)^n`.
    fn tick_bound(d0: f32, alpha: f32, epsilon: f32) -> u32 {
        ((epsilon / d0).ln() / (1.0 - alpha).ln()).ceil() as u32
    }

    #[test]
    fn test_starts_idle() {
        let mut t = at_origin();
        assert!(!t.is_animating());
        assert_eq!(t.tick(), t.current());
    }

    #[test]
    fn test_first_tick_closes_lerp_fraction() {
        // moveTo (3,3,3) from rest at origin with α = 0.08:
        // after one tick current ≈ (0.24, 0.24, 0.24).
        let mut t = at_origin();
        t.set_goal(Vec3::splat(3.0), Vec3::ZERO);
        let pose = t.tick();
        assert!((pose.position - Vec3::splat(0.24)).length() < 1e-5);
    }

    #[test]
    fn test_converges_and_snaps_exactly() {
        let goal = Vec3::splat(3.0);
        let mut t = at_origin();
        t.set_goal(goal, Vec3::ZERO);

        let d0 = goal.length();
        let bound = tick_bound(d0, DEFAULT_LERP_FACTOR, DEFAULT_EPSILON);
        let mut ticks = 0;
        while t.is_animating() {
            let _ = t.tick();
            ticks += 1;
            assert!(ticks <= bound, "did not converge within {bound} ticks");
        }
        // Exact snap, not merely within epsilon.
        assert_eq!(t.current().position, goal);
        assert_eq!(t.current().target, Vec3::ZERO);
    }

    #[test]
    fn test_approach_is_monotonic() {
        let goal = Vec3::new(10.0, -4.0, 7.0);
        let mut t = at_origin();
        t.set_goal(goal, Vec3::new(1.0, 1.0, 1.0));

        let mut last = t.current().position.distance(goal);
        while t.is_animating() {
            let pose = t.tick();
            let d = pose.position.distance(goal);
            assert!(d <= last, "distance increased: {d} > {last}");
            last = d;
        }
    }

    #[test]
    fn test_idle_tick_is_idempotent() {
        let mut t = at_origin();
        t.set_goal(Vec3::ONE, Vec3::ZERO);
        while t.is_animating() {
            let _ = t.tick();
        }
        let settled = t.current();
        for _ in 0..10 {
            assert_eq!(t.tick(), settled);
        }
        assert!(!t.is_animating());
    }

    #[test]
    fn test_new_goal_preempts_old() {
        let mut t = at_origin();
        t.set_goal(Vec3::splat(100.0), Vec3::ZERO);
        let _ = t.tick();
        let _ = t.tick();

        let new_goal = Vec3::new(-5.0, 0.0, 0.0);
        t.set_goal(new_goal, Vec3::ZERO);
        assert_eq!(t.goal().position, new_goal);

        // Every subsequent tick converges on the new goal only.
        let mut last = t.current().position.distance(new_goal);
        while t.is_animating() {
            let pose = t.tick();
            let d = pose.position.distance(new_goal);
            assert!(d <= last);
            last = d;
        }
        assert_eq!(t.current().position, new_goal);
    }

    #[test]
    fn test_goal_at_current_settles_next_tick() {
        let mut t = at_origin();
        t.set_goal(Vec3::ZERO, Vec3::ZERO);
        assert!(t.is_animating());
        let _ = t.tick();
        assert!(!t.is_animating());
        assert_eq!(t.current().position, Vec3::ZERO);
    }
}
