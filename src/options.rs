//! Runtime configuration with TOML preset support.
//!
//! All tweakable settings (camera projection defaults, framing margin and
//! angle, transition speed) are consolidated here. Options serialize
//! to/from TOML; every sub-struct uses `#[serde(default)]` so a partial
//! preset file that only overrides one table works correctly.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::FlytoError;
use crate::framing::DEFAULT_FIT_OFFSET;
use crate::transition::{DEFAULT_EPSILON, DEFAULT_LERP_FACTOR};

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection and startup pose.
    pub camera: CameraOptions,
    /// Auto-framing parameters.
    pub framing: FramingOptions,
    /// Transition interpolation parameters.
    pub transition: TransitionOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FlytoError> {
        let content = std::fs::read_to_string(path).map_err(FlytoError::Io)?;
        toml::from_str(&content).map_err(|e| FlytoError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FlytoError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FlytoError::OptionsParse(e.to_string()))?;
        std::fs::write(path, content).map_err(FlytoError::Io)
    }
}

/// Camera projection and startup pose.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Eye position at startup.
    pub initial_position: Vec3,
    /// Look-at target at startup.
    pub initial_target: Vec3,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 1000.0,
            initial_position: Vec3::new(3.0, 3.0, 3.0),
            initial_target: Vec3::ZERO,
        }
    }
}

/// Auto-framing parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FramingOptions {
    /// Margin multiplier on the exact-fit distance (`>= 1`).
    pub fit_offset: f32,
    /// Viewing direction from target toward eye (normalized at use).
    pub view_direction: Vec3,
}

impl Default for FramingOptions {
    fn default() -> Self {
        Self {
            fit_offset: DEFAULT_FIT_OFFSET,
            view_direction: Vec3::new(0.5, 1.0, 0.5),
        }
    }
}

/// Transition interpolation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TransitionOptions {
    /// Fraction of the remaining distance closed per tick, in (0, 1].
    pub lerp_factor: f32,
    /// Convergence threshold in scene units.
    pub epsilon: f32,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            lerp_factor: DEFAULT_LERP_FACTOR,
            epsilon: DEFAULT_EPSILON,
        }
    }
}
