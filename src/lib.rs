// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests assert freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::float_cmp))]

//! Camera fly-to transitions and bounds-based auto-framing for 3D viewers.
//!
//! Flyto is the camera engine of an interactive viewer: a per-frame
//! interpolation state machine that flies the camera smoothly toward a
//! goal pose, and a framing policy that derives that pose from any named
//! object's world-space bounds. Rendering, windowing, and input stay on
//! the host's side of two narrow traits.
//!
//! # Key entry points
//!
//! - [`controller::ViewController`] - the public control surface
//!   (`move_to`, `focus_on`, `tick`)
//! - [`transition::CameraTransition`] - the Idle/Animating interpolation
//!   state machine
//! - [`framing::FramingPolicy`] - bounds → camera pose derivation
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! The host render loop calls [`controller::ViewController::tick`] once
//! per frame; each tick closes a fixed fraction of the remaining distance
//! to the goal and hands the interpolated pose to the host's
//! [`controller::CameraSink`]. Focus requests resolve object bounds
//! through the host's [`controller::SceneProvider`], so the engine runs
//! (and tests) without any rendering library.

pub mod bounds;
pub mod controller;
pub mod error;
pub mod framing;
pub mod options;
pub mod transition;
