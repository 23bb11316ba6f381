//! Crate-level error types.

use std::fmt;

/// Errors produced by the flyto crate.
///
/// All variants are local and recoverable; nothing here is fatal to the
/// host process.
#[derive(Debug)]
pub enum FlytoError {
    /// `focus_on` named an object the scene does not contain. Warning
    /// class: camera state is left untouched.
    ObjectNotFound(String),
    /// A position or target contained NaN or infinity. Rejected before any
    /// state change; a NaN that reached the interpolator would propagate
    /// through every subsequent lerp.
    NonFiniteInput(&'static str),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for FlytoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ObjectNotFound(name) => {
                write!(f, "object not found: {name}")
            }
            Self::NonFiniteInput(what) => {
                write!(f, "non-finite {what}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for FlytoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FlytoError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
