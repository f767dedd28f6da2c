//! Error handling for ViewKit.
//!
//! All error types use `thiserror` for ergonomic error handling. The only
//! failure modes in the core are geometric: degenerate window or viewport
//! sizes would otherwise produce non-finite transforms, and a non-positive
//! zoom factor would flip or collapse the viewport rectangle. Both are
//! rejected up front instead of letting NaN/inf propagate.

use thiserror::Error;

/// Geometry error type
///
/// Represents violated preconditions of the viewport transform math.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Window pixel size is not strictly positive
    #[error("Degenerate window size {width}x{height}")]
    DegenerateWindow {
        /// The window width in pixels.
        width: f64,
        /// The window height in pixels.
        height: f64,
    },

    /// Viewport rectangle has a non-positive extent
    #[error("Degenerate viewport {width}x{height}")]
    DegenerateViewport {
        /// The viewport width in scene units.
        width: f64,
        /// The viewport height in scene units.
        height: f64,
    },

    /// Zoom factor is not strictly positive and finite
    #[error("Invalid scale factor {factor}")]
    InvalidScaleFactor {
        /// The rejected scale factor.
        factor: f64,
    },
}

/// Main error type for ViewKit
///
/// A unified error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
