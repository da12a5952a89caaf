//! Error types for the Galaxy3D camera system
//!
//! Every failure is reported at the boundary of the operation that detected it.
//! None of them unwind across frames.

use std::fmt;

/// Result type for camera system operations
pub type Result<T> = std::result::Result<T, Error>;

/// Camera system errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A bounded collection (camera world, focus stack) is full
    CapacityExceeded {
        /// Name of the full collection
        what: &'static str,
        /// Fixed capacity of the collection
        capacity: usize,
    },

    /// A handle does not resolve to a live object (stale or never created)
    NotFound(String),

    /// Best-effort publication of view/projection matrices failed
    PublishFailure(String),

    /// Lens parameters rejected by validation
    InvalidParameters(String),

    /// A named object is already registered
    AlreadyExists(String),

    /// Camera bookkeeping and host bookkeeping have diverged
    UnexpectedState(String),
}

impl Error {
    /// Whether this error reports a full collection
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, Error::CapacityExceeded { .. })
    }

    /// Whether this error reports a missing object
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CapacityExceeded { what, capacity } => {
                write!(f, "Capacity exceeded: {} is full ({})", what, capacity)
            }
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::PublishFailure(msg) => write!(f, "Publish failure: {}", msg),
            Error::InvalidParameters(msg) => write!(f, "Invalid parameters: {}", msg),
            Error::AlreadyExists(msg) => write!(f, "Already exists: {}", msg),
            Error::UnexpectedState(msg) => write!(f, "Unexpected state: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Build an error of the given tuple variant and log it at ERROR with file:line
///
/// # Example
///
/// ```no_run
/// use galaxy_3d_camera::engine_err;
///
/// let err = engine_err!("galaxy3d::CameraWorld", NotFound, "Camera {} not found", 3);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::galaxy3d::Error::$variant(message)
    }};
}

/// Log an error at ERROR with file:line and return it from the current function
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $variant, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
