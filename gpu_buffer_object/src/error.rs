//! Error types for GPU buffer objects
//!
//! This module defines the error types used by buffer objects and the
//! device backends they sit on.

use std::fmt;

use crate::device::BufferTarget;

/// Result type for buffer object operations
pub type Result<T> = std::result::Result<T, Error>;

/// Buffer object errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Buffer is already allocated for another binding target
    TargetMismatch {
        /// Target fixed when the native buffer was created
        allocated: BufferTarget,
        /// Target requested by the failing call
        requested: BufferTarget,
    },

    /// The device cannot host buffers for this target
    UnsupportedTarget(BufferTarget),

    /// Backend-specific error (OpenGL, mock device, etc.)
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TargetMismatch { allocated, requested } => write!(
                f,
                "Incompatible buffer target: buffer is allocated as {}, requested {}",
                allocated, requested
            ),
            Error::UnsupportedTarget(target) => {
                write!(f, "Unsupported buffer target: {}", target)
            }
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
