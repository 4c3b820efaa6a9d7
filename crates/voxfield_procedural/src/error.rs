//! # World Error Types
//!
//! The only ways a generation request can be rejected.

use thiserror::Error;

/// Errors that can occur while building a world.
///
/// Out-of-bounds coordinates are not errors: reads return the empty
/// sentinel and writes are ignored.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldError {
    /// Width or height is zero or negative.
    #[error("invalid world dimension: width {width}, height {height} (both must be > 0)")]
    InvalidDimension {
        /// Requested horizontal extent (X and Z).
        width: i32,
        /// Requested vertical extent (Y).
        height: i32,
    },

    /// `width * width * height` does not fit in the addressable cell count.
    #[error("world volume {width}x{height}x{width} is too large to allocate")]
    VolumeTooLarge {
        /// Requested horizontal extent (X and Z).
        width: i32,
        /// Requested vertical extent (Y).
        height: i32,
    },
}

/// Result type for world operations.
pub type WorldResult<T> = Result<T, WorldError>;
