//! Error types for NFL8 operations.
//!
//! A single error type covers bit-level access failures (bounds, unbound or
//! read-only views) as well as codec failures (framing, checksum, level tags).
//! None of these are transient, so callers should not retry on error.

use thiserror::Error;

/// The main error type for NFL8 operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Nfl8Error {
    /// Access through a view that is not bound to any storage.
    #[error("Null buffer: the view is not bound to any storage")]
    NullBuffer,

    /// Index or range exceeds the length of the buffer.
    #[error("Out of bounds: given {given}, but the boundary is {boundary}")]
    OutOfBounds {
        /// The index, or end of range, that was requested.
        given: usize,
        /// The length it was checked against.
        boundary: usize,
    },

    /// Pop on an empty bit buffer.
    #[error("No bits: the bit buffer is empty")]
    NoBits,

    /// Input does not have the size the header or frame requires.
    #[error("Insufficient size: given {given} bytes, but needed {needed}")]
    InsufficientSize {
        /// Number of bytes provided.
        given: usize,
        /// Number of bytes required.
        needed: usize,
    },

    /// The frame does not start with the `NFL8` tag.
    #[error("Bad header magic: expected \"NFL8\", found {found:02x?}")]
    BadHeaderMagic {
        /// The four leading bytes that were found.
        found: [u8; 4],
    },

    /// CRC-32 of the deflated data does not match the header.
    #[error("Bad CRC: computed {given:#010x}, but expected {expected:#010x}")]
    BadCrc {
        /// Checksum computed over the recovered data.
        given: u32,
        /// Checksum recorded in the header.
        expected: u32,
    },

    /// Level tag in a header is not one of the known levels.
    #[error("Unsupported inflate level: tag {0} is not a known level")]
    UnsupportedInflateLevel(u8),

    /// Mutation attempted through a read-only view.
    #[error("Immutable buffer write: the view is read-only")]
    ImmutableBufferWrite,

    /// Padding width outside `1..=7`.
    #[error("Invalid width: {0} (must be 1-7)")]
    InvalidWidth(u8),

    /// Level text could not be parsed.
    #[error("Invalid level: {0}")]
    InvalidLevel(String),
}

/// Result type alias for NFL8 operations.
pub type Result<T> = std::result::Result<T, Nfl8Error>;

impl Nfl8Error {
    /// Create an out of bounds error.
    pub fn out_of_bounds(given: usize, boundary: usize) -> Self {
        Self::OutOfBounds { given, boundary }
    }

    /// Create an insufficient size error.
    pub fn insufficient_size(given: usize, needed: usize) -> Self {
        Self::InsufficientSize { given, needed }
    }

    /// Create a bad header magic error from the leading bytes of a frame.
    pub fn bad_magic(found: &[u8]) -> Self {
        let mut tag = [0u8; 4];
        let n = found.len().min(4);
        tag[..n].copy_from_slice(&found[..n]);
        Self::BadHeaderMagic { found: tag }
    }

    /// Create a CRC mismatch error.
    pub fn bad_crc(given: u32, expected: u32) -> Self {
        Self::BadCrc { given, expected }
    }

    /// Create an invalid level error.
    pub fn invalid_level(message: impl Into<String>) -> Self {
        Self::InvalidLevel(message.into())
    }
}
