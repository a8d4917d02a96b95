//! Error types for XDR encoding and decoding.

use thiserror::Error;

/// Core error type for XDR codec operations.
///
/// Errors are propagated immediately to the caller of the top-level encode
/// or decode call. A failed operation leaves the buffer position in an
/// unspecified state; callers must [`clear`](crate::buffer::XdrBuffer::clear)
/// or [`rewind`](crate::buffer::XdrBuffer::rewind) the buffer before reuse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Encode would write past the buffer limit.
    #[error("buffer overflow: writing {requested} bytes at position {position} exceeds limit {limit}")]
    Overflow {
        /// Cursor position at the time of the write.
        position: usize,
        /// Number of bytes requested.
        requested: usize,
        /// Buffer limit in bytes.
        limit: usize,
    },

    /// Decode would read past the buffer limit.
    #[error("buffer underflow: reading {requested} bytes at position {position} exceeds limit {limit}")]
    Underflow {
        /// Cursor position at the time of the read.
        position: usize,
        /// Number of bytes requested.
        requested: usize,
        /// Buffer limit in bytes.
        limit: usize,
    },

    /// A fixed-size codec was given input of the wrong length.
    #[error("length mismatch: expected {expected}, actual {actual}")]
    LengthMismatch {
        /// Length the codec was configured with.
        expected: usize,
        /// Length of the supplied value.
        actual: usize,
    },

    /// A declared or prefixed length exceeds the codec's configured bound.
    #[error("maximum size exceeded: length {length} exceeds maximum {max}")]
    MaxSizeExceeded {
        /// Length declared by the caller or read from the wire.
        length: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Text could not be transcoded to or from UTF-8 cleanly.
    #[error("malformed UTF-8 encoding at position {position}")]
    MalformedEncoding {
        /// Buffer position of the offending sequence.
        position: usize,
    },

    /// A union discriminant has neither a case codec nor a default.
    #[error("unknown union discriminant {discriminant}")]
    UnknownDiscriminant {
        /// The unmatched discriminant value.
        discriminant: i32,
    },
}

/// Result type alias for XDR codec operations.
pub type Result<T> = std::result::Result<T, Error>;
