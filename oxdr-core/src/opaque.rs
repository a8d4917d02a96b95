//! Fixed-size and variable-size opaque byte-block codecs.

use crate::buffer::XdrBuffer;
use crate::codec::{Codec, aligned_len};
use crate::error::{Error, Result};

/// Largest length a 4-byte prefix can declare.
///
/// RFC 4506 caps variable lengths at 2^32 - 1, but the original protocol
/// family treats lengths as non-negative 32-bit ints; unbounded codecs use
/// that bound.
pub const MAX_WIRE_LEN: usize = i32::MAX as usize;

/// Codec for `opaque[n]`: exactly `size` raw bytes, zero-padded to a 4-byte
/// boundary.
#[derive(Debug, Clone, Copy)]
pub struct OpaqueCodec {
    size: usize,
}

impl OpaqueCodec {
    /// Creates a codec transferring exactly `size` bytes.
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    /// Returns the configured byte count.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }
}

impl Codec for OpaqueCodec {
    type Item = Vec<u8>;

    fn encode(&self, buf: &mut XdrBuffer, val: &Vec<u8>) -> Result<()> {
        if val.len() != self.size {
            return Err(Error::LengthMismatch {
                expected: self.size,
                actual: val.len(),
            });
        }
        buf.put_aligned(val)
    }

    fn decode(&self, buf: &mut XdrBuffer) -> Result<Vec<u8>> {
        let mut dst = vec![0u8; self.size];
        buf.get_aligned(&mut dst)?;
        Ok(dst)
    }

    fn encoded_len(&self, _val: &Vec<u8>) -> Option<usize> {
        Some(aligned_len(self.size))
    }
}

/// Codec for `opaque<m>`: a 4-byte length prefix, the raw bytes, then
/// zero-padding to a 4-byte boundary.
#[derive(Debug, Clone, Copy)]
pub struct VarOpaqueCodec {
    maxsize: usize,
}

impl VarOpaqueCodec {
    /// Creates a codec accepting at most `maxsize` bytes.
    #[must_use]
    pub const fn new(maxsize: usize) -> Self {
        Self { maxsize }
    }

    /// Creates a codec bounded only by what the wire can represent.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            maxsize: MAX_WIRE_LEN,
        }
    }

    /// Returns the configured maximum byte count.
    #[must_use]
    pub const fn maxsize(&self) -> usize {
        self.maxsize
    }
}

impl Default for VarOpaqueCodec {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl Codec for VarOpaqueCodec {
    type Item = Vec<u8>;

    fn encode(&self, buf: &mut XdrBuffer, val: &Vec<u8>) -> Result<()> {
        let len = val.len();
        if len > self.maxsize {
            return Err(Error::MaxSizeExceeded {
                length: len,
                max: self.maxsize,
            });
        }
        let prefix = u32::try_from(len).map_err(|_| Error::MaxSizeExceeded {
            length: len,
            max: MAX_WIRE_LEN,
        })?;
        buf.put_u32(prefix)?;
        buf.put_aligned(val)
    }

    fn decode(&self, buf: &mut XdrBuffer) -> Result<Vec<u8>> {
        let len = buf.get_u32()? as usize;
        if len > self.maxsize {
            return Err(Error::MaxSizeExceeded {
                length: len,
                max: self.maxsize,
            });
        }
        let mut dst = vec![0u8; len];
        buf.get_aligned(&mut dst)?;
        Ok(dst)
    }

    fn encoded_len(&self, val: &Vec<u8>) -> Option<usize> {
        Some(4 + aligned_len(val.len()))
    }
}
