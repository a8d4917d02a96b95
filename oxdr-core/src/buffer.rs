//! Cursor buffer and alignment operations for XDR encoding.
//!
//! This module provides:
//! - [`XdrBuffer`] - a fixed-capacity, big-endian byte region with a cursor
//! - the 4-byte alignment operations required by every variable payload
//! - [`BufferPool`] for reusable buffer allocation
//!
//! XDR is big-endian by definition (RFC 4506 section 3); every multi-byte
//! read and write in this module stores the most significant byte first, and
//! the byte order cannot be changed for the lifetime of a buffer.

use crate::error::{Error, Result};
use crossbeam_queue::ArrayQueue;
use std::sync::Arc;

/// Zero bytes needed to reach the next 4-byte boundary, indexed by `pos % 4`.
const PAD: [usize; 4] = [0, 3, 2, 1];

/// A fixed-capacity byte region with an independent read/write cursor.
///
/// The buffer maintains the invariant `0 <= position <= limit <= capacity`.
/// Encoding advances `position` and fails with [`Error::Overflow`] when a
/// write would pass `limit`; decoding advances `position` and fails with
/// [`Error::Underflow`] when a read would pass `limit`. The limit never
/// shrinks implicitly.
///
/// A single `XdrBuffer` carries per-call mutable state (its cursor) and is
/// not meant to be shared between concurrent operations; use one buffer per
/// in-flight message.
#[derive(Clone)]
pub struct XdrBuffer {
    data: Box<[u8]>,
    position: usize,
    limit: usize,
}

impl XdrBuffer {
    /// Creates a zeroed buffer of the given capacity, ready for encoding.
    ///
    /// The limit starts at `capacity`.
    #[must_use]
    pub fn allocate(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity].into_boxed_slice(),
            position: 0,
            limit: capacity,
        }
    }

    /// Wraps pre-filled bytes for decoding.
    ///
    /// The limit starts at the data length, so the buffer is immediately
    /// readable without a [`flip`](Self::flip).
    #[must_use]
    pub fn wrap(data: Vec<u8>) -> Self {
        let limit = data.len();
        Self {
            data: data.into_boxed_slice(),
            position: 0,
            limit,
        }
    }

    /// Returns the total capacity in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor to `pos`.
    ///
    /// # Panics
    /// Panics if `pos` exceeds the limit; cursor placement is a caller
    /// contract, not a wire-data condition.
    pub fn set_position(&mut self, pos: usize) {
        assert!(pos <= self.limit, "position {pos} exceeds limit {}", self.limit);
        self.position = pos;
    }

    /// Returns the valid-data end.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the number of bytes between the cursor and the limit.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.limit - self.position
    }

    /// Flips the buffer from encoding to decoding: the limit becomes the
    /// current position and the cursor returns to zero.
    pub fn flip(&mut self) {
        self.limit = self.position;
        self.position = 0;
    }

    /// Resets the cursor to zero without touching the limit.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Resets the cursor to zero and restores the limit to the capacity.
    pub fn clear(&mut self) {
        self.position = 0;
        self.limit = self.data.len();
    }

    /// Returns the full backing storage.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns the bytes up to the limit.
    ///
    /// After a [`flip`](Self::flip) this is the encoded message.
    #[must_use]
    pub fn filled(&self) -> &[u8] {
        &self.data[..self.limit]
    }

    #[inline(always)]
    fn writable(&mut self, n: usize) -> Result<usize> {
        let pos = self.position;
        if pos + n > self.limit {
            return Err(Error::Overflow {
                position: pos,
                requested: n,
                limit: self.limit,
            });
        }
        self.position = pos + n;
        Ok(pos)
    }

    #[inline(always)]
    fn readable(&mut self, n: usize) -> Result<usize> {
        let pos = self.position;
        if pos + n > self.limit {
            return Err(Error::Underflow {
                position: pos,
                requested: n,
                limit: self.limit,
            });
        }
        self.position = pos + n;
        Ok(pos)
    }

    /// Writes a single byte at the cursor.
    #[inline(always)]
    pub fn put_u8(&mut self, value: u8) -> Result<()> {
        let pos = self.writable(1)?;
        self.data[pos] = value;
        Ok(())
    }

    /// Reads a single byte at the cursor.
    #[inline(always)]
    pub fn get_u8(&mut self) -> Result<u8> {
        let pos = self.readable(1)?;
        Ok(self.data[pos])
    }

    /// Writes a u32 in big-endian at the cursor.
    #[inline(always)]
    pub fn put_u32(&mut self, value: u32) -> Result<()> {
        let pos = self.writable(4)?;
        self.data[pos..pos + 4].copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    /// Reads a u32 in big-endian at the cursor.
    #[inline(always)]
    pub fn get_u32(&mut self) -> Result<u32> {
        let pos = self.readable(4)?;
        let bytes = &self.data[pos..pos + 4];
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Writes an i32 in big-endian two's-complement at the cursor.
    #[inline(always)]
    pub fn put_i32(&mut self, value: i32) -> Result<()> {
        self.put_u32(value as u32)
    }

    /// Reads an i32 in big-endian two's-complement at the cursor.
    #[inline(always)]
    pub fn get_i32(&mut self) -> Result<i32> {
        Ok(self.get_u32()? as i32)
    }

    /// Writes a u64 in big-endian at the cursor.
    #[inline(always)]
    pub fn put_u64(&mut self, value: u64) -> Result<()> {
        let pos = self.writable(8)?;
        self.data[pos..pos + 8].copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    /// Reads a u64 in big-endian at the cursor.
    #[inline(always)]
    pub fn get_u64(&mut self) -> Result<u64> {
        let pos = self.readable(8)?;
        let bytes = &self.data[pos..pos + 8];
        Ok(u64::from_be_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]))
    }

    /// Writes an i64 in big-endian two's-complement at the cursor.
    #[inline(always)]
    pub fn put_i64(&mut self, value: i64) -> Result<()> {
        self.put_u64(value as u64)
    }

    /// Reads an i64 in big-endian two's-complement at the cursor.
    #[inline(always)]
    pub fn get_i64(&mut self) -> Result<i64> {
        Ok(self.get_u64()? as i64)
    }

    /// Writes an f32 as its raw IEEE-754 bit pattern.
    #[inline(always)]
    pub fn put_f32(&mut self, value: f32) -> Result<()> {
        self.put_u32(value.to_bits())
    }

    /// Reads an f32 from its raw IEEE-754 bit pattern.
    #[inline(always)]
    pub fn get_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.get_u32()?))
    }

    /// Writes an f64 as its raw IEEE-754 bit pattern.
    #[inline(always)]
    pub fn put_f64(&mut self, value: f64) -> Result<()> {
        self.put_u64(value.to_bits())
    }

    /// Reads an f64 from its raw IEEE-754 bit pattern.
    #[inline(always)]
    pub fn get_f64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.get_u64()?))
    }

    /// Writes a byte slice at the cursor.
    #[inline]
    pub fn put_bytes(&mut self, src: &[u8]) -> Result<()> {
        let pos = self.writable(src.len())?;
        self.data[pos..pos + src.len()].copy_from_slice(src);
        Ok(())
    }

    /// Reads bytes at the cursor into `dst`, filling it completely.
    #[inline]
    pub fn get_bytes(&mut self, dst: &mut [u8]) -> Result<()> {
        let pos = self.readable(dst.len())?;
        dst.copy_from_slice(&self.data[pos..pos + dst.len()]);
        Ok(())
    }

    /// Pads the cursor forward to the next 4-byte boundary with zero bytes.
    ///
    /// Writes nothing when the cursor is already aligned.
    pub fn encode_align(&mut self) -> Result<()> {
        let pad = PAD[self.position % 4];
        if pad > 0 {
            let pos = self.writable(pad)?;
            self.data[pos..pos + pad].fill(0);
        }
        Ok(())
    }

    /// Advances the cursor to the next 4-byte boundary without reading.
    ///
    /// The skipped padding bytes are not inspected: non-zero padding is
    /// accepted. RFC 4506 requires zero padding on the wire, but this
    /// decoder deliberately skips rather than verifies.
    pub fn decode_align(&mut self) -> Result<()> {
        let pad = PAD[self.position % 4];
        if pad > 0 {
            self.readable(pad)?;
        }
        Ok(())
    }

    /// Writes `src` then pads to the next 4-byte boundary.
    ///
    /// The combined transfer always occupies `src.len()` rounded up to a
    /// multiple of 4, which is zero extra bytes when the length is already
    /// a multiple of 4.
    pub fn put_aligned(&mut self, src: &[u8]) -> Result<()> {
        self.put_bytes(src)?;
        self.encode_align()
    }

    /// Fills `dst` from the buffer then skips to the next 4-byte boundary.
    pub fn get_aligned(&mut self, dst: &mut [u8]) -> Result<()> {
        self.get_bytes(dst)?;
        self.decode_align()
    }
}

impl std::fmt::Debug for XdrBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XdrBuffer")
            .field("capacity", &self.data.len())
            .field("position", &self.position)
            .field("limit", &self.limit)
            .finish()
    }
}

/// Default buffer size for the pool (64KB).
pub const DEFAULT_BUFFER_SIZE: usize = 65536;

/// Pool of reusable buffers to avoid allocation overhead.
///
/// The pool uses a lock-free queue for thread-safe buffer acquisition and
/// release with minimal contention. Buffers are zeroed and cleared when
/// released.
pub struct BufferPool {
    buffers: Arc<ArrayQueue<XdrBuffer>>,
    capacity: usize,
}

impl BufferPool {
    /// Creates a pool holding `capacity` buffers of [`DEFAULT_BUFFER_SIZE`].
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_buffer_size(capacity, DEFAULT_BUFFER_SIZE)
    }

    /// Creates a pool holding `capacity` buffers of `buffer_size` bytes each.
    #[must_use]
    pub fn with_buffer_size(capacity: usize, buffer_size: usize) -> Self {
        let buffers = ArrayQueue::new(capacity);
        for _ in 0..capacity {
            let _ = buffers.push(XdrBuffer::allocate(buffer_size));
        }
        Self {
            buffers: Arc::new(buffers),
            capacity,
        }
    }

    /// Acquires a buffer from the pool.
    ///
    /// Returns `None` if the pool is empty.
    #[inline]
    #[must_use]
    pub fn acquire(&self) -> Option<XdrBuffer> {
        self.buffers.pop()
    }

    /// Releases a buffer back to the pool, zeroed and cleared.
    #[inline]
    pub fn release(&self, mut buffer: XdrBuffer) {
        buffer.data.fill(0);
        buffer.clear();
        let _ = self.buffers.push(buffer);
    }

    /// Returns the capacity of the pool.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of available buffers in the pool.
    #[must_use]
    pub fn available(&self) -> usize {
        self.buffers.len()
    }
}

impl Clone for BufferPool {
    fn clone(&self) -> Self {
        Self {
            buffers: Arc::clone(&self.buffers),
            capacity: self.capacity,
        }
    }
}

impl std::fmt::Debug for BufferPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferPool")
            .field("capacity", &self.capacity)
            .field("available", &self.buffers.len())
            .finish()
    }
}
