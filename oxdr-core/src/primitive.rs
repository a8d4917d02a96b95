//! Fixed-width primitive codecs.
//!
//! This module provides the five RFC 4506 scalar codecs (int, bool, hyper,
//! float, double) plus the zero-byte void codec and an enum codec that maps
//! a fieldless Rust enum to its 4-byte wire discriminant.
//!
//! Scalar widths are already multiples of 4, so none of these codecs take an
//! alignment step.

use crate::buffer::XdrBuffer;
use crate::codec::Codec;
use crate::error::{Error, Result};
use num_traits::{FromPrimitive, ToPrimitive};
use std::marker::PhantomData;

/// Encodes a signed 32-bit int, big-endian two's-complement.
#[inline]
pub fn encode_int(buf: &mut XdrBuffer, val: i32) -> Result<()> {
    buf.put_i32(val)
}

/// Decodes a signed 32-bit int, big-endian two's-complement.
#[inline]
pub fn decode_int(buf: &mut XdrBuffer) -> Result<i32> {
    buf.get_i32()
}

/// Encodes a boolean as a 4-byte int, 1 for true and 0 for false.
#[inline]
pub fn encode_bool(buf: &mut XdrBuffer, val: bool) -> Result<()> {
    encode_int(buf, i32::from(val))
}

/// Decodes a boolean from a 4-byte int; any non-zero value is true.
#[inline]
pub fn decode_bool(buf: &mut XdrBuffer) -> Result<bool> {
    Ok(decode_int(buf)? != 0)
}

/// Codec for the XDR `int` type (4 bytes).
#[derive(Debug, Clone, Copy, Default)]
pub struct IntCodec;

/// Shared instance of [`IntCodec`].
pub const INT: IntCodec = IntCodec;

impl Codec for IntCodec {
    type Item = i32;

    fn encode(&self, buf: &mut XdrBuffer, val: &i32) -> Result<()> {
        encode_int(buf, *val)
    }

    fn decode(&self, buf: &mut XdrBuffer) -> Result<i32> {
        decode_int(buf)
    }

    fn encoded_len(&self, _val: &i32) -> Option<usize> {
        Some(4)
    }
}

/// Codec for the XDR `bool` type (4-byte int, 0 or 1).
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolCodec;

/// Shared instance of [`BoolCodec`].
pub const BOOL: BoolCodec = BoolCodec;

impl Codec for BoolCodec {
    type Item = bool;

    fn encode(&self, buf: &mut XdrBuffer, val: &bool) -> Result<()> {
        encode_bool(buf, *val)
    }

    fn decode(&self, buf: &mut XdrBuffer) -> Result<bool> {
        decode_bool(buf)
    }

    fn encoded_len(&self, _val: &bool) -> Option<usize> {
        Some(4)
    }
}

/// Codec for the XDR `hyper` type (signed 64-bit, 8 bytes).
#[derive(Debug, Clone, Copy, Default)]
pub struct HyperCodec;

/// Shared instance of [`HyperCodec`].
pub const HYPER: HyperCodec = HyperCodec;

impl Codec for HyperCodec {
    type Item = i64;

    fn encode(&self, buf: &mut XdrBuffer, val: &i64) -> Result<()> {
        buf.put_i64(*val)
    }

    fn decode(&self, buf: &mut XdrBuffer) -> Result<i64> {
        buf.get_i64()
    }

    fn encoded_len(&self, _val: &i64) -> Option<usize> {
        Some(8)
    }
}

/// Codec for the XDR `float` type (IEEE-754 single precision).
///
/// The raw bit pattern is transferred; NaN and infinity payloads are not
/// normalized.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatCodec;

/// Shared instance of [`FloatCodec`].
pub const FLOAT: FloatCodec = FloatCodec;

impl Codec for FloatCodec {
    type Item = f32;

    fn encode(&self, buf: &mut XdrBuffer, val: &f32) -> Result<()> {
        buf.put_f32(*val)
    }

    fn decode(&self, buf: &mut XdrBuffer) -> Result<f32> {
        buf.get_f32()
    }

    fn encoded_len(&self, _val: &f32) -> Option<usize> {
        Some(4)
    }
}

/// Codec for the XDR `double` type (IEEE-754 double precision).
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleCodec;

/// Shared instance of [`DoubleCodec`].
pub const DOUBLE: DoubleCodec = DoubleCodec;

impl Codec for DoubleCodec {
    type Item = f64;

    fn encode(&self, buf: &mut XdrBuffer, val: &f64) -> Result<()> {
        buf.put_f64(*val)
    }

    fn decode(&self, buf: &mut XdrBuffer) -> Result<f64> {
        buf.get_f64()
    }

    fn encoded_len(&self, _val: &f64) -> Option<usize> {
        Some(8)
    }
}

/// Codec for the XDR `void` type: zero bytes on the wire.
///
/// Commonly used as the default arm of a union.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoidCodec;

/// Shared instance of [`VoidCodec`].
pub const VOID: VoidCodec = VoidCodec;

impl Codec for VoidCodec {
    type Item = ();

    fn encode(&self, _buf: &mut XdrBuffer, _val: &()) -> Result<()> {
        Ok(())
    }

    fn decode(&self, _buf: &mut XdrBuffer) -> Result<()> {
        Ok(())
    }

    fn encoded_len(&self, _val: &()) -> Option<usize> {
        Some(0)
    }
}

/// Codec for a fieldless enum, encoded as its 4-byte discriminant.
///
/// `E` is expected to derive `FromPrimitive`/`ToPrimitive` (the
/// `num-derive` crate). Decoding a wire value with no matching variant
/// fails with [`Error::UnknownDiscriminant`].
pub struct EnumCodec<E> {
    _marker: PhantomData<fn() -> E>,
}

impl<E> EnumCodec<E> {
    /// Creates the codec.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<E> Default for EnumCodec<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for EnumCodec<E> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for EnumCodec<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumCodec").finish()
    }
}

impl<E: FromPrimitive + ToPrimitive> Codec for EnumCodec<E> {
    type Item = E;

    fn encode(&self, buf: &mut XdrBuffer, val: &E) -> Result<()> {
        // to_i32 is total for the fieldless enums this codec is meant for.
        let tag = val
            .to_i32()
            .ok_or(Error::UnknownDiscriminant { discriminant: i32::MIN })?;
        encode_int(buf, tag)
    }

    fn decode(&self, buf: &mut XdrBuffer) -> Result<E> {
        let tag = decode_int(buf)?;
        E::from_i32(tag).ok_or(Error::UnknownDiscriminant { discriminant: tag })
    }

    fn encoded_len(&self, _val: &E) -> Option<usize> {
        Some(4)
    }
}
