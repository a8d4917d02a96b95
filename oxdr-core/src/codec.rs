//! The codec capability shared by every XDR encoder/decoder pair.

use crate::buffer::XdrBuffer;
use crate::error::Result;

/// A stateless encode/decode capability for one XDR payload shape.
///
/// Codecs are configuration-only values (a fixed size, a maximum length, an
/// element codec) with no per-call mutable state: a codec graph is typically
/// built once at startup and reused across many encode/decode calls, and is
/// safe to share between threads operating on distinct buffers.
///
/// The trait is object-safe; combinators such as
/// [`UnionCodec`](crate::union::UnionCodec) hold cases as
/// `Box<dyn Codec<Item = T> + Send + Sync>`, and the blanket impls below let
/// a codec pass `&self` back into a combinator to express recursive
/// structures.
pub trait Codec {
    /// The decoded payload type.
    type Item;

    /// Encodes `val` into the buffer at its cursor.
    ///
    /// # Errors
    /// Any [`Error`](crate::error::Error) from the codec's own validation or
    /// from the buffer bounds checks. On failure the buffer position is
    /// unspecified.
    fn encode(&self, buf: &mut XdrBuffer, val: &Self::Item) -> Result<()>;

    /// Decodes a payload from the buffer at its cursor.
    ///
    /// # Errors
    /// Any [`Error`](crate::error::Error) from the wire data or the buffer
    /// bounds checks. On failure the buffer position is unspecified.
    fn decode(&self, buf: &mut XdrBuffer) -> Result<Self::Item>;

    /// Returns the exact encoded length of `val` in bytes, if cheaply known.
    fn encoded_len(&self, val: &Self::Item) -> Option<usize> {
        let _ = val;
        None
    }
}

impl<C: Codec + ?Sized> Codec for &C {
    type Item = C::Item;

    fn encode(&self, buf: &mut XdrBuffer, val: &Self::Item) -> Result<()> {
        (**self).encode(buf, val)
    }

    fn decode(&self, buf: &mut XdrBuffer) -> Result<Self::Item> {
        (**self).decode(buf)
    }

    fn encoded_len(&self, val: &Self::Item) -> Option<usize> {
        (**self).encoded_len(val)
    }
}

impl<C: Codec + ?Sized> Codec for Box<C> {
    type Item = C::Item;

    fn encode(&self, buf: &mut XdrBuffer, val: &Self::Item) -> Result<()> {
        (**self).encode(buf, val)
    }

    fn decode(&self, buf: &mut XdrBuffer) -> Result<Self::Item> {
        (**self).decode(buf)
    }

    fn encoded_len(&self, val: &Self::Item) -> Option<usize> {
        (**self).encoded_len(val)
    }
}

/// Rounds `len` up to the next multiple of 4.
///
/// Used by codecs that report [`Codec::encoded_len`] for aligned payloads.
#[must_use]
pub const fn aligned_len(len: usize) -> usize {
    (len + 3) & !3
}
