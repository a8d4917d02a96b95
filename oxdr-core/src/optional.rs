//! Boolean-discriminated optional ("pointer") codec.
//!
//! This combinator is how recursive structures such as linked lists are
//! expressed: a struct codec passes `&self` to [`encode_optional`] /
//! [`decode_optional`] for its own tail field. Decoding always terminates
//! because every chain ends on a `false` discriminant.

use crate::buffer::XdrBuffer;
use crate::codec::Codec;
use crate::error::Result;
use crate::primitive::{decode_bool, encode_bool};

/// Encodes a presence boolean, then the inner value when present.
pub fn encode_optional<C: Codec>(
    buf: &mut XdrBuffer,
    val: Option<&C::Item>,
    codec: &C,
) -> Result<()> {
    match val {
        Some(inner) => {
            encode_bool(buf, true)?;
            codec.encode(buf, inner)
        }
        None => encode_bool(buf, false),
    }
}

/// Decodes a presence boolean, then the inner value when present.
pub fn decode_optional<C: Codec>(buf: &mut XdrBuffer, codec: &C) -> Result<Option<C::Item>> {
    if decode_bool(buf)? {
        Ok(Some(codec.decode(buf)?))
    } else {
        Ok(None)
    }
}

/// Codec for XDR optional-data: `*T` in IDL notation.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionalCodec<C> {
    inner: C,
}

impl<C> OptionalCodec<C> {
    /// Wraps `inner` in a presence discriminant.
    #[must_use]
    pub const fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Codec> Codec for OptionalCodec<C> {
    type Item = Option<C::Item>;

    fn encode(&self, buf: &mut XdrBuffer, val: &Option<C::Item>) -> Result<()> {
        encode_optional(buf, val.as_ref(), &self.inner)
    }

    fn decode(&self, buf: &mut XdrBuffer) -> Result<Option<C::Item>> {
        decode_optional(buf, &self.inner)
    }

    fn encoded_len(&self, val: &Option<C::Item>) -> Option<usize> {
        match val {
            Some(inner) => self.inner.encoded_len(inner).map(|n| n + 4),
            None => Some(4),
        }
    }
}
