//! Integer-discriminated tagged union codec.
//!
//! A union codec pairs a 4-byte discriminant with a payload codec chosen
//! from a case table, with an optional default for unmatched discriminants.
//! All case codecs of one union share a payload type `T` (typically an enum
//! the caller defines); heterogeneous wire shapes are expressed by giving
//! each case its own codec into that type.

use crate::buffer::XdrBuffer;
use crate::codec::Codec;
use crate::error::{Error, Result};
use crate::primitive::IntCodec;
use std::collections::BTreeMap;

type CaseCodec<T> = Box<dyn Codec<Item = T> + Send + Sync>;

/// A decoded union: the discriminant together with the payload its case
/// codec produced.
///
/// The pairing is only meaningful when the discriminant is a key of the
/// union's case table or the union carries a default codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionValue<T> {
    /// The 4-byte case selector.
    pub discriminant: i32,
    /// The payload for that case.
    pub value: T,
}

impl<T> UnionValue<T> {
    /// Pairs a discriminant with its payload.
    #[must_use]
    pub const fn new(discriminant: i32, value: T) -> Self {
        Self {
            discriminant,
            value,
        }
    }
}

/// Codec for an XDR discriminated union.
///
/// Built once via [`UnionCodec::builder`] and immutable afterwards; the
/// case table cannot be changed at runtime.
pub struct UnionCodec<T> {
    discriminant: Box<dyn Codec<Item = i32> + Send + Sync>,
    cases: BTreeMap<i32, CaseCodec<T>>,
    default: Option<CaseCodec<T>>,
}

impl<T> UnionCodec<T> {
    /// Starts building a union codec.
    #[must_use]
    pub fn builder() -> UnionBuilder<T> {
        UnionBuilder {
            discriminant: Box::new(IntCodec),
            cases: BTreeMap::new(),
            default: None,
        }
    }

    fn resolve(&self, discriminant: i32) -> Result<&CaseCodec<T>> {
        match self.cases.get(&discriminant) {
            Some(codec) => Ok(codec),
            None => self
                .default
                .as_ref()
                .ok_or(Error::UnknownDiscriminant { discriminant }),
        }
    }
}

impl<T> Codec for UnionCodec<T> {
    type Item = UnionValue<T>;

    fn encode(&self, buf: &mut XdrBuffer, val: &UnionValue<T>) -> Result<()> {
        let codec = self.resolve(val.discriminant)?;
        self.discriminant.encode(buf, &val.discriminant)?;
        codec.encode(buf, &val.value)
    }

    fn decode(&self, buf: &mut XdrBuffer) -> Result<UnionValue<T>> {
        let discriminant = self.discriminant.decode(buf)?;
        let codec = self.resolve(discriminant)?;
        let value = codec.decode(buf)?;
        Ok(UnionValue::new(discriminant, value))
    }

    fn encoded_len(&self, val: &UnionValue<T>) -> Option<usize> {
        let codec = self.resolve(val.discriminant).ok()?;
        codec.encoded_len(&val.value).map(|n| n + 4)
    }
}

impl<T> std::fmt::Debug for UnionCodec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnionCodec")
            .field("cases", &self.cases.keys().collect::<Vec<_>>())
            .field("has_default", &self.default.is_some())
            .finish()
    }
}

/// Builder for [`UnionCodec`].
pub struct UnionBuilder<T> {
    discriminant: Box<dyn Codec<Item = i32> + Send + Sync>,
    cases: BTreeMap<i32, CaseCodec<T>>,
    default: Option<CaseCodec<T>>,
}

impl<T> UnionBuilder<T> {
    /// Adds a case codec for `discriminant`.
    ///
    /// # Panics
    /// Panics if the discriminant is already mapped. The case table is
    /// injective; redefinition is a construction-time contract violation,
    /// not a runtime condition.
    #[must_use]
    pub fn case(
        mut self,
        discriminant: i32,
        codec: impl Codec<Item = T> + Send + Sync + 'static,
    ) -> Self {
        let replaced = self.cases.insert(discriminant, Box::new(codec));
        assert!(
            replaced.is_none(),
            "duplicate union discriminant {discriminant}"
        );
        self
    }

    /// Sets the fallback codec for discriminants outside the case table.
    #[must_use]
    pub fn default_case(mut self, codec: impl Codec<Item = T> + Send + Sync + 'static) -> Self {
        self.default = Some(Box::new(codec));
        self
    }

    /// Replaces the discriminant codec ([`IntCodec`] by default).
    #[must_use]
    pub fn discriminant_codec(
        mut self,
        codec: impl Codec<Item = i32> + Send + Sync + 'static,
    ) -> Self {
        self.discriminant = Box::new(codec);
        self
    }

    /// Finishes the union codec.
    #[must_use]
    pub fn build(self) -> UnionCodec<T> {
        UnionCodec {
            discriminant: self.discriminant,
            cases: self.cases,
            default: self.default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{HYPER, INT};
    use crate::string::STRING;

    /// Payload type for a union of int and string cases.
    #[derive(Debug, Clone, PartialEq)]
    enum Scalar {
        Num(i32),
        Text(String),
    }

    struct NumCodec;

    impl Codec for NumCodec {
        type Item = Scalar;

        fn encode(&self, buf: &mut XdrBuffer, val: &Scalar) -> Result<()> {
            match val {
                Scalar::Num(n) => INT.encode(buf, n),
                Scalar::Text(_) => Err(Error::UnknownDiscriminant { discriminant: 0 }),
            }
        }

        fn decode(&self, buf: &mut XdrBuffer) -> Result<Scalar> {
            Ok(Scalar::Num(INT.decode(buf)?))
        }

        fn encoded_len(&self, _val: &Scalar) -> Option<usize> {
            Some(4)
        }
    }

    struct TextCodec;

    impl Codec for TextCodec {
        type Item = Scalar;

        fn encode(&self, buf: &mut XdrBuffer, val: &Scalar) -> Result<()> {
            match val {
                Scalar::Text(s) => STRING.encode(buf, s),
                Scalar::Num(_) => Err(Error::UnknownDiscriminant { discriminant: 1 }),
            }
        }

        fn decode(&self, buf: &mut XdrBuffer) -> Result<Scalar> {
            Ok(Scalar::Text(STRING.decode(buf)?))
        }
    }

    fn scalar_union() -> UnionCodec<Scalar> {
        UnionCodec::builder().case(0, NumCodec).case(1, TextCodec).build()
    }

    #[test]
    fn test_union_wire_bytes() {
        let codec = scalar_union();
        let mut buf = XdrBuffer::allocate(8);
        codec
            .encode(&mut buf, &UnionValue::new(0, Scalar::Num(9)))
            .unwrap();
        assert_eq!(buf.as_slice(), &[0, 0, 0, 0, 0, 0, 0, 9]);
        buf.flip();
        assert_eq!(
            codec.decode(&mut buf).unwrap(),
            UnionValue::new(0, Scalar::Num(9))
        );
    }

    #[test]
    fn test_union_heterogeneous_cases() {
        let codec = scalar_union();
        let mut buf = XdrBuffer::allocate(16);
        let val = UnionValue::new(1, Scalar::Text("ok".to_string()));
        codec.encode(&mut buf, &val).unwrap();
        buf.flip();
        assert_eq!(codec.decode(&mut buf).unwrap(), val);
    }

    #[test]
    fn test_union_unknown_discriminant_encode() {
        let codec = scalar_union();
        let mut buf = XdrBuffer::allocate(8);
        assert_eq!(
            codec
                .encode(&mut buf, &UnionValue::new(7, Scalar::Num(0)))
                .unwrap_err(),
            Error::UnknownDiscriminant { discriminant: 7 }
        );
    }

    #[test]
    fn test_union_unknown_discriminant_decode() {
        let codec = scalar_union();
        let mut buf = XdrBuffer::wrap(vec![0, 0, 0, 5, 0, 0, 0, 1]);
        assert_eq!(
            codec.decode(&mut buf).unwrap_err(),
            Error::UnknownDiscriminant { discriminant: 5 }
        );
    }

    #[test]
    fn test_union_default_case() {
        let codec = UnionCodec::builder().case(0, NumCodec).default_case(NumCodec).build();
        // Discriminant 42 is not in the table; the default decodes it.
        let mut buf = XdrBuffer::wrap(vec![0, 0, 0, 42, 0, 0, 0, 3]);
        assert_eq!(
            codec.decode(&mut buf).unwrap(),
            UnionValue::new(42, Scalar::Num(3))
        );
    }

    #[test]
    #[should_panic(expected = "duplicate union discriminant 0")]
    fn test_union_duplicate_case_panics() {
        let _ = UnionCodec::builder().case(0, NumCodec).case(0, TextCodec);
    }

    #[test]
    fn test_union_homogeneous_payload() {
        // When all cases share one wire shape the payload can be the plain
        // Rust type with no wrapper enum.
        let codec = UnionCodec::builder().case(1, HYPER).case(2, HYPER).build();
        let mut buf = XdrBuffer::allocate(12);
        codec
            .encode(&mut buf, &UnionValue::new(2, -1i64))
            .unwrap();
        buf.flip();
        assert_eq!(codec.decode(&mut buf).unwrap(), UnionValue::new(2, -1i64));
    }

    #[test]
    fn test_union_encoded_len() {
        let codec = scalar_union();
        assert_eq!(
            codec.encoded_len(&UnionValue::new(0, Scalar::Num(1))),
            Some(8)
        );
        assert_eq!(codec.encoded_len(&UnionValue::new(9, Scalar::Num(1))), None);
    }

    #[test]
    fn test_union_debug() {
        let codec = scalar_union();
        let s = format!("{codec:?}");
        assert!(s.contains("UnionCodec"));
        assert!(s.contains('0'));
    }
}
