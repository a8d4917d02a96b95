//! Fixed-size and variable-size homogeneous array codecs.
//!
//! Array codecs compose over any element codec: elements are transferred
//! sequentially with no per-element framing. Alignment is the element
//! codec's own responsibility, so an array of ints adds no padding while an
//! array of strings pads inside each element.

use crate::buffer::XdrBuffer;
use crate::codec::Codec;
use crate::error::{Error, Result};
use crate::opaque::MAX_WIRE_LEN;

/// Codec for `T ident[n]`: exactly `size` elements, no length prefix.
#[derive(Debug, Clone, Copy)]
pub struct ArrayCodec<C> {
    elem: C,
    size: usize,
}

impl<C> ArrayCodec<C> {
    /// Creates a codec transferring exactly `size` elements with `elem`.
    #[must_use]
    pub const fn new(elem: C, size: usize) -> Self {
        Self { elem, size }
    }

    /// Returns the configured element count.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }
}

impl<C: Codec> Codec for ArrayCodec<C> {
    type Item = Vec<C::Item>;

    fn encode(&self, buf: &mut XdrBuffer, val: &Vec<C::Item>) -> Result<()> {
        if val.len() != self.size {
            return Err(Error::LengthMismatch {
                expected: self.size,
                actual: val.len(),
            });
        }
        for elem in val {
            self.elem.encode(buf, elem)?;
        }
        Ok(())
    }

    fn decode(&self, buf: &mut XdrBuffer) -> Result<Vec<C::Item>> {
        let mut out = Vec::with_capacity(self.size);
        for _ in 0..self.size {
            out.push(self.elem.decode(buf)?);
        }
        Ok(out)
    }

    fn encoded_len(&self, val: &Vec<C::Item>) -> Option<usize> {
        val.iter()
            .map(|elem| self.elem.encoded_len(elem))
            .sum::<Option<usize>>()
    }
}

/// Codec for `T ident<m>`: a 4-byte element-count prefix followed by the
/// elements in sequence.
#[derive(Debug, Clone, Copy)]
pub struct VarArrayCodec<C> {
    elem: C,
    maxsize: usize,
}

impl<C> VarArrayCodec<C> {
    /// Creates a codec accepting at most `maxsize` elements.
    #[must_use]
    pub const fn new(elem: C, maxsize: usize) -> Self {
        Self { elem, maxsize }
    }

    /// Creates a codec bounded only by what the wire can represent.
    #[must_use]
    pub const fn unbounded(elem: C) -> Self {
        Self {
            elem,
            maxsize: MAX_WIRE_LEN,
        }
    }

    /// Returns the configured maximum element count.
    #[must_use]
    pub const fn maxsize(&self) -> usize {
        self.maxsize
    }
}

impl<C: Codec> Codec for VarArrayCodec<C> {
    type Item = Vec<C::Item>;

    fn encode(&self, buf: &mut XdrBuffer, val: &Vec<C::Item>) -> Result<()> {
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
        for elem in val {
            self.elem.encode(buf, elem)?;
        }
        Ok(())
    }

    fn decode(&self, buf: &mut XdrBuffer) -> Result<Vec<C::Item>> {
        let len = buf.get_u32()? as usize;
        if len > self.maxsize {
            return Err(Error::MaxSizeExceeded {
                length: len,
                max: self.maxsize,
            });
        }
        // Capacity is clamped so a hostile prefix cannot force a huge
        // allocation before element decoding fails on underflow.
        let mut out = Vec::with_capacity(len.min(buf.remaining()));
        for _ in 0..len {
            out.push(self.elem.decode(buf)?);
        }
        Ok(out)
    }

    fn encoded_len(&self, val: &Vec<C::Item>) -> Option<usize> {
        val.iter()
            .map(|elem| self.elem.encoded_len(elem))
            .sum::<Option<usize>>()
            .map(|n| n + 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{HYPER, INT};
    use crate::string::STRING;

    #[test]
    fn test_var_array_wire_bytes() {
        let codec = VarArrayCodec::unbounded(INT);
        let mut buf = XdrBuffer::allocate(12);
        codec.encode(&mut buf, &vec![5, -5]).unwrap();
        assert_eq!(
            buf.as_slice(),
            &[0, 0, 0, 2, 0, 0, 0, 5, 0xFF, 0xFF, 0xFF, 0xFB]
        );
        buf.flip();
        assert_eq!(codec.decode(&mut buf).unwrap(), vec![5, -5]);
    }

    #[test]
    fn test_fixed_array_no_prefix() {
        let codec = ArrayCodec::new(INT, 3);
        let mut buf = XdrBuffer::allocate(12);
        codec.encode(&mut buf, &vec![1, 2, 3]).unwrap();
        assert_eq!(buf.position(), 12);
        buf.flip();
        assert_eq!(codec.decode(&mut buf).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_fixed_array_length_mismatch() {
        let codec = ArrayCodec::new(INT, 2);
        for len in [0usize, 1, 3, 7] {
            let mut buf = XdrBuffer::allocate(64);
            assert_eq!(
                codec.encode(&mut buf, &vec![0i32; len]).unwrap_err(),
                Error::LengthMismatch {
                    expected: 2,
                    actual: len,
                },
                "len {len}"
            );
        }
    }

    #[test]
    fn test_var_array_encode_bound() {
        let codec = VarArrayCodec::new(INT, 2);
        let mut buf = XdrBuffer::allocate(64);
        assert_eq!(
            codec.encode(&mut buf, &vec![0i32; 3]).unwrap_err(),
            Error::MaxSizeExceeded { length: 3, max: 2 }
        );
    }

    #[test]
    fn test_var_array_decode_bound() {
        let codec = VarArrayCodec::new(INT, 2);
        let mut buf = XdrBuffer::wrap(vec![0, 0, 0, 3, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 3]);
        assert_eq!(
            codec.decode(&mut buf).unwrap_err(),
            Error::MaxSizeExceeded { length: 3, max: 2 }
        );
    }

    #[test]
    fn test_var_array_hostile_prefix_underflows() {
        let codec = VarArrayCodec::unbounded(INT);
        let mut buf = XdrBuffer::wrap(vec![0x7F, 0xFF, 0xFF, 0xFF]);
        assert!(matches!(
            codec.decode(&mut buf).unwrap_err(),
            Error::Underflow { .. }
        ));
    }

    #[test]
    fn test_array_of_strings_pads_per_element() {
        let codec = VarArrayCodec::unbounded(STRING);
        let val = vec!["ab".to_string(), "xyz".to_string()];
        let mut buf = XdrBuffer::allocate(32);
        codec.encode(&mut buf, &val).unwrap();
        // 4 prefix + (4 + 4) + (4 + 4)
        assert_eq!(buf.position(), 20);
        buf.flip();
        assert_eq!(codec.decode(&mut buf).unwrap(), val);
    }

    #[test]
    fn test_nested_arrays() {
        let codec = VarArrayCodec::unbounded(ArrayCodec::new(HYPER, 2));
        let val = vec![vec![1i64, 2], vec![-3, -4]];
        let mut buf = XdrBuffer::allocate(64);
        codec.encode(&mut buf, &val).unwrap();
        buf.flip();
        assert_eq!(codec.decode(&mut buf).unwrap(), val);
    }

    #[test]
    fn test_array_encoded_len() {
        let fixed = ArrayCodec::new(INT, 2);
        assert_eq!(fixed.encoded_len(&vec![1, 2]), Some(8));
        let var = VarArrayCodec::unbounded(HYPER);
        assert_eq!(var.encoded_len(&vec![1, 2, 3]), Some(28));
    }

    #[test]
    fn test_empty_var_array() {
        let codec = VarArrayCodec::unbounded(INT);
        let mut buf = XdrBuffer::allocate(4);
        codec.encode(&mut buf, &Vec::new()).unwrap();
        assert_eq!(buf.as_slice(), &[0, 0, 0, 0]);
        buf.flip();
        assert!(codec.decode(&mut buf).unwrap().is_empty());
    }
}
