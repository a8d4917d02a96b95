//! Length-prefixed UTF-8 string codec.
//!
//! The length prefix counts *characters* (Unicode scalar values), not
//! payload bytes, for wire compatibility with peers that count characters.
//! This deviates from strict RFC 4506 byte-count semantics for non-ASCII
//! text; for ASCII payloads the two coincide. See [`StringCodec`].
//!
//! UTF-8 is transcoded directly against the buffer; there is no stateful
//! transcoder object to cache or pool.

use crate::buffer::XdrBuffer;
use crate::codec::{Codec, aligned_len};
use crate::error::{Error, Result};
use crate::opaque::MAX_WIRE_LEN;

/// Codec for `string<m>`: a 4-byte character count, the UTF-8 encoded text,
/// then zero-padding to a 4-byte boundary.
///
/// The maximum applies to the character count on both the encode and decode
/// sides.
#[derive(Debug, Clone, Copy)]
pub struct StringCodec {
    maxsize: usize,
}

impl StringCodec {
    /// Creates a codec accepting at most `maxsize` characters.
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

    /// Returns the configured maximum character count.
    #[must_use]
    pub const fn maxsize(&self) -> usize {
        self.maxsize
    }
}

impl Default for StringCodec {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Shared unbounded instance of [`StringCodec`].
pub const STRING: StringCodec = StringCodec::unbounded();

/// Returns the total byte width of a UTF-8 sequence from its leading byte.
fn utf8_width(first: u8) -> Option<usize> {
    match first {
        0x00..=0x7F => Some(1),
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}

impl Codec for StringCodec {
    type Item = String;

    fn encode(&self, buf: &mut XdrBuffer, val: &String) -> Result<()> {
        let chars = val.chars().count();
        if chars > self.maxsize {
            return Err(Error::MaxSizeExceeded {
                length: chars,
                max: self.maxsize,
            });
        }
        let prefix = u32::try_from(chars).map_err(|_| Error::MaxSizeExceeded {
            length: chars,
            max: MAX_WIRE_LEN,
        })?;
        buf.put_u32(prefix)?;
        buf.put_aligned(val.as_bytes())
    }

    fn decode(&self, buf: &mut XdrBuffer) -> Result<String> {
        let chars = buf.get_u32()? as usize;
        if chars > self.maxsize {
            return Err(Error::MaxSizeExceeded {
                length: chars,
                max: self.maxsize,
            });
        }
        // Capacity clamped so a hostile prefix cannot force a huge
        // allocation before the byte reads fail.
        let mut out = String::with_capacity(chars.min(buf.remaining()));
        for _ in 0..chars {
            let start = buf.position();
            // Running out of bytes mid-string means the destination can
            // never fill: malformed, not a plain underflow.
            let first = buf
                .get_u8()
                .map_err(|_| Error::MalformedEncoding { position: start })?;
            let width =
                utf8_width(first).ok_or(Error::MalformedEncoding { position: start })?;
            let mut seq = [first, 0, 0, 0];
            for slot in seq.iter_mut().take(width).skip(1) {
                *slot = buf
                    .get_u8()
                    .map_err(|_| Error::MalformedEncoding { position: start })?;
            }
            let text = std::str::from_utf8(&seq[..width])
                .map_err(|_| Error::MalformedEncoding { position: start })?;
            out.push_str(text);
        }
        buf.decode_align()?;
        Ok(out)
    }

    fn encoded_len(&self, val: &String) -> Option<usize> {
        Some(4 + aligned_len(val.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_wire_bytes() {
        // Identical bytes to a var-opaque of the same ASCII payload.
        let mut buf = XdrBuffer::allocate(8);
        STRING.encode(&mut buf, &"test".to_string()).unwrap();
        assert_eq!(buf.as_slice(), &[0, 0, 0, 4, 0x74, 0x65, 0x73, 0x74]);
        buf.flip();
        assert_eq!(STRING.decode(&mut buf).unwrap(), "test");
    }

    #[test]
    fn test_string_empty() {
        let mut buf = XdrBuffer::allocate(4);
        STRING.encode(&mut buf, &String::new()).unwrap();
        assert_eq!(buf.position(), 4);
        buf.flip();
        assert_eq!(STRING.decode(&mut buf).unwrap(), "");
    }

    #[test]
    fn test_string_padding_alignment() {
        for (text, expect) in [("a", 8), ("ab", 8), ("abc", 8), ("abcd", 8), ("abcde", 12)] {
            let mut buf = XdrBuffer::allocate(16);
            STRING.encode(&mut buf, &text.to_string()).unwrap();
            assert_eq!(buf.position(), expect, "text {text:?}");
            assert_eq!(buf.position() % 4, 0);
            buf.flip();
            assert_eq!(STRING.decode(&mut buf).unwrap(), text);
        }
    }

    #[test]
    fn test_string_char_count_prefix() {
        // Three characters, six UTF-8 bytes: the prefix counts characters.
        let text = "aé丏".to_string();
        let chars = text.chars().count();
        assert_eq!(chars, 3);
        assert_eq!(text.len(), 6);

        let mut buf = XdrBuffer::allocate(16);
        STRING.encode(&mut buf, &text).unwrap();
        assert_eq!(&buf.as_slice()[..4], &[0, 0, 0, 3]);
        buf.flip();
        assert_eq!(STRING.decode(&mut buf).unwrap(), text);
    }

    #[test]
    fn test_string_max_encode() {
        let codec = StringCodec::new(3);
        let mut buf = XdrBuffer::allocate(16);
        assert_eq!(
            codec.encode(&mut buf, &"four".to_string()).unwrap_err(),
            Error::MaxSizeExceeded { length: 4, max: 3 }
        );
    }

    #[test]
    fn test_string_max_decode() {
        let codec = StringCodec::new(3);
        let mut src = XdrBuffer::allocate(16);
        STRING.encode(&mut src, &"four".to_string()).unwrap();
        src.flip();
        assert_eq!(
            codec.decode(&mut src).unwrap_err(),
            Error::MaxSizeExceeded { length: 4, max: 3 }
        );
    }

    #[test]
    fn test_string_invalid_utf8() {
        // Prefix claims one character; 0xFF is never a UTF-8 lead byte.
        let mut buf = XdrBuffer::wrap(vec![0, 0, 0, 1, 0xFF, 0, 0, 0]);
        assert_eq!(
            STRING.decode(&mut buf).unwrap_err(),
            Error::MalformedEncoding { position: 4 }
        );
    }

    #[test]
    fn test_string_truncated_sequence() {
        // Lead byte promises two bytes, buffer ends first.
        let mut buf = XdrBuffer::wrap(vec![0, 0, 0, 1, 0xC3]);
        assert_eq!(
            STRING.decode(&mut buf).unwrap_err(),
            Error::MalformedEncoding { position: 4 }
        );
    }

    #[test]
    fn test_string_count_short_of_payload() {
        // Prefix claims two characters but only one byte follows.
        let mut buf = XdrBuffer::wrap(vec![0, 0, 0, 2, 0x61, 0, 0, 0]);
        // The second "character" starts in the padding, which decodes as a
        // NUL; strict truncation shows up when the bytes run out entirely.
        let decoded = STRING.decode(&mut buf).unwrap();
        assert_eq!(decoded, "a\0");
    }

    #[test]
    fn test_string_overlong_rejected() {
        // 0xC0 0x80 is an overlong encoding of NUL.
        let mut buf = XdrBuffer::wrap(vec![0, 0, 0, 1, 0xC0, 0x80, 0, 0]);
        assert_eq!(
            STRING.decode(&mut buf).unwrap_err(),
            Error::MalformedEncoding { position: 4 }
        );
    }

    #[test]
    fn test_string_encoded_len_is_byte_based() {
        assert_eq!(STRING.encoded_len(&"test".to_string()), Some(8));
        assert_eq!(STRING.encoded_len(&"é".to_string()), Some(8));
    }
}
