//! # OXDR
//!
//! External Data Representation (RFC 4506) serialization for Rust.
//!
//! XDR is the canonical, big-endian, 4-byte-aligned wire encoding used by
//! ONC RPC, NFS and friends. OXDR provides the codec framework: primitive
//! encode/decode routines plus combinators that build codecs for arrays,
//! byte blocks, strings, optional values and tagged unions out of simpler
//! codecs. Codecs are hand-composed; there is no IDL compiler, transport or
//! RPC framing here.
//!
//! ## Quick Start
//!
//! ```
//! use oxdr::prelude::*;
//!
//! let codec = VarArrayCodec::unbounded(INT);
//! let mut buf = XdrBuffer::allocate(64);
//! codec.encode(&mut buf, &vec![5, -5]).unwrap();
//! buf.flip();
//! assert_eq!(codec.decode(&mut buf).unwrap(), vec![5, -5]);
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - buffer, primitive codecs, combinators, error types

pub mod prelude;

/// Core codec framework.
pub mod core {
    pub use oxdr_core::*;
}

// Re-export commonly used items at the crate root
pub use oxdr_core::{
    array::{ArrayCodec, VarArrayCodec},
    buffer::{BufferPool, XdrBuffer},
    codec::Codec,
    error::{Error, Result},
    opaque::{OpaqueCodec, VarOpaqueCodec},
    optional::OptionalCodec,
    string::StringCodec,
    union::{UnionCodec, UnionValue},
};
