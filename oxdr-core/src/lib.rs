//! # OXDR Core
//!
//! Composable codec framework for External Data Representation (RFC 4506).
//!
//! This crate provides:
//! - [`XdrBuffer`] - a big-endian cursor buffer with bounds checking and
//!   the 4-byte alignment operations every variable payload requires
//! - Primitive codecs for int, bool, hyper, float and double
//! - Combinators for opaque byte blocks, strings, arrays, optional values
//!   and discriminated unions
//! - The [`Codec`] trait that makes all of the above recursively composable
//!   (a union of arrays of optional strings is just nesting)
//!
//! Codec values are immutable configuration; buffers carry the per-call
//! cursor state.

pub mod array;
pub mod buffer;
pub mod codec;
pub mod error;
pub mod opaque;
pub mod optional;
pub mod primitive;
pub mod string;
pub mod union;

pub use array::{ArrayCodec, VarArrayCodec};
pub use buffer::{BufferPool, XdrBuffer};
pub use codec::Codec;
pub use error::{Error, Result};
pub use opaque::{OpaqueCodec, VarOpaqueCodec};
pub use optional::OptionalCodec;
pub use primitive::{
    BOOL, BoolCodec, DOUBLE, DoubleCodec, EnumCodec, FLOAT, FloatCodec, HYPER, HyperCodec, INT,
    IntCodec, VOID, VoidCodec,
};
pub use string::{STRING, StringCodec};
pub use union::{UnionCodec, UnionValue};
