//! Prelude module for convenient imports.
//!
//! ```
//! use oxdr::prelude::*;
//! ```

pub use oxdr_core::array::{ArrayCodec, VarArrayCodec};
pub use oxdr_core::buffer::{BufferPool, XdrBuffer};
pub use oxdr_core::codec::Codec;
pub use oxdr_core::error::{Error, Result};
pub use oxdr_core::opaque::{OpaqueCodec, VarOpaqueCodec};
pub use oxdr_core::optional::{OptionalCodec, decode_optional, encode_optional};
pub use oxdr_core::primitive::{
    BOOL, BoolCodec, DOUBLE, DoubleCodec, EnumCodec, FLOAT, FloatCodec, HYPER, HyperCodec, INT,
    IntCodec, VOID, VoidCodec,
};
pub use oxdr_core::string::{STRING, StringCodec};
pub use oxdr_core::union::{UnionBuilder, UnionCodec, UnionValue};
