//! Decodes an XDR-encoded string list from a file on disk.
//!
//! The file is expected to hold an optional-data linked list of strings:
//! each entry is `string item; *next`. Produce one with any RFC 4506
//! encoder, then run:
//!
//! `cargo run --example decode_file -- path/to/list.xdr`

use anyhow::{Context, bail};
use oxdr::prelude::*;
use tracing::info;

/// Singly linked list of strings.
struct StringEntry {
    item: String,
    next: Option<Box<StringEntry>>,
}

struct StringEntryCodec;

impl Codec for StringEntryCodec {
    type Item = StringEntry;

    fn encode(&self, buf: &mut XdrBuffer, val: &StringEntry) -> Result<()> {
        STRING.encode(buf, &val.item)?;
        encode_optional(buf, val.next.as_deref(), self)
    }

    fn decode(&self, buf: &mut XdrBuffer) -> Result<StringEntry> {
        let item = STRING.decode(buf)?;
        let next = decode_optional(buf, self)?.map(Box::new);
        Ok(StringEntry { item, next })
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: decode_file <path>");
    };

    let bytes = std::fs::read(&path).with_context(|| format!("reading {path}"))?;
    info!(path, len = bytes.len(), "read XDR payload");

    let mut buf = XdrBuffer::wrap(bytes);
    let head =
        decode_optional(&mut buf, &StringEntryCodec).context("decoding string list")?;

    let mut entry = head;
    let mut index = 0usize;
    while let Some(node) = entry {
        info!(index, item = %node.item, "entry");
        entry = node.next.map(|boxed| *boxed);
        index += 1;
    }
    info!(entries = index, "done");
    Ok(())
}
