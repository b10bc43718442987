//! Self-describing compressed envelope framing.
//!
//! Every buffer produced by the structural codec travels inside an envelope
//! whose first byte records whether the payload is compressed:
//!
//! ```text
//! byte 0       : tag  (0 = raw, 1 = compressed)
//! bytes 1..end : payload (compressor-specific format if tag=1, else raw codec bytes)
//! ```
//!
//! The tag makes the framing self-describing: a decoder never needs to know,
//! out-of-band, whether the producer's configuration had compression enabled.
//! This matters because producer and consumer may run with different
//! configuration snapshots.
//!
//! Envelopes are constructed fresh on every encode call and are never cached
//! independently of the wrapper that owns the framed bytes.

use crate::compression::Compressor;
use crate::error::{LazywrapError, Result};

/// Tag byte marking an uncompressed payload.
pub const RAW_TAG: u8 = 0;

/// Tag byte marking a compressed payload.
pub const COMPRESSED_TAG: u8 = 1;

/// Frames `raw` into an envelope, compressing the payload when requested.
///
/// The output is exactly `1 + payload.len()` bytes: the tag byte followed by
/// the (possibly compressed) payload. When `use_compression` is false the
/// payload is `raw` unmodified.
pub fn encode(raw: &[u8], use_compression: bool, compressor: &dyn Compressor) -> Result<Vec<u8>> {
    if use_compression {
        let payload = compressor.compress(raw)?;
        let mut framed = Vec::with_capacity(1 + payload.len());
        framed.push(COMPRESSED_TAG);
        framed.extend_from_slice(&payload);
        Ok(framed)
    } else {
        let mut framed = Vec::with_capacity(1 + raw.len());
        framed.push(RAW_TAG);
        framed.extend_from_slice(raw);
        Ok(framed)
    }
}

/// Unframes an envelope, reversing compression according to the tag byte.
///
/// # Errors
/// Returns [`LazywrapError::MalformedEnvelope`] if `framed` is empty or its
/// tag byte is neither [`RAW_TAG`] nor [`COMPRESSED_TAG`]. Decoding without
/// inspecting the tag is a contract violation; this function is the only
/// supported way to open an envelope.
pub fn decode(framed: &[u8], compressor: &dyn Compressor) -> Result<Vec<u8>> {
    let (&tag, payload) = framed.split_first().ok_or_else(|| {
        LazywrapError::MalformedEnvelope("empty buffer: missing tag byte".into())
    })?;

    match tag {
        RAW_TAG => Ok(payload.to_vec()),
        COMPRESSED_TAG => Ok(compressor.decompress(payload)?.into_owned()),
        other => Err(LazywrapError::MalformedEnvelope(format!(
            "unrecognized tag byte: {other}"
        ))),
    }
}
