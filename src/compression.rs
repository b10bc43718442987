//! Pluggable compression backend.
//!
//! Defines the `Compressor` trait used by the envelope codec, along with the
//! built-in pass-through and LZ4 implementations. The envelope's one-byte tag
//! records only *whether* the payload was compressed; producer and consumer
//! must agree on the algorithm itself, which is why the compressor is passed
//! in explicitly wherever an envelope is encoded or decoded.

use crate::error::{LazywrapError, Result};
use std::borrow::Cow;

/// Interface for compression algorithms.
///
/// Implementors provide the logic to compress and decompress byte buffers.
/// Implementations must be deterministic inverses of each other:
/// `decompress(compress(data)) == data` for all inputs.
pub trait Compressor: Send + Sync + std::fmt::Debug {
    /// Compresses the data.
    ///
    /// Returns a `Cow<[u8]>` which may borrow the input if no transformation
    /// is performed.
    fn compress<'a>(&self, data: &'a [u8]) -> Result<Cow<'a, [u8]>>;

    /// Decompresses the data.
    ///
    /// Returns a `Cow<[u8]>` containing the original bytes.
    fn decompress<'a>(&self, data: &'a [u8]) -> Result<Cow<'a, [u8]>>;
}

/// A compressor that performs no compression (pass-through).
///
/// Useful when the envelope's compressed path must stay functional without a
/// real algorithm available, and as a test stand-in.
#[derive(Debug, Clone, Copy)]
pub struct NoCompression;

impl Compressor for NoCompression {
    fn compress<'a>(&self, data: &'a [u8]) -> Result<Cow<'a, [u8]>> {
        // Zero-copy: return reference to input
        Ok(Cow::Borrowed(data))
    }

    fn decompress<'a>(&self, data: &'a [u8]) -> Result<Cow<'a, [u8]>> {
        Ok(Cow::Borrowed(data))
    }
}

/// A compressor using the LZ4 algorithm.
///
/// Available when the `lz4_flex` feature is enabled (the default). The payload
/// format is `lz4_flex`'s size-prepended block format, so the compressed
/// buffer is self-contained.
#[cfg(feature = "lz4_flex")]
#[derive(Debug, Clone, Copy)]
pub struct Lz4Compressor;

#[cfg(feature = "lz4_flex")]
impl Compressor for Lz4Compressor {
    fn compress<'a>(&self, data: &'a [u8]) -> Result<Cow<'a, [u8]>> {
        let compressed = lz4_flex::compress_prepend_size(data);
        Ok(Cow::Owned(compressed))
    }

    fn decompress<'a>(&self, data: &'a [u8]) -> Result<Cow<'a, [u8]>> {
        let vec = lz4_flex::decompress_size_prepended(data)
            .map_err(|e| LazywrapError::Compression(e.to_string()))?;
        Ok(Cow::Owned(vec))
    }
}

/// Returns the default compressor for this build.
///
/// LZ4 when the `lz4_flex` feature is enabled, otherwise pass-through.
pub fn default_compressor() -> Box<dyn Compressor> {
    #[cfg(feature = "lz4_flex")]
    {
        Box::new(Lz4Compressor)
    }
    #[cfg(not(feature = "lz4_flex"))]
    {
        Box::new(NoCompression)
    }
}
