//! Adapter over the fast binary codec (bincode).
//!
//! Used for the performance-sensitive channel of a wrapper. The adapter is
//! stateless and reentrant: a fresh codec configuration is created per call,
//! so concurrent encodes can never observe each other's state.

use crate::error::{LazywrapError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Stateless entry point for fast binary encoding and decoding.
#[derive(Debug)]
pub struct FastCodec;

impl FastCodec {
    /// Serializes a value to a compact byte buffer.
    ///
    /// # Errors
    /// Returns [`LazywrapError::Codec`] if bincode cannot represent the value.
    pub fn encode<V: Serialize>(value: &V) -> Result<Vec<u8>> {
        bincode::serde::encode_to_vec(value, bincode::config::standard())
            .map_err(|e| LazywrapError::Codec(e.to_string()))
    }

    /// Deserializes a value from a buffer produced by [`FastCodec::encode`].
    ///
    /// # Errors
    /// Returns [`LazywrapError::Codec`] on malformed or type-mismatched input.
    pub fn decode<V: DeserializeOwned>(bytes: &[u8]) -> Result<V> {
        bincode::serde::decode_from_slice(bytes, bincode::config::standard())
            .map(|(value, _)| value)
            .map_err(|e| LazywrapError::Codec(e.to_string()))
    }
}
