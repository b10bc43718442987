//! Generic single-channel lazy value wrapper.
//!
//! [`LazyValueWrapper`] holds one opaque value. On the producing side the
//! value lives in memory; just before the wrapper crosses a transfer boundary
//! the surrounding transfer mechanism calls [`LazyValueWrapper::to_bytes`] to
//! obtain the encoded form, and only those bytes travel. On the receiving
//! side the first [`LazyValueWrapper::get`] decodes the bytes exactly once
//! and caches the result.
//!
//! Unlike the dual-channel wrapper, encoding here is *deferred* to the
//! transfer boundary rather than performed eagerly on `set`. The single
//! channel needs no configuration at encode time, so there is nothing gained
//! by paying the encode cost on every mutation.
//!
//! ## Examples
//!
//! ```rust
//! use lazywrap::LazyValueWrapper;
//!
//! // Producing side.
//! let mut wrapper = LazyValueWrapper::new(vec![1u32, 2, 3]);
//! let bytes = wrapper.to_bytes()?.to_vec();
//!
//! // Receiving side: only the bytes arrived.
//! let mut received: LazyValueWrapper<Vec<u32>> = LazyValueWrapper::from_bytes(bytes);
//! assert_eq!(received.get()?, &[1, 2, 3]);
//! # Ok::<(), lazywrap::LazywrapError>(())
//! ```

use crate::error::{LazywrapError, Result};
use crate::fast::FastCodec;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A lazily encoded, lazily materialized single-value wrapper.
///
/// The live value never crosses a transfer boundary; serializing the wrapper
/// moves only the cached encoded bytes. The transfer mechanism must call
/// [`LazyValueWrapper::to_bytes`] before serializing, since encoding is
/// deferred until then.
///
/// Methods take `&mut self`; safe Rust therefore rules out concurrent first
/// access on a shared instance, which is the wrapper's concurrency contract.
#[derive(Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct LazyValueWrapper<V> {
    #[serde(skip)]
    live: Option<V>,
    /// Encoded form of the live value. Empty means "not yet encoded".
    encoded: Vec<u8>,
}

impl<V: Serialize + DeserializeOwned> LazyValueWrapper<V> {
    /// Wraps a live value. Encoding is deferred to [`LazyValueWrapper::to_bytes`].
    pub fn new(value: V) -> Self {
        Self {
            live: Some(value),
            encoded: Vec::new(),
        }
    }

    /// Reconstructs a wrapper from transferred bytes.
    ///
    /// The live value stays absent until the first [`LazyValueWrapper::get`].
    pub fn from_bytes(encoded: Vec<u8>) -> Self {
        Self {
            live: None,
            encoded,
        }
    }

    /// Returns the live value, materializing it from the encoded bytes on
    /// first access after a transfer.
    ///
    /// Idempotent after the first call: the decoded value is cached and the
    /// decode routine never runs again for this instance.
    ///
    /// # Errors
    /// [`LazywrapError::InconsistentState`] if neither a live value nor
    /// encoded bytes are present (the wrapper was used outside its lifecycle);
    /// [`LazywrapError::Codec`] if decoding fails.
    pub fn get(&mut self) -> Result<&V> {
        if self.live.is_none() {
            if self.encoded.is_empty() {
                return Err(LazywrapError::InconsistentState(
                    "no live value and no encoded bytes to materialize from".to_string(),
                ));
            }
            self.live = Some(FastCodec::decode(&self.encoded)?);
        }

        // The branch above guarantees presence.
        self.live.as_ref().ok_or_else(|| {
            LazywrapError::InconsistentState("live value vanished after decode".to_string())
        })
    }

    /// Stores a new live value.
    ///
    /// Stale encoded bytes from a previous value are discarded; the next
    /// [`LazyValueWrapper::to_bytes`] re-encodes from the new value.
    pub fn set(&mut self, value: V) {
        self.live = Some(value);
        self.encoded.clear();
    }

    /// Encodes the live value, caches the bytes, and returns them.
    ///
    /// Called by the surrounding transfer mechanism just before the wrapper
    /// crosses a boundary. When no live value is present (the wrapper itself
    /// was received from elsewhere), the cached bytes are returned as-is.
    ///
    /// # Errors
    /// [`LazywrapError::InconsistentState`] if there is nothing to encode and
    /// no cached bytes either.
    pub fn to_bytes(&mut self) -> Result<&[u8]> {
        if let Some(value) = &self.live {
            self.encoded = FastCodec::encode(value)?;
        } else if self.encoded.is_empty() {
            return Err(LazywrapError::InconsistentState(
                "no live value and no encoded bytes to transfer".to_string(),
            ));
        }
        Ok(&self.encoded)
    }

    /// Returns true if the live value is currently materialized.
    pub fn is_materialized(&self) -> bool {
        self.live.is_some()
    }
}
