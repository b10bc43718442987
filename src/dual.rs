//! Dual-channel lazy object wrapper.
//!
//! [`LazyDualWrapper`] carries a composite value whose two orthogonal parts
//! need different codecs: a *structural* part (a plan-like object graph) that
//! must go through the [`StructuralCodec`], and a *fast* part (hot,
//! performance-sensitive state) that must go through the binary
//! [`FastCodec`]. A single-channel wrapper cannot express that split; this
//! type owns it explicitly.
//!
//! The lifecycle contract:
//!
//! - [`LazyDualWrapper::set`] (and [`LazyDualWrapper::new`]) **eagerly**
//!   encodes both channels. The structural encode may depend on configuration
//!   that is only available at set-time, carried by the codec handle.
//! - Crossing a transfer boundary moves only the two byte buffers; the live
//!   value is never serialized.
//! - The first [`LazyDualWrapper::get`] after a transfer decodes both
//!   channels exactly once, reassembles the composite, and caches it. Every
//!   later `get` returns the cached value.
//!
//! ## Examples
//!
//! ```rust
//! use lazywrap::{DualParts, LazyDualWrapper, StructuralCodec};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Task {
//!     plan: String,
//!     row_batch: Vec<u8>,
//! }
//!
//! impl DualParts for Task {
//!     type Structural = String;
//!     type Fast = Vec<u8>;
//!
//!     fn structural(&self) -> &String { &self.plan }
//!     fn fast(&self) -> &Vec<u8> { &self.row_batch }
//!     fn assemble(plan: String, row_batch: Vec<u8>) -> Self {
//!         Self { plan, row_batch }
//!     }
//! }
//!
//! let codec = StructuralCodec::new();
//! let task = Task { plan: "scan>filter".into(), row_batch: vec![1, 2, 3] };
//!
//! // Producing side: set encodes both channels eagerly.
//! let wrapper = LazyDualWrapper::new(task, &codec)?;
//! let (structural, fast) = wrapper.into_bytes();
//!
//! // Receiving side: only bytes arrived; first get materializes.
//! let mut received: LazyDualWrapper<Task> = LazyDualWrapper::from_bytes(structural, fast);
//! assert_eq!(received.get(&codec)?.plan, "scan>filter");
//! # Ok::<(), lazywrap::LazywrapError>(())
//! ```

use crate::error::{LazywrapError, Result};
use crate::fast::FastCodec;
use crate::structural::StructuralCodec;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Contract for composite values with a structural and a fast sub-part.
///
/// The two accessors expose the sub-parts for encoding; `assemble` is their
/// inverse, reconstructing the composite from independently decoded parts.
/// `assemble(structural().clone(), fast().clone())` must be structurally
/// equal to the original value.
pub trait DualParts: Sized {
    /// The plan-like sub-part, encoded through the structural codec.
    type Structural: Serialize + DeserializeOwned + 'static;

    /// The performance-sensitive sub-part, encoded through the fast codec.
    type Fast: Serialize + DeserializeOwned;

    /// Borrows the structural sub-part.
    fn structural(&self) -> &Self::Structural;

    /// Borrows the fast sub-part.
    fn fast(&self) -> &Self::Fast;

    /// Reconstructs the composite from decoded sub-parts.
    fn assemble(structural: Self::Structural, fast: Self::Fast) -> Self;
}

/// A lazily materialized wrapper splitting its value across two encoded
/// channels.
///
/// Serializing the wrapper moves only `structural_bytes` and `fast_bytes`;
/// the live value is `#[serde(skip)]` and reappears on the receiving side via
/// the first [`LazyDualWrapper::get`].
///
/// Methods take `&mut self`; safe Rust therefore rules out concurrent first
/// access on a shared instance, which is the wrapper's concurrency contract.
/// Each instance exclusively owns its buffers and its live value.
#[derive(Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct LazyDualWrapper<T: DualParts> {
    #[serde(skip)]
    live: Option<T>,
    /// Encoded structural part. Never empty once a value has been set.
    structural_bytes: Vec<u8>,
    /// Encoded fast part. Never empty once a value has been set.
    fast_bytes: Vec<u8>,
}

impl<T: DualParts> LazyDualWrapper<T> {
    /// Wraps a live value, eagerly encoding both channels.
    ///
    /// # Errors
    /// [`LazywrapError::Codec`] if either channel cannot encode the
    /// corresponding sub-part; the wrapper is not constructed in that case.
    pub fn new(value: T, codec: &StructuralCodec) -> Result<Self> {
        let mut wrapper = Self {
            live: None,
            structural_bytes: Vec::new(),
            fast_bytes: Vec::new(),
        };
        wrapper.set(value, codec)?;
        Ok(wrapper)
    }

    /// Reconstructs a wrapper from transferred channel bytes.
    ///
    /// The live value stays absent until the first [`LazyDualWrapper::get`].
    /// Buffer contents are not validated here; an empty buffer surfaces as
    /// [`LazywrapError::InconsistentState`] at materialization time.
    pub fn from_bytes(structural_bytes: Vec<u8>, fast_bytes: Vec<u8>) -> Self {
        Self {
            live: None,
            structural_bytes,
            fast_bytes,
        }
    }

    /// Stores a new live value and eagerly re-encodes both channels.
    ///
    /// Both buffers are derived synchronously before the wrapper is mutated,
    /// so a failed encode leaves the previous state intact.
    pub fn set(&mut self, value: T, codec: &StructuralCodec) -> Result<()> {
        let structural_bytes = codec.encode(value.structural())?;
        let fast_bytes = FastCodec::encode(value.fast())?;

        self.live = Some(value);
        self.structural_bytes = structural_bytes;
        self.fast_bytes = fast_bytes;
        Ok(())
    }

    /// Returns the live value, materializing it from both channels on first
    /// access after a transfer.
    ///
    /// Decoding happens at most once per instance; the reassembled composite
    /// is cached for all subsequent calls.
    ///
    /// # Errors
    /// [`LazywrapError::InconsistentState`] if either byte buffer is empty
    /// when materialization is attempted. That is a lifecycle contract
    /// violation and is never silently recovered.
    pub fn get(&mut self, codec: &StructuralCodec) -> Result<&T> {
        if self.live.is_none() {
            if self.structural_bytes.is_empty() || self.fast_bytes.is_empty() {
                return Err(LazywrapError::InconsistentState(
                    "materialization attempted with an empty channel buffer".to_string(),
                ));
            }

            let structural: T::Structural = codec.decode(&self.structural_bytes)?;
            let fast: T::Fast = FastCodec::decode(&self.fast_bytes)?;
            self.live = Some(T::assemble(structural, fast));
        }

        // The branch above guarantees presence.
        self.live.as_ref().ok_or_else(|| {
            LazywrapError::InconsistentState("live value vanished after decode".to_string())
        })
    }

    /// Borrows the encoded structural channel.
    pub fn structural_bytes(&self) -> &[u8] {
        &self.structural_bytes
    }

    /// Borrows the encoded fast channel.
    pub fn fast_bytes(&self) -> &[u8] {
        &self.fast_bytes
    }

    /// Consumes the wrapper, yielding `(structural_bytes, fast_bytes)`.
    ///
    /// This is the transfer boundary: only these buffers travel.
    pub fn into_bytes(self) -> (Vec<u8>, Vec<u8>) {
        (self.structural_bytes, self.fast_bytes)
    }

    /// Returns true if the live value is currently materialized.
    pub fn is_materialized(&self) -> bool {
        self.live.is_some()
    }
}

impl<T: DualParts + fmt::Display> LazyDualWrapper<T> {
    /// Renders the live value's own description, forcing materialization if
    /// the wrapper has not been accessed since a transfer.
    pub fn describe(&mut self, codec: &StructuralCodec) -> Result<String> {
        Ok(self.get(codec)?.to_string())
    }
}

impl<T: DualParts + fmt::Display> fmt::Display for LazyDualWrapper<T> {
    /// Renders the live value when present, otherwise a generic placeholder.
    /// Raw channel bytes are never rendered.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.live {
            Some(value) => value.fmt(f),
            None => write!(f, "<serialized, not yet materialized>"),
        }
    }
}
