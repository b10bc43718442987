//! # Lazywrap
//!
//! Hybrid lazy serialization wrappers for shipping complex, partially
//! unserializable runtime values across process boundaries (for example, to
//! remote workers).
//!
//! ## Overview
//!
//! Some values cannot travel as-is: they mix a plan-like object graph that
//! only a tolerant structural serializer can handle with hot state that
//! deserves a fast binary codec, and they may hold live references that must
//! never be serialized at all. Lazywrap splits such a value into two
//! independently encoded channels, caches the encoded form on the producing
//! side, ships only the bytes, and lazily rehydrates the live value on first
//! access after the transfer.
//!
//! ### Key Properties
//!
//! *   **Encode once per transfer:** the dual-channel wrapper encodes both
//!     channels eagerly when a value is set; the bytes are reused for every
//!     transfer of that value.
//! *   **Decode at most once:** on the receiving side, the first access
//!     materializes the value and caches it; later accesses are free.
//! *   **Self-describing compression:** every structural buffer carries a
//!     one-byte envelope tag, so a decoder never needs the producer's
//!     configuration to know whether the payload is compressed.
//! *   **No ambient state:** codec handles are passed explicitly; there is no
//!     global shared codec instance.
//!
//! ## Architecture
//!
//! Leaves first:
//!
//! 1. [`FastCodec`] adapts the fast binary codec (bincode) for the
//!    performance-sensitive channel.
//! 2. [`envelope`] frames any buffer with a raw/compressed tag byte and
//!    applies or reverses compression via a pluggable [`Compressor`].
//! 3. [`StructuralCodec`] adapts the structural codec (serde_json) for the
//!    plan-like channel, honoring per-type [`CodecStrategy`] overrides and
//!    the envelope framing, with a configuration-driven compression toggle.
//! 4. [`LazyValueWrapper`] is the generic single-channel wrapper: lazy encode
//!    at the transfer boundary, lazy decode-once after it.
//! 5. [`LazyDualWrapper`] is the dual-channel wrapper: eager encode of both
//!    channels on set, lazy combined decode-once after transfer.
//!
//! ## Quick Start
//!
//! ```rust
//! use lazywrap::{DualParts, LazyDualWrapper, StructuralCodec};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Operator {
//!     plan: String,
//!     stats: Vec<u64>,
//! }
//!
//! impl DualParts for Operator {
//!     type Structural = String;
//!     type Fast = Vec<u64>;
//!     fn structural(&self) -> &String { &self.plan }
//!     fn fast(&self) -> &Vec<u64> { &self.stats }
//!     fn assemble(plan: String, stats: Vec<u64>) -> Self {
//!         Self { plan, stats }
//!     }
//! }
//!
//! let codec = StructuralCodec::new();
//! let op = Operator { plan: "scan".into(), stats: vec![42] };
//!
//! let wrapper = LazyDualWrapper::new(op, &codec)?;
//! let (structural, fast) = wrapper.into_bytes();
//!
//! let mut received: LazyDualWrapper<Operator> = LazyDualWrapper::from_bytes(structural, fast);
//! assert_eq!(received.get(&codec)?.stats, vec![42]);
//! # Ok::<(), lazywrap::LazywrapError>(())
//! ```
//!
//! ## Concurrency Contract
//!
//! Wrapper instances are single-threaded: constructed on one thread,
//! transferred as inert bytes, materialized on one (typically different)
//! thread. Accessors take `&mut self`, so safe Rust statically prevents
//! concurrent first access to the same instance. All operations are local,
//! synchronous and CPU-bound; nothing here retries, blocks on I/O, or needs a
//! timeout model.
//!
//! ### Safety and Error Handling
//!
//! * **No Panics:** no `unwrap()` or `panic!()` calls in the library
//!   (enforced by clippy lints).
//! * **No Unsafe:** the crate is `#![deny(unsafe_code)]`.
//! * **Comprehensive Errors:** all failures correspond to a
//!   [`LazywrapError`] variant.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

// --- PUBLIC API MODULES ---
pub mod compression;
pub mod config;
pub mod dual;
pub mod envelope;
pub mod error;
pub mod fast;
pub mod structural;
pub mod wrapper;

// --- RE-EXPORTS ---

#[cfg(feature = "lz4_flex")]
pub use compression::Lz4Compressor;
pub use compression::{Compressor, NoCompression};

pub use config::{ConfigSource, MapConfig};
pub use dual::{DualParts, LazyDualWrapper};
pub use error::{LazywrapError, Result};
pub use fast::FastCodec;
pub use structural::{CodecStrategy, StrategyRegistry, StructuralCodec};
pub use wrapper::LazyValueWrapper;
