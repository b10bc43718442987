//! Adapter over the structural (object-graph) codec.
//!
//! The structural channel carries the parts of a value that need a tolerant,
//! schema-rich serializer rather than a fast one: complex nested state such as
//! a query plan. This adapter encodes via `serde_json`, consults a per-type
//! [`StrategyRegistry`] for values the generic path cannot round-trip, and
//! frames every output through the compressed envelope so the result is
//! self-describing.
//!
//! Type resolution at decode time is supplied by the caller's type parameter;
//! no runtime class-resolution context is needed in Rust.
//!
//! ## Compression Decision
//!
//! The compression toggle is resolved once, at codec construction: from the
//! supplied [`ConfigSource`]'s `lazywrap.compress.plan` option, or from the
//! static default when no configuration is given. The resolved flag only
//! affects *encoding*; decoding always follows the envelope tag.
//!
//! ## Examples
//!
//! ```rust
//! use lazywrap::StructuralCodec;
//!
//! let codec = StructuralCodec::new();
//! let bytes = codec.encode(&vec!["scan".to_string(), "filter".to_string()])?;
//! let plan: Vec<String> = codec.decode(&bytes)?;
//! assert_eq!(plan[1], "filter");
//! # Ok::<(), lazywrap::LazywrapError>(())
//! ```

use crate::compression::{default_compressor, Compressor};
use crate::config::{ConfigSource, COMPRESS_PLAN_DEFAULT, COMPRESS_PLAN_KEY};
use crate::envelope;
use crate::error::{LazywrapError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::any::{Any, TypeId};
use std::collections::HashMap;

/// A per-type encode/decode override for the structural codec.
///
/// Strategies handle values the generic structural path cannot natively
/// round-trip (the classic case is enumeration-like values whose generic
/// encoding loses identity). A registered strategy is resolved *before* the
/// generic path is attempted, on both encode and decode.
///
/// `encode` receives the value as `&dyn Any` and must downcast to the type
/// the strategy was registered for; `decode` must return a boxed value of
/// that same type.
pub trait CodecStrategy: Send + Sync + std::fmt::Debug {
    /// Encodes the value to raw (pre-envelope) bytes.
    fn encode(&self, value: &dyn Any) -> Result<Vec<u8>>;

    /// Decodes raw (post-envelope) bytes back into a boxed value.
    fn decode(&self, bytes: &[u8]) -> Result<Box<dyn Any>>;
}

/// Table of per-type strategy overrides, keyed by `TypeId`.
#[derive(Debug, Default)]
pub struct StrategyRegistry {
    overrides: HashMap<TypeId, Box<dyn CodecStrategy>>,
}

impl StrategyRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `strategy` as the override for type `V`.
    ///
    /// Replaces any previously registered strategy for the same type.
    pub fn register<V: 'static>(&mut self, strategy: Box<dyn CodecStrategy>) {
        self.overrides.insert(TypeId::of::<V>(), strategy);
    }

    fn get(&self, id: TypeId) -> Option<&dyn CodecStrategy> {
        self.overrides.get(&id).map(|s| &**s)
    }
}

/// Encodes and decodes typed values through the structural codec, with
/// envelope framing and optional compression.
///
/// The codec holds no per-value mutable state; a single instance can serve
/// any number of encode/decode calls. Ownership is explicit: callers pass a
/// handle to the codec wherever one is needed, there is no ambient global
/// instance.
#[derive(Debug)]
pub struct StructuralCodec {
    compress: bool,
    compressor: Box<dyn Compressor>,
    strategies: StrategyRegistry,
}

impl StructuralCodec {
    /// Creates a codec with the static compression default and the default
    /// compressor for this build.
    pub fn new() -> Self {
        Self {
            compress: COMPRESS_PLAN_DEFAULT,
            compressor: default_compressor(),
            strategies: StrategyRegistry::new(),
        }
    }

    /// Creates a codec whose compression toggle is read from `config`
    /// (option [`COMPRESS_PLAN_KEY`], falling back to the static default).
    pub fn with_config(config: &dyn ConfigSource) -> Self {
        Self {
            compress: config.get_bool(COMPRESS_PLAN_KEY, COMPRESS_PLAN_DEFAULT),
            compressor: default_compressor(),
            strategies: StrategyRegistry::new(),
        }
    }

    /// Replaces the compressor used for the envelope's compressed path.
    #[must_use]
    pub fn with_compressor(mut self, compressor: Box<dyn Compressor>) -> Self {
        self.compressor = compressor;
        self
    }

    /// Registers a per-type strategy override for type `V`.
    pub fn register_strategy<V: 'static>(&mut self, strategy: Box<dyn CodecStrategy>) {
        self.strategies.register::<V>(strategy);
    }

    /// Returns whether this codec compresses its output.
    pub fn compression_enabled(&self) -> bool {
        self.compress
    }

    /// Encodes `value` to envelope-framed bytes.
    ///
    /// A registered strategy for `V` wins over the generic structural path.
    ///
    /// # Errors
    /// Returns [`LazywrapError::Codec`] if the value cannot be represented
    /// (for example, it contains non-serializable live resources). This is a
    /// caller contract violation and is never retried.
    pub fn encode<V: Serialize + 'static>(&self, value: &V) -> Result<Vec<u8>> {
        let raw = match self.strategies.get(TypeId::of::<V>()) {
            Some(strategy) => strategy.encode(value)?,
            None => serde_json::to_vec(value).map_err(|e| LazywrapError::Codec(e.to_string()))?,
        };
        envelope::encode(&raw, self.compress, self.compressor.as_ref())
    }

    /// Decodes envelope-framed bytes produced by [`StructuralCodec::encode`].
    ///
    /// The envelope tag decides decompression; the producer's configuration
    /// is irrelevant here.
    pub fn decode<V: DeserializeOwned + 'static>(&self, bytes: &[u8]) -> Result<V> {
        let raw = envelope::decode(bytes, self.compressor.as_ref())?;

        match self.strategies.get(TypeId::of::<V>()) {
            Some(strategy) => {
                let boxed = strategy.decode(&raw)?;
                boxed.downcast::<V>().map(|v| *v).map_err(|_| {
                    LazywrapError::Codec(
                        "strategy returned a value of the wrong type".to_string(),
                    )
                })
            }
            None => serde_json::from_slice(&raw).map_err(|e| LazywrapError::Codec(e.to_string())),
        }
    }
}

impl Default for StructuralCodec {
    fn default() -> Self {
        Self::new()
    }
}
