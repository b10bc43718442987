//! Centralized error handling for lazywrap.
//!
//! This module provides a robust error handling system that strictly avoids panics,
//! ensuring that all failure conditions are properly propagated through the `Result` type.
//!
//! ## Design Philosophy
//!
//! Lazywrap's error handling is designed with the following principles:
//!
//! 1. **No Panics:** All error conditions are represented as `Result` values. The library
//!    enforces this through `#![deny(clippy::panic)]` and `#![deny(clippy::unwrap_used)]`.
//!
//! 2. **No Retries:** Every failure in this crate stems from a deterministic data or
//!    contract problem, never a transient condition. Retrying cannot fix a structurally
//!    invalid payload, so no operation retries internally.
//!
//! 3. **Cloneable Errors:** The [`LazywrapError`] type is `Clone`, allowing errors to be
//!    shared across threads or stored for later analysis.
//!
//! ## Error Categories
//!
//! Errors are categorized by their domain:
//!
//! - **Codec Errors** ([`LazywrapError::Codec`]): The structural or binary codec could
//!   not encode or decode a value
//! - **Compression Errors** ([`LazywrapError::Compression`]): Compression/decompression failures
//! - **Envelope Errors** ([`LazywrapError::MalformedEnvelope`]): Invalid envelope framing
//! - **State Errors** ([`LazywrapError::InconsistentState`]): Wrapper lifecycle contract
//!   violations (should not occur in correct code)
//!
//! ## Usage Patterns
//!
//! ### Error Propagation with `?`
//!
//! ```rust
//! use lazywrap::{FastCodec, Result};
//!
//! fn encode_marker(id: u32) -> Result<Vec<u8>> {
//!     let bytes = FastCodec::encode(&id)?;
//!     Ok(bytes)
//! }
//! # encode_marker(7)?;
//! # Ok::<(), lazywrap::LazywrapError>(())
//! ```
//!
//! ### Matching on Failure Domains
//!
//! ```rust
//! use lazywrap::LazywrapError;
//!
//! fn check_error(err: &LazywrapError) {
//!     match err {
//!         LazywrapError::MalformedEnvelope(msg) => println!("framing: {}", msg),
//!         LazywrapError::InconsistentState(msg) => println!("lifecycle bug: {}", msg),
//!         _ => println!("other error"),
//!     }
//! }
//! ```

use std::fmt;

/// A specialized `Result` type for lazywrap operations.
///
/// This type alias is used throughout the library to simplify error handling.
/// It is equivalent to `std::result::Result<T, LazywrapError>`.
pub type Result<T> = std::result::Result<T, LazywrapError>;

/// The master error enum covering all failure domains in lazywrap.
///
/// Each variant corresponds to a specific failure domain and carries a
/// descriptive message about the root cause.
///
/// ## Variants
///
/// - **Codec:** The underlying structural (serde_json) or binary (bincode) codec failed
///   to encode or decode a value (unsupported type, corrupted stream, type mismatch)
/// - **Compression:** The compressor failed (corrupted compressed payload, etc.)
/// - **MalformedEnvelope:** The envelope tag byte is missing or unrecognized
/// - **InconsistentState:** A wrapper was used outside its documented lifecycle
///   (for example, decode attempted with missing byte buffers). This indicates a
///   programming bug in the caller, not a recoverable runtime condition.
#[derive(Debug, Clone)]
pub enum LazywrapError {
    /// Structural or binary codec failure on encode or decode.
    ///
    /// ## Common Causes
    ///
    /// - The value contains state the codec cannot represent (live resources, etc.)
    /// - The byte stream is corrupted or truncated
    /// - The decoded bytes do not match the requested type
    Codec(String),

    /// Compression or decompression failure.
    ///
    /// Typically caused by a corrupted compressed payload, or by a producer and
    /// consumer disagreeing on the compression algorithm behind the envelope.
    Compression(String),

    /// The envelope framing is invalid: the buffer is empty or the leading tag
    /// byte is neither the raw nor the compressed marker.
    ///
    /// Indicates either corruption in transit or a producer/consumer
    /// envelope-format mismatch.
    MalformedEnvelope(String),

    /// A wrapper's internal lifecycle invariant was violated.
    ///
    /// This error should not occur in correct code. It means a wrapper was asked
    /// to materialize a value without the byte buffers required to do so: the
    /// instance was constructed or transferred outside its documented contract.
    /// Callers should treat this as fatal rather than attempt recovery.
    InconsistentState(String),
}

impl fmt::Display for LazywrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Codec(s) => write!(f, "Codec Error: {s}"),
            Self::Compression(s) => write!(f, "Compression Error: {s}"),
            Self::MalformedEnvelope(s) => write!(f, "Malformed Envelope: {s}"),
            Self::InconsistentState(s) => write!(f, "Inconsistent Wrapper State: {s}"),
        }
    }
}

impl std::error::Error for LazywrapError {}
