//! Configuration access for the structural codec.
//!
//! The only option this crate reads is the plan-compression toggle. The
//! [`ConfigSource`] trait keeps the configuration system itself out of scope:
//! any host configuration layer can implement it.

use std::collections::HashMap;

/// Option key controlling whether structural (plan) bytes are compressed.
pub const COMPRESS_PLAN_KEY: &str = "lazywrap.compress.plan";

/// Static default for [`COMPRESS_PLAN_KEY`], applied when no configuration
/// source is supplied or the key is absent.
pub const COMPRESS_PLAN_DEFAULT: bool = true;

/// A read-only source of boolean configuration options.
pub trait ConfigSource {
    /// Returns the boolean value for `key`, or `default` when the key is
    /// absent or unparseable.
    fn get_bool(&self, key: &str, default: bool) -> bool;
}

/// An in-memory string-map configuration source.
///
/// Values are parsed case-insensitively as `true`/`false`; anything else
/// falls back to the supplied default.
///
/// ## Examples
///
/// ```rust
/// use lazywrap::config::{ConfigSource, MapConfig, COMPRESS_PLAN_KEY};
///
/// let mut conf = MapConfig::new();
/// conf.set(COMPRESS_PLAN_KEY, "false");
/// assert!(!conf.get_bool(COMPRESS_PLAN_KEY, true));
/// ```
#[derive(Debug, Default, Clone)]
pub struct MapConfig {
    values: HashMap<String, String>,
}

impl MapConfig {
    /// Creates an empty configuration map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a string option.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl ConfigSource for MapConfig {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.values.get(key) {
            Some(v) if v.eq_ignore_ascii_case("true") => true,
            Some(v) if v.eq_ignore_ascii_case("false") => false,
            _ => default,
        }
    }
}
