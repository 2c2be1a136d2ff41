//! Error types for the ringlru library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when a cache is constructed with an invalid
//!   capacity. This is the only error a caller sees at runtime; every other
//!   operation reports a missing key as `None` / `false`.
//! - [`InvariantError`]: Returned by
//!   [`RingLruCore::check_invariants`](crate::policy::ring_lru::RingLruCore::check_invariants)
//!   when the key index, entry arena and ring disagree.
//!
//! ## Example Usage
//!
//! ```
//! use ringlru::error::ConfigError;
//! use ringlru::policy::ring_lru::RingLruCore;
//!
//! let cache: Result<RingLruCore<u64, String>, ConfigError> = RingLruCore::try_new(64);
//! assert!(cache.is_ok());
//!
//! // Zero capacity is rejected without panicking
//! let bad = RingLruCore::<u64, String>::try_new(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`RingLruCore::try_new`](crate::policy::ring_lru::RingLruCore::try_new).
/// Carries a human-readable description of which parameter failed validation.
///
/// # Example
///
/// ```
/// use ringlru::policy::ring_lru::RingLruCore;
///
/// let err = RingLruCore::<u64, u64>::try_new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Carries a description of which cross-reference failed, e.g. an index
/// entry pointing at an empty ring slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("capacity must be greater than zero");
        assert_eq!(err.to_string(), "capacity must be greater than zero");
    }

    #[test]
    fn config_message_accessor() {
        let err = ConfigError::new("bad capacity");
        assert_eq!(err.message(), "bad capacity");
    }

    #[test]
    fn config_clone_and_eq() {
        let a = ConfigError::new("x");
        assert_eq!(a.clone(), a);
        assert_ne!(a, ConfigError::new("y"));
    }

    #[test]
    fn config_boxes_as_std_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(ConfigError::new("capacity"));
        assert_eq!(boxed.to_string(), "capacity");
    }

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("slot 3 holds a stale handle");
        assert_eq!(err.to_string(), "slot 3 holds a stale handle");
    }

    #[test]
    fn invariant_debug_includes_message() {
        let err = InvariantError::new("index/ring mismatch");
        assert!(format!("{:?}", err).contains("index/ring mismatch"));
    }

    #[test]
    fn invariant_implements_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<InvariantError>();
        assert_error::<ConfigError>();
    }
}
