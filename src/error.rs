//! Error types returned by [`OrderedSlotMap`](crate::OrderedSlotMap).
//!
//! Only two operations can fail: [`set`](crate::OrderedSlotMap::set) rejects the null key, and
//! [`get`](crate::OrderedSlotMap::get) reports a key that is null or absent. `has_key` and
//! `remove` treat absence as an ordinary outcome and never produce an error.

use core::fmt;

/// Convenience alias for callers mixing `set` and `get` behind a single `?`.
pub type Result<T> = std::result::Result<T, Error>;

/// Returned by [`set`](crate::OrderedSlotMap::set) when the key is `None`.
///
/// The map is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Null keys are not permitted")]
pub struct NullKeyError;

/// Returned by [`get`](crate::OrderedSlotMap::get) when the key is null or not present.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Key '{}' is missing", .key.as_deref().unwrap_or("null"))]
pub struct KeyNotFoundError {
    key: Option<String>,
}

impl KeyNotFoundError {
    pub(crate) fn new<K: fmt::Display + ?Sized>(key: Option<&K>) -> Self {
        Self {
            key: key.map(ToString::to_string),
        }
    }

    /// The display form of the missing key, or `None` if the lookup used the null key.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    NullKey(#[from] NullKeyError),

    #[error(transparent)]
    KeyNotFound(#[from] KeyNotFoundError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_message() {
        let err = KeyNotFoundError::new(Some(&"apple"));
        assert_eq!(err.key(), Some("apple"));
        assert_eq!(err.to_string(), "Key 'apple' is missing");
    }

    #[test]
    fn test_null_key_message() {
        let err = KeyNotFoundError::new(None::<&i32>);
        assert_eq!(err.key(), None);
        assert_eq!(err.to_string(), "Key 'null' is missing");
    }

    #[test]
    fn test_umbrella_error_is_transparent() {
        let err: Error = NullKeyError.into();
        assert_eq!(err.to_string(), "Null keys are not permitted");

        let err: Error = KeyNotFoundError::new(Some(&42)).into();
        assert_eq!(err.to_string(), "Key '42' is missing");
    }
}
