//! Backend-agnostic key/value trait — the seam between the preference store
//! and whatever on-device medium actually holds the bytes.

use async_trait::async_trait;

use crate::error::StoreError;

/// Async string key/value storage.
///
/// Models on-device storage: string keys, string values, absence is `None`.
/// All failures are [`StoreError::Storage`] — decoding of the stored text is
/// the caller's concern, not the backend's.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Read the value under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any prior value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Returns whether a value was present.
    ///
    /// Deleting an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<bool, StoreError>;
}
