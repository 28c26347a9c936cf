//! Error types for the LocalBites core.

/// Persistence-layer errors.
///
/// A missing key is never an error — reads surface absence as `None` (or the
/// documented default). Everything here is a genuine failure of the storage
/// medium or of the stored bytes.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying storage medium failed (I/O, permissions, quota).
    #[error("Storage operation failed: {0}")]
    Storage(String),

    /// A stored value exists but is not valid serialized data.
    #[error("Stored value could not be decoded: {0}")]
    Decode(String),

    /// A value could not be serialized for writing.
    #[error("Serialization failed: {0}")]
    Serialize(String),

    /// Schema migration failed while opening the store.
    #[error("Migration failed: {0}")]
    Migration(String),
}

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
