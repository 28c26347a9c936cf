//! Persistence layer — on-device key/value storage for preferences.

pub mod libsql_backend;
pub mod migrations;
pub mod prefs;
pub mod traits;

pub use libsql_backend::LibSqlKv;
pub use prefs::PreferenceStore;
pub use traits::KvStore;
