//! Configuration types.

use std::path::PathBuf;

/// App configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where the on-device preference database lives.
    pub db_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("./data/localbites.db"),
        }
    }
}

impl AppConfig {
    /// Build a config from the environment, falling back to defaults.
    ///
    /// `LOCALBITES_DB_PATH` overrides the database location.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(path) = std::env::var("LOCALBITES_DB_PATH") {
            config.db_path = PathBuf::from(path);
        }
        config
    }
}
