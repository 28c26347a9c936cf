//! The preference store — two durable records behind namespaced keys.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::preferences::Preferences;
use crate::store::traits::KvStore;

/// Durable keys owned by this store.
pub mod keys {
    /// Onboarding completion flag, stored as literal `"true"` / `"false"`.
    pub const HAS_ONBOARDED: &str = "localbites_has_onboarded";
    /// Last-saved preferences, stored as a JSON record.
    pub const PREFERENCES: &str = "localbites_preferences";
}

/// Persistence for the onboarding flag and the saved [`Preferences`] record.
///
/// Both records are independent: either may exist without the other, and a
/// caller reading preferences after someone set only the flag gets `None`.
pub struct PreferenceStore {
    kv: Arc<dyn KvStore>,
}

impl PreferenceStore {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }

    /// Whether the user has completed onboarding.
    ///
    /// Never fails the caller: absence, a non-canonical stored value, and
    /// backend failure all degrade to `false`. Startup must always reach a
    /// route, so a broken medium reads as "not onboarded yet".
    pub async fn has_onboarded(&self) -> bool {
        match self.kv.get(keys::HAS_ONBOARDED).await {
            Ok(raw) => raw.as_deref() == Some("true"),
            Err(e) => {
                warn!(error = %e, "Onboarding flag read failed, defaulting to false");
                false
            }
        }
    }

    /// Set the onboarding flag. Idempotent.
    pub async fn set_has_onboarded(&self, value: bool) -> Result<(), StoreError> {
        self.kv
            .set(keys::HAS_ONBOARDED, if value { "true" } else { "false" })
            .await
    }

    /// Read the saved preferences, or `None` if never saved.
    ///
    /// A present-but-malformed record is a [`StoreError::Decode`] — it is
    /// propagated rather than silently treated as absent, since defaulting
    /// would mask corruption.
    pub async fn preferences(&self) -> Result<Option<Preferences>, StoreError> {
        match self.kv.get(keys::PREFERENCES).await? {
            Some(raw) => {
                let prefs = serde_json::from_str(&raw)
                    .map_err(|e| StoreError::Decode(format!("{}: {e}", keys::PREFERENCES)))?;
                Ok(Some(prefs))
            }
            None => Ok(None),
        }
    }

    /// Save preferences, replacing any prior record wholesale.
    pub async fn set_preferences(&self, prefs: &Preferences) -> Result<(), StoreError> {
        let raw = serde_json::to_string(prefs)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.kv.set(keys::PREFERENCES, &raw).await?;
        debug!(
            price = %prefs.price_range,
            distance_miles = prefs.max_distance_miles,
            cuisines = prefs.cuisines.len(),
            "Preferences saved"
        );
        Ok(())
    }

    /// Remove both records, returning the installation to its
    /// pre-onboarding state. Already-absent keys are not an error.
    pub async fn reset(&self) -> Result<(), StoreError> {
        self.kv.remove(keys::HAS_ONBOARDED).await?;
        self.kv.remove(keys::PREFERENCES).await?;
        debug!("Preference store reset");
        Ok(())
    }
}
