//! Personalization flow — collects the first-run preference selections and
//! commits them.

use std::sync::Arc;

use tracing::info;

use crate::error::StoreError;
use crate::preferences::{
    MAX_DISTANCE_MILES, MIN_DISTANCE_MILES, Preferences, PriceRange,
};
use crate::store::PreferenceStore;

/// In-progress onboarding selections.
///
/// Owns the screen state the user is editing; nothing is persisted until
/// [`complete`](Self::complete). Defaults mirror the screen: `$$`, 5 miles,
/// no cuisines. An empty cuisine selection is allowed — the saved record
/// simply carries an empty list.
pub struct PersonalizationFlow {
    store: Arc<PreferenceStore>,
    price_range: PriceRange,
    distance_miles: u8,
    cuisines: Vec<String>,
    saving: bool,
}

impl PersonalizationFlow {
    pub fn new(store: Arc<PreferenceStore>) -> Self {
        Self {
            store,
            price_range: PriceRange::Moderate,
            distance_miles: 5,
            cuisines: Vec::new(),
            saving: false,
        }
    }

    pub fn select_price(&mut self, price: PriceRange) {
        self.price_range = price;
    }

    /// Set the search radius, clamped to the valid 1–25 mile range.
    pub fn set_distance(&mut self, miles: u8) {
        self.distance_miles = miles.clamp(MIN_DISTANCE_MILES, MAX_DISTANCE_MILES);
    }

    /// Add the cuisine if unselected, remove it if selected.
    pub fn toggle_cuisine(&mut self, cuisine: &str) {
        if let Some(pos) = self.cuisines.iter().position(|c| c == cuisine) {
            self.cuisines.remove(pos);
        } else {
            self.cuisines.push(cuisine.to_string());
        }
    }

    pub fn selected_cuisines(&self) -> &[String] {
        &self.cuisines
    }

    /// Whether the confirm button should be enabled.
    pub fn can_continue(&self) -> bool {
        !self.saving
    }

    /// The record that [`complete`](Self::complete) would persist.
    pub fn preferences(&self) -> Preferences {
        Preferences {
            price_range: self.price_range,
            max_distance_miles: self.distance_miles,
            cuisines: self.cuisines.clone(),
        }
    }

    /// Persist the selections and mark onboarding complete.
    ///
    /// The preferences write must be confirmed before the flag write is
    /// issued: a crash between the two leaves preferences saved with the
    /// flag unset (the user re-onboards), never the flag set with nothing
    /// saved behind it. On failure the flow stays editable for a retry.
    pub async fn complete(&mut self) -> Result<(), StoreError> {
        self.saving = true;
        let result = self.save().await;
        self.saving = false;
        result
    }

    async fn save(&self) -> Result<(), StoreError> {
        let prefs = self.preferences();
        self.store.set_preferences(&prefs).await?;
        self.store.set_has_onboarded(true).await?;
        info!("Onboarding complete");
        Ok(())
    }
}
