//! On-disk persistence tests — the store must survive a process restart,
//! which we simulate by reopening the database file.

use std::path::Path;
use std::sync::Arc;

use localbites_core::onboarding::{GateState, OnboardingGate, PersonalizationFlow, Route};
use localbites_core::preferences::PriceRange;
use localbites_core::store::{LibSqlKv, PreferenceStore};

async fn open_store(path: &Path) -> Arc<PreferenceStore> {
    let kv = LibSqlKv::open(path).await.unwrap();
    Arc::new(PreferenceStore::new(Arc::new(kv)))
}

#[tokio::test]
async fn preferences_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("localbites.db");

    let store = open_store(&db_path).await;
    let mut flow = PersonalizationFlow::new(Arc::clone(&store));
    flow.select_price(PriceRange::Upscale);
    flow.set_distance(8);
    flow.toggle_cuisine("Vietnamese");
    flow.complete().await.unwrap();
    drop(store);

    let reopened = open_store(&db_path).await;
    let prefs = reopened.preferences().await.unwrap().unwrap();
    assert_eq!(prefs.price_range, PriceRange::Upscale);
    assert_eq!(prefs.max_distance_miles, 8);
    assert_eq!(prefs.cuisines, ["Vietnamese"]);
    assert!(reopened.has_onboarded().await);
}

#[tokio::test]
async fn full_onboarding_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("localbites.db");

    // Fresh install: gate starts pending, then routes to onboarding.
    let store = open_store(&db_path).await;
    let gate = OnboardingGate::new(Arc::clone(&store));
    assert_eq!(gate.state().await, GateState::Pending);
    assert_eq!(gate.resolve().await, Some(Route::Onboarding));

    // User picks $$, 12 miles, Japanese + Thai and confirms.
    let mut flow = PersonalizationFlow::new(Arc::clone(&store));
    flow.select_price(PriceRange::Moderate);
    flow.set_distance(12);
    flow.toggle_cuisine("Japanese");
    flow.toggle_cuisine("Thai");
    flow.complete().await.unwrap();

    let prefs = store.preferences().await.unwrap().unwrap();
    assert_eq!(prefs.price_range, PriceRange::Moderate);
    assert_eq!(prefs.max_distance_miles, 12);
    assert_eq!(prefs.cuisines, ["Japanese", "Thai"]);
    assert!(store.has_onboarded().await);
    drop(store);

    // Next app start routes straight to the main screen.
    let restarted = open_store(&db_path).await;
    let gate = OnboardingGate::new(Arc::clone(&restarted));
    assert_eq!(gate.resolve().await, Some(Route::Main));
}

#[tokio::test]
async fn reset_returns_the_install_to_onboarding() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("localbites.db");

    let store = open_store(&db_path).await;
    let mut flow = PersonalizationFlow::new(Arc::clone(&store));
    flow.complete().await.unwrap();
    store.reset().await.unwrap();
    drop(store);

    let reopened = open_store(&db_path).await;
    assert!(!reopened.has_onboarded().await);
    assert!(reopened.preferences().await.unwrap().is_none());

    let gate = OnboardingGate::new(reopened);
    assert_eq!(gate.resolve().await, Some(Route::Onboarding));
}
