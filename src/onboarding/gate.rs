//! Startup routing — decide once per launch which screen the user sees.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use tracing::debug;

use crate::store::PreferenceStore;

/// The two places startup can land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Preference-collection flow (first launch, or after a reset).
    Onboarding,
    /// Main search screen.
    Main,
}

/// Gate progress: `Pending -> Routed(..)`, terminal once routed.
///
/// Nothing transitions back to `Pending` except a fresh invocation after
/// [`OnboardingGate::invalidate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// The flag read is outstanding; render a neutral loading state.
    Pending,
    /// Decision made.
    Routed(Route),
}

/// The once-per-launch routing decision.
///
/// Issues exactly one onboarding-flag read per invocation. While the read is
/// outstanding the state stays [`GateState::Pending`], so the consumer never
/// flashes the wrong screen. A generation counter stands in for the UI-side
/// "still mounted" check: if the consumer is torn down mid-read, the
/// resolution is discarded instead of routing a ghost.
pub struct OnboardingGate {
    store: Arc<PreferenceStore>,
    state: RwLock<GateState>,
    generation: AtomicU64,
}

impl OnboardingGate {
    pub fn new(store: Arc<PreferenceStore>) -> Self {
        Self {
            store,
            state: RwLock::new(GateState::Pending),
            generation: AtomicU64::new(0),
        }
    }

    /// Current gate state.
    pub async fn state(&self) -> GateState {
        *self.state.read().await
    }

    /// Resolve the route for this launch.
    ///
    /// Reads the onboarding flag once; the store degrades read failures to
    /// `false`, so the decision always terminates — a broken medium routes
    /// to onboarding rather than hanging startup. Returns `None` without
    /// touching the state if [`invalidate`](Self::invalidate) was called
    /// while the read was in flight.
    pub async fn resolve(&self) -> Option<Route> {
        let ticket = self.generation.load(Ordering::Acquire);

        let onboarded = self.store.has_onboarded().await;

        if self.generation.load(Ordering::Acquire) != ticket {
            debug!("Gate resolution discarded, consumer went away mid-read");
            return None;
        }

        let route = if onboarded {
            Route::Main
        } else {
            Route::Onboarding
        };
        *self.state.write().await = GateState::Routed(route);
        debug!(?route, "Gate routed");
        Some(route)
    }

    /// Mark the current invocation stale and return to `Pending`.
    ///
    /// Call when the consumer is torn down, or before re-running the gate
    /// after the flag changed (e.g. a preferences reset).
    pub async fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        *self.state.write().await = GateState::Pending;
    }
}
