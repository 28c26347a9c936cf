//! Onboarding — the first-launch routing decision and the preference
//! collection flow that follows it.

pub mod flow;
pub mod gate;

pub use flow::PersonalizationFlow;
pub use gate::{GateState, OnboardingGate, Route};
