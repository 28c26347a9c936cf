//! LocalBites core — preference persistence, the onboarding gate, and
//! main-screen search session state. The presentation layer is an external
//! collaborator that calls into these modules.

pub mod config;
pub mod error;
pub mod onboarding;
pub mod preferences;
pub mod search;
pub mod store;
