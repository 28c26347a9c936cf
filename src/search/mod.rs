//! Main-screen search session — per-session state, no process globals.

pub mod recent;
pub mod suggestions;

pub use recent::{MAX_RECENT, RecentSearches};
pub use suggestions::SUGGESTIONS;

/// One user-visible search session.
///
/// Holds the recent-search history for this session only; discarding the
/// session discards the history.
#[derive(Debug, Default)]
pub struct SearchSession {
    recent: RecentSearches,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a query: records it in the history and returns the matching
    /// suggestions.
    pub fn submit(&mut self, query: &str) -> Vec<&'static str> {
        self.recent.record(query);
        suggestions::matches(query)
    }

    /// Recent queries, most recent first.
    pub fn recent(&self) -> &[String] {
        self.recent.entries()
    }

    pub fn clear_recent(&mut self) {
        self.recent.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_records_and_filters() {
        let mut session = SearchSession::new();
        let hits = session.submit("ramen");
        assert_eq!(hits, ["Birria Ramen", "Tonkotsu Ramen"]);
        assert_eq!(session.recent(), ["ramen"]);
    }

    #[test]
    fn blank_submission_filters_without_recording() {
        let mut session = SearchSession::new();
        let hits = session.submit("  ");
        assert_eq!(hits.len(), SUGGESTIONS.len());
        assert!(session.recent().is_empty());
    }

    #[test]
    fn independent_sessions() {
        let mut a = SearchSession::new();
        let b = SearchSession::new();
        a.submit("Pho");
        assert!(b.recent().is_empty());
    }
}
