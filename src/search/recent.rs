//! Recent-search history — a small most-recent-first list.

/// Maximum number of remembered searches.
pub const MAX_RECENT: usize = 8;

/// Most-recent-first search history with case-insensitive dedup.
///
/// Owned by a session, never shared globally — two sessions must not see
/// each other's history.
#[derive(Debug, Clone, Default)]
pub struct RecentSearches {
    entries: Vec<String>,
}

impl RecentSearches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted query.
    ///
    /// Whitespace is trimmed and empty submissions are ignored.
    /// Re-submitting an existing query (compared case-insensitively) moves
    /// it to the front and keeps the new casing. The list is capped at
    /// [`MAX_RECENT`]; the oldest entry falls off.
    pub fn record(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        let lowered = query.to_lowercase();
        self.entries.retain(|e| e.to_lowercase() != lowered);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(MAX_RECENT);
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_recent_first() {
        let mut recent = RecentSearches::new();
        recent.record("Tacos");
        recent.record("Ramen");
        recent.record("Pho");
        assert_eq!(recent.entries(), ["Pho", "Ramen", "Tacos"]);
    }

    #[test]
    fn resubmission_moves_to_front_with_new_casing() {
        let mut recent = RecentSearches::new();
        recent.record("Tacos");
        recent.record("tacos");
        recent.record("Ramen");
        assert_eq!(recent.entries(), ["Ramen", "tacos"]);
    }

    #[test]
    fn no_case_insensitive_duplicates() {
        let mut recent = RecentSearches::new();
        recent.record("Sushi");
        recent.record("SUSHI");
        recent.record("sushi");
        assert_eq!(recent.entries(), ["sushi"]);
    }

    #[test]
    fn capped_at_eight_entries() {
        let mut recent = RecentSearches::new();
        for i in 0..12 {
            recent.record(&format!("query {i}"));
        }
        assert_eq!(recent.entries().len(), MAX_RECENT);
        assert_eq!(recent.entries()[0], "query 11");
        assert_eq!(recent.entries()[MAX_RECENT - 1], "query 4");
    }

    #[test]
    fn blank_submissions_are_ignored() {
        let mut recent = RecentSearches::new();
        recent.record("");
        recent.record("   ");
        assert!(recent.entries().is_empty());

        recent.record("  Pad Thai  ");
        assert_eq!(recent.entries(), ["Pad Thai"]);
    }

    #[test]
    fn clear_empties_the_list() {
        let mut recent = RecentSearches::new();
        recent.record("Birria");
        recent.clear();
        assert!(recent.entries().is_empty());
    }

    #[test]
    fn sessions_do_not_share_state() {
        let mut a = RecentSearches::new();
        let b = RecentSearches::new();
        a.record("Curry");
        assert!(b.entries().is_empty());
    }
}
