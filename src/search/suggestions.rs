//! Placeholder suggestions — a static list with trivial filtering.
//!
//! Stands in for real search until a backend exists. No ranking; matches
//! keep the list's original order.

/// Static suggestion pool shown on the search screen.
pub const SUGGESTIONS: [&str; 12] = [
    "Tacos al Pastor",
    "Birria Ramen",
    "Margherita Pizza",
    "Tonkotsu Ramen",
    "Korean BBQ",
    "Pad Thai",
    "Pho",
    "Butter Chicken",
    "Banh Mi",
    "Falafel Wrap",
    "Sushi Omakase",
    "Smash Burger",
];

/// Suggestions containing `query` as a case-insensitive substring.
///
/// An empty (or all-whitespace) query returns the whole list.
pub fn matches(query: &str) -> Vec<&'static str> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SUGGESTIONS.to_vec();
    }
    SUGGESTIONS
        .iter()
        .copied()
        .filter(|s| s.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_returns_everything() {
        assert_eq!(matches(""), SUGGESTIONS.to_vec());
        assert_eq!(matches("   "), SUGGESTIONS.to_vec());
    }

    #[test]
    fn filter_is_case_insensitive() {
        let hits = matches("RAMEN");
        assert_eq!(hits, ["Birria Ramen", "Tonkotsu Ramen"]);
    }

    #[test]
    fn substring_match_anywhere() {
        assert_eq!(matches("wrap"), ["Falafel Wrap"]);
    }

    #[test]
    fn no_hits_yields_empty() {
        assert!(matches("haggis").is_empty());
    }
}
