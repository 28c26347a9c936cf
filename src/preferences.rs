//! Preference model — the value object the whole app revolves around.

use serde::{Deserialize, Serialize};

/// Price tiers, least to most expensive.
///
/// Serializes as the literal dollar-sign strings the UI shows, so the
/// persisted record stays readable (`{"priceRange":"$$",...}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Upscale,
    #[serde(rename = "$$$$")]
    Fine,
}

impl PriceRange {
    /// All tiers in ascending order (for rendering pickers).
    pub const ALL: [PriceRange; 4] = [
        PriceRange::Budget,
        PriceRange::Moderate,
        PriceRange::Upscale,
        PriceRange::Fine,
    ];
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Budget => "$",
            Self::Moderate => "$$",
            Self::Upscale => "$$$",
            Self::Fine => "$$$$",
        };
        write!(f, "{s}")
    }
}

/// Valid search-radius bounds in miles, inclusive.
pub const MIN_DISTANCE_MILES: u8 = 1;
pub const MAX_DISTANCE_MILES: u8 = 25;

/// Cuisines offered by the personalization screen.
///
/// Advisory only — the store persists whatever strings it is handed, so the
/// vocabulary can grow without a migration.
pub const CUISINES: [&str; 10] = [
    "Mexican",
    "Italian",
    "Japanese",
    "Korean",
    "Chinese",
    "Thai",
    "Vietnamese",
    "Indian",
    "Mediterranean",
    "American",
];

/// The user's saved dining filters.
///
/// Immutable once constructed; updates replace the whole record. Exactly one
/// record exists per installation (or none, before onboarding).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub price_range: PriceRange,
    pub max_distance_miles: u8,
    pub cuisines: Vec<String>,
}
