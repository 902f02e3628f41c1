use serde::{Deserialize, Serialize};

/// Price rating label attached to a listing by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceBadge {
    VeryGood,
    Good,
    New,
    Sponsored,
    /// Explicit "do not display"
    NoRating,
    Other(String),
}

impl PriceBadge {
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        let badge = match label {
            "" => return None,
            "Very Good" => PriceBadge::VeryGood,
            "Good" => PriceBadge::Good,
            "New" => PriceBadge::New,
            "Sponsored" => PriceBadge::Sponsored,
            "No rating" => PriceBadge::NoRating,
            other => PriceBadge::Other(other.to_string()),
        };
        Some(badge)
    }

    pub fn is_displayed(&self) -> bool {
        !matches!(self, PriceBadge::NoRating)
    }

    /// Label as stored
    pub fn label(&self) -> &str {
        match self {
            PriceBadge::VeryGood => "Very Good",
            PriceBadge::Good => "Good",
            PriceBadge::New => "New",
            PriceBadge::Sponsored => "Sponsored",
            PriceBadge::NoRating => "No rating",
            PriceBadge::Other(label) => label,
        }
    }

    /// Locale key for the known badges; unknown labels render verbatim
    pub fn translation_key(&self) -> Option<&'static str> {
        match self {
            PriceBadge::VeryGood => Some("badges.veryGood"),
            PriceBadge::Good => Some("badges.good"),
            PriceBadge::New => Some("badges.new"),
            PriceBadge::Sponsored => Some("badges.sponsored"),
            PriceBadge::NoRating | PriceBadge::Other(_) => None,
        }
    }
}
