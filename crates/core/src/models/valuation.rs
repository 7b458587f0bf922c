use serde::{Deserialize, Serialize};

/// Map-marker bucket derived from a listing's undervaluation score.
///
/// Always recomputed from the score and never persisted, so it cannot drift
/// from the number it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarkerCategory {
    /// Priced 10% or more below comparable market price
    Undervalued,
    /// Within the ±10% band
    #[serde(rename = "FAIRVALUE")]
    FairValue,
    /// Priced 10% or more above comparable market price
    Overvalued,
}

impl MarkerCategory {
    /// Canonical upper-case label ("UNDERVALUED", "FAIRVALUE", "OVERVALUED").
    pub fn label(&self) -> &'static str {
        match self {
            MarkerCategory::Undervalued => "UNDERVALUED",
            MarkerCategory::FairValue => "FAIRVALUE",
            MarkerCategory::Overvalued => "OVERVALUED",
        }
    }

    /// Resolve a label back to a category (case-insensitive).
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "UNDERVALUED" => Some(MarkerCategory::Undervalued),
            "FAIRVALUE" => Some(MarkerCategory::FairValue),
            "OVERVALUED" => Some(MarkerCategory::Overvalued),
            _ => None,
        }
    }
}

impl std::fmt::Display for MarkerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Badge tone for the valuation confidence chip on the detail card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfidenceTone {
    StrongPositive,
    Positive,
    Caution,
    Negative,
    Neutral,
}
