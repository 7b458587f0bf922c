use crate::models::property::{Property, ValuationConfidence};
use crate::models::valuation::{ConfidenceTone, MarkerCategory};

/// Score at or above which a listing is undervalued.
pub const UNDERVALUED_THRESHOLD: f64 = 10.0;

/// Score at or below which a listing is overvalued.
pub const OVERVALUED_THRESHOLD: f64 = -10.0;

pub const UNDERVALUED_COLOR: &str = "#10B981";
pub const FAIRVALUE_COLOR: &str = "#FBBF24";
pub const OVERVALUED_COLOR: &str = "#EF4444";

/// Turns undervaluation scores into marker categories, colors and labels.
///
/// Pure functions over the score; no state, no errors.
pub struct ValuationService;

impl ValuationService {
    /// Bucket a score. Total over `f64`: NaN lands in `FairValue`.
    pub fn classify(score: f64) -> MarkerCategory {
        if score >= UNDERVALUED_THRESHOLD {
            MarkerCategory::Undervalued
        } else if score <= OVERVALUED_THRESHOLD {
            MarkerCategory::Overvalued
        } else {
            MarkerCategory::FairValue
        }
    }

    pub fn classify_property(property: &Property) -> MarkerCategory {
        Self::classify(property.undervaluation_score)
    }

    /// Marker color (hex) for a category.
    pub fn color_of(category: MarkerCategory) -> &'static str {
        match category {
            MarkerCategory::Undervalued => UNDERVALUED_COLOR,
            MarkerCategory::FairValue => FAIRVALUE_COLOR,
            MarkerCategory::Overvalued => OVERVALUED_COLOR,
        }
    }

    /// Marker color for a category label coming from outside the type system
    /// (e.g., a UI theme file). Unknown labels get the fair-value color.
    pub fn color_of_label(label: &str) -> &'static str {
        MarkerCategory::from_label(label)
            .map(Self::color_of)
            .unwrap_or(FAIRVALUE_COLOR)
    }

    /// Human-readable score text.
    ///
    /// Uses 0 as its boundary, not the ±10 classification band: a score of 3
    /// reads "3% below market" while still classifying as fair value.
    pub fn valuation_text(score: f64) -> String {
        if score > 0.0 {
            format!("{score}% below market")
        } else if score < 0.0 {
            format!("{}% above market", score.abs())
        } else {
            "Fair market value".to_string()
        }
    }

    /// Arrow prefix for price labels, following the classification band.
    pub fn trend_indicator(score: f64) -> &'static str {
        match Self::classify(score) {
            MarkerCategory::Undervalued => "↓ ",
            MarkerCategory::Overvalued => "↑ ",
            MarkerCategory::FairValue => "→ ",
        }
    }

    /// Sentence for the valuation panel. Same 0 boundary as [`Self::valuation_text`],
    /// with the score shown to one decimal place.
    pub fn valuation_explanation(score: f64) -> String {
        if score > 0.0 {
            format!(
                "This property is priced {score:.1}% below similar properties in the area, \
                 suggesting it might be undervalued."
            )
        } else if score < 0.0 {
            format!(
                "This property is priced {:.1}% above similar properties in the area, \
                 suggesting it might be overvalued.",
                score.abs()
            )
        } else {
            "This property is priced at market value compared to similar properties in the area."
                .to_string()
        }
    }

    /// Badge tone for the confidence chip; `Neutral` when the source gave none.
    pub fn confidence_tone(confidence: Option<ValuationConfidence>) -> ConfidenceTone {
        match confidence {
            Some(ValuationConfidence::VeryHigh) => ConfidenceTone::StrongPositive,
            Some(ValuationConfidence::High) => ConfidenceTone::Positive,
            Some(ValuationConfidence::Medium) => ConfidenceTone::Caution,
            Some(ValuationConfidence::Low) => ConfidenceTone::Negative,
            None => ConfidenceTone::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_symmetric() {
        assert_eq!(UNDERVALUED_THRESHOLD, -OVERVALUED_THRESHOLD);
    }

    #[test]
    fn negative_zero_reads_as_fair() {
        assert_eq!(ValuationService::valuation_text(-0.0), "Fair market value");
    }
}
