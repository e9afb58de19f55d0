//! Presentation helpers for verification results.

use std::fmt;

/// Styling tone for a verdict label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictTone {
    Positive,
    Negative,
    Neutral,
}

impl VerdictTone {
    /// Tailwind text color class for the tone
    pub fn css_class(&self) -> &'static str {
        match self {
            VerdictTone::Positive => "text-green-600",
            VerdictTone::Negative => "text-red-600",
            VerdictTone::Neutral => "text-yellow-600",
        }
    }
}

/// Confidence bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
        };
        f.write_str(label)
    }
}

/// Format a 0-1 confidence as a whole percentage, e.g. `0.8034` -> `"80%"`
pub fn format_confidence(confidence: f64) -> String {
    format!("{}%", (confidence * 100.0).round() as i64)
}

/// Classify a verdict label for styling
pub fn verdict_color(verdict: &str) -> VerdictTone {
    match verdict.to_lowercase().as_str() {
        "reliable" | "true" => VerdictTone::Positive,
        "misinformation" | "fake" => VerdictTone::Negative,
        _ => VerdictTone::Neutral,
    }
}

/// Bucket a confidence; each tier includes its lower bound
pub fn confidence_level(confidence: f64) -> ConfidenceLevel {
    if confidence >= 0.8 {
        ConfidenceLevel::High
    } else if confidence >= 0.6 {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(0.8034), "80%");
        assert_eq!(format_confidence(0.0), "0%");
        assert_eq!(format_confidence(1.0), "100%");
        assert_eq!(format_confidence(0.555), "56%");
    }

    #[test]
    fn test_confidence_level_boundaries() {
        assert_eq!(confidence_level(0.8), ConfidenceLevel::High);
        assert_eq!(confidence_level(0.79), ConfidenceLevel::Medium);
        assert_eq!(confidence_level(0.6), ConfidenceLevel::Medium);
        assert_eq!(confidence_level(0.59), ConfidenceLevel::Low);
        assert_eq!(confidence_level(0.8).to_string(), "High");
    }

    #[test]
    fn test_verdict_color() {
        assert_eq!(verdict_color("Reliable"), VerdictTone::Positive);
        assert_eq!(verdict_color("TRUE"), VerdictTone::Positive);
        assert_eq!(verdict_color("MISINFORMATION"), VerdictTone::Negative);
        assert_eq!(verdict_color("fake"), VerdictTone::Negative);
        assert_eq!(verdict_color("uncertain"), VerdictTone::Neutral);
        assert_eq!(verdict_color("unknown").css_class(), "text-yellow-600");
    }
}
