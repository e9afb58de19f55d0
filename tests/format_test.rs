use mitraverify::{
    confidence_level, format_confidence, verdict_color, ConfidenceLevel, VerdictTone,
    VerificationResult,
};
use serde_json::json;

#[test]
fn test_format_confidence_rounds() {
    assert_eq!(format_confidence(0.8034), "80%");
    assert_eq!(format_confidence(0.996), "100%");
    assert_eq!(format_confidence(0.004), "0%");
}

#[test]
fn test_confidence_levels() {
    assert_eq!(confidence_level(0.95), ConfidenceLevel::High);
    assert_eq!(confidence_level(0.8), ConfidenceLevel::High);
    assert_eq!(confidence_level(0.7), ConfidenceLevel::Medium);
    assert_eq!(confidence_level(0.59), ConfidenceLevel::Low);
    assert_eq!(confidence_level(0.59).to_string(), "Low");
}

#[test]
fn test_verdict_color() {
    assert_eq!(verdict_color("MISINFORMATION"), VerdictTone::Negative);
    assert_eq!(verdict_color("fake"), VerdictTone::Negative);
    assert_eq!(verdict_color("reliable"), VerdictTone::Positive);
    assert_eq!(verdict_color("unknown"), VerdictTone::Neutral);
    assert_eq!(verdict_color(""), VerdictTone::Neutral);

    assert_eq!(VerdictTone::Positive.css_class(), "text-green-600");
    assert_eq!(VerdictTone::Negative.css_class(), "text-red-600");
}

#[test]
fn test_result_helpers() {
    let result: VerificationResult = serde_json::from_value(json!({
        "overall_verdict": "Reliable",
        "confidence": 0.634,
        "evidence": [],
        "explanation": "Matches trusted reporting",
        "processing_time": 0.8
    }))
    .unwrap();

    assert_eq!(result.confidence_label(), "63%");
    assert_eq!(result.confidence_level(), ConfidenceLevel::Medium);
    assert_eq!(result.verdict_tone(), VerdictTone::Positive);
}
