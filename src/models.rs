use serde::{Deserialize, Serialize};

/// Class probabilities reported by the text model
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Probabilities {
    /// Probability the text is reliable
    pub reliable: f64,

    /// Probability the text is misinformation
    pub misinformation: f64,
}

/// Text-side analysis of a verification
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TextAnalysis {
    /// Predicted label (e.g. "reliable", "misinformation")
    pub prediction: String,

    /// Model confidence in the prediction (0-1 range)
    pub confidence: f64,

    /// Probability distribution over the two labels
    pub probabilities: Probabilities,

    /// Human-readable reasoning
    pub explanation: String,

    /// Detected language code
    pub language: String,
}

/// A near-duplicate reference image
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SimilarityMatch {
    pub filename: String,
    pub similarity: f64,
}

/// Image-side analysis of a verification
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ImageAnalysis {
    /// Whether the image appears altered
    pub is_manipulated: bool,

    /// Model confidence (0-1 range)
    pub confidence: f64,

    /// Category of alteration; absent or null for clean images
    #[serde(default)]
    pub manipulation_type: Option<String>,

    /// Matches ordered as reported by the backend
    #[serde(default)]
    pub similarity_matches: Vec<SimilarityMatch>,

    /// Human-readable reasoning
    pub explanation: String,
}

/// A supporting or refuting source
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Evidence {
    pub source: String,
    pub credibility: f64,
    pub excerpt: String,
    pub url: String,
}

/// Unified outcome of any verification call
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct VerificationResult {
    /// Top-level verdict label (reliable, misinformation, uncertain, ...)
    pub overall_verdict: String,

    /// Overall confidence (0-1 range)
    pub confidence: f64,

    /// Present when text was submitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_analysis: Option<TextAnalysis>,

    /// Present when an image was submitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_analysis: Option<ImageAnalysis>,

    #[serde(default)]
    pub evidence: Vec<Evidence>,

    pub explanation: String,

    /// Backend processing time in seconds
    pub processing_time: f64,
}

impl VerificationResult {
    /// Confidence rendered as a percentage, e.g. "80%"
    pub fn confidence_label(&self) -> String {
        crate::format::format_confidence(self.confidence)
    }

    /// Confidence bucketed into High/Medium/Low
    pub fn confidence_level(&self) -> crate::format::ConfidenceLevel {
        crate::format::confidence_level(self.confidence)
    }

    /// Styling tone for the verdict
    pub fn verdict_tone(&self) -> crate::format::VerdictTone {
        crate::format::verdict_color(&self.overall_verdict)
    }
}

/// Failure body reported by the backend
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ApiError {
    /// Human-readable message
    pub detail: String,

    /// HTTP status of the failed response
    pub status_code: u16,
}

/// Response of the health endpoint
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

/// Models backing the verification service
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ModelInfo {
    pub text_model: String,
    pub image_model: String,
    pub embedding_model: String,
}

/// Response of the stats endpoint
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SystemStats {
    pub status: String,

    /// Language codes the text model accepts
    #[serde(default)]
    pub supported_languages: Vec<String>,

    /// Upload formats the image model accepts
    #[serde(default)]
    pub supported_formats: Vec<String>,

    pub model_info: ModelInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_only_result_deserialization() {
        let json_data = json!({
            "overall_verdict": "misinformation",
            "confidence": 0.91,
            "text_analysis": {
                "prediction": "misinformation",
                "confidence": 0.91,
                "probabilities": { "reliable": 0.09, "misinformation": 0.91 },
                "explanation": "Claim contradicts official sources",
                "language": "hi"
            },
            "evidence": [
                {
                    "source": "PIB Fact Check",
                    "credibility": 0.95,
                    "excerpt": "The viral message is fake.",
                    "url": "https://pib.gov.in/factcheck"
                }
            ],
            "explanation": "Likely misinformation",
            "processing_time": 1.42
        });

        let result: VerificationResult = serde_json::from_value(json_data).unwrap();

        assert_eq!(result.overall_verdict, "misinformation");
        assert!(result.image_analysis.is_none());

        let text = result.text_analysis.unwrap();
        assert_eq!(text.language, "hi");
        assert_eq!(text.probabilities.misinformation, 0.91);

        assert_eq!(result.evidence.len(), 1);
        assert_eq!(result.evidence[0].source, "PIB Fact Check");
    }

    #[test]
    fn test_missing_evidence_defaults_to_empty() {
        let json_data = json!({
            "overall_verdict": "uncertain",
            "confidence": 0.5,
            "image_analysis": {
                "is_manipulated": false,
                "confidence": 0.5,
                "manipulation_type": "none",
                "explanation": "No edits found"
            },
            "explanation": "",
            "processing_time": 0.2
        });

        let result: VerificationResult = serde_json::from_value(json_data).unwrap();

        assert!(result.evidence.is_empty());
        assert!(result
            .image_analysis
            .unwrap()
            .similarity_matches
            .is_empty());
    }

    #[test]
    fn test_clean_image_has_no_manipulation_type() {
        let json_data = json!({
            "is_manipulated": false,
            "confidence": 0.97,
            "manipulation_type": null,
            "similarity_matches": [],
            "explanation": "No signs of editing"
        });

        let analysis: ImageAnalysis = serde_json::from_value(json_data).unwrap();
        assert!(!analysis.is_manipulated);
        assert_eq!(analysis.manipulation_type, None);

        let without_field: ImageAnalysis = serde_json::from_value(json!({
            "is_manipulated": false,
            "confidence": 0.97,
            "explanation": "No signs of editing"
        }))
        .unwrap();
        assert_eq!(without_field.manipulation_type, None);
    }

    #[test]
    fn test_stats_deserialization() {
        let json_data = json!({
            "status": "ok",
            "supported_languages": ["en", "hi", "ta"],
            "supported_formats": ["jpeg", "png"],
            "model_info": {
                "text_model": "xlm-roberta",
                "image_model": "efficientnet",
                "embedding_model": "clip"
            }
        });

        let stats: SystemStats = serde_json::from_value(json_data).unwrap();

        assert_eq!(stats.supported_languages, vec!["en", "hi", "ta"]);
        assert_eq!(stats.model_info.embedding_model, "clip");
    }
}
