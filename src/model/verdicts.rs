//! Wire types for LLM-produced claim verdicts

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Claim fraud verdict as returned by the LLM
///
/// Every field is mandatory and the derived schema is handed to the
/// provider as the response constraint. A payload missing a field, adding
/// unknown fields, or mistyping a value fails deserialization instead of
/// producing a partial verdict.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExtractedVerdict {
    pub fraud_classification: ExtractedClassification,

    #[schemars(description = "Fraud risk score from 0 to 100")]
    pub risk_score: f64,

    #[schemars(description = "Explanation of the factors behind the verdict")]
    pub reasoning: String,

    #[schemars(description = "Confidence in the classification, from 0.0 to 1.0")]
    pub confidence: f64,

    #[schemars(description = "Next step recommended to the insurance officer")]
    pub recommended_action: String,
}

/// Two-value classification enum the provider must choose from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ExtractedClassification {
    Genuine,
    Fraudulent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_missing_a_field_is_rejected() {
        // recommendedAction omitted
        let payload = r#"{
            "fraudClassification": "Fraudulent",
            "riskScore": 82,
            "reasoning": "High loss with negligible weather anomaly.",
            "confidence": 0.88
        }"#;

        assert!(serde_json::from_str::<ExtractedVerdict>(payload).is_err());
    }

    #[test]
    fn payload_with_unknown_classification_is_rejected() {
        let payload = r#"{
            "fraudClassification": "Suspicious",
            "riskScore": 50,
            "reasoning": "n/a",
            "confidence": 0.5,
            "recommendedAction": "n/a"
        }"#;

        assert!(serde_json::from_str::<ExtractedVerdict>(payload).is_err());
    }

    #[test]
    fn conforming_payload_deserializes() {
        let payload = r#"{
            "fraudClassification": "Genuine",
            "riskScore": 12.5,
            "reasoning": "Loss is consistent with the reported weather anomaly.",
            "confidence": 0.91,
            "recommendedAction": "Route through the express payout path."
        }"#;

        let verdict: ExtractedVerdict = serde_json::from_str(payload).unwrap();
        assert_eq!(verdict.fraud_classification, ExtractedClassification::Genuine);
        assert_eq!(verdict.risk_score, 12.5);
    }
}
