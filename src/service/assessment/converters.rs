//! Converters from extracted LLM models to domain models

use crate::model::assessment::{AssessmentResult, FraudClassification};
use crate::model::verdicts::{ExtractedClassification, ExtractedVerdict};

/// Convert a validated verdict to the domain assessment result
pub fn convert_verdict(extracted: ExtractedVerdict) -> AssessmentResult {
    AssessmentResult {
        fraud_classification: convert_classification(extracted.fraud_classification),
        risk_score: extracted.risk_score,
        reasoning: extracted.reasoning,
        confidence: extracted.confidence,
        recommended_action: extracted.recommended_action,
    }
}

fn convert_classification(extracted: ExtractedClassification) -> FraudClassification {
    match extracted {
        ExtractedClassification::Genuine => FraudClassification::Genuine,
        ExtractedClassification::Fraudulent => FraudClassification::Fraudulent,
    }
}
