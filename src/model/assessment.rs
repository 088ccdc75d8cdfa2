//! Domain model for claim fraud verdicts

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Binary verdict on a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum FraudClassification {
    Genuine,
    Fraudulent,
}

/// Validated assessment of a single claim
///
/// Only ever produced from a provider payload that deserialized into the
/// full field set and passed range validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub fraud_classification: FraudClassification,
    /// Fraud likelihood from 0 to 100, feeding downstream triage
    pub risk_score: f64,
    /// Plain-language explanation for the reviewing officer
    pub reasoning: String,
    /// Model confidence in the verdict, 0.0 to 1.0
    pub confidence: f64,
    pub recommended_action: String,
}
