//! Validation logic for LLM-produced claim verdicts
//!
//! The provider is not trusted to respect the documented numeric ranges;
//! out-of-range values are rejected instead of passed through.

use crate::model::verdicts::ExtractedVerdict;

/// Result of verdict validation
#[derive(Debug)]
pub struct VerdictValidationResult {
    /// Whether the verdict passed validation
    pub is_valid: bool,
    /// Critical errors that indicate invalid output
    pub errors: Vec<String>,
    /// Warnings that indicate potential quality issues
    pub warnings: Vec<String>,
}

impl VerdictValidationResult {
    /// Create a new validation result with no issues
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error to the validation result
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Add a warning to the validation result
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

/// Validate a verdict for range conformance and completeness
///
/// Checks:
/// 1. risk_score lies within [0, 100]
/// 2. confidence lies within [0.0, 1.0]
/// 3. reasoning and recommended_action carry usable text (warning only)
pub fn validate_extracted_verdict(verdict: &ExtractedVerdict) -> VerdictValidationResult {
    let mut result = VerdictValidationResult::valid();

    // NaN fails both range checks
    if !(0.0..=100.0).contains(&verdict.risk_score) {
        result.add_error(format!(
            "risk score {} outside documented range [0, 100]",
            verdict.risk_score
        ));
    }

    if !(0.0..=1.0).contains(&verdict.confidence) {
        result.add_error(format!(
            "confidence {} outside documented range [0.0, 1.0]",
            verdict.confidence
        ));
    }

    if verdict.reasoning.trim().is_empty() {
        result.add_warning("verdict has no reasoning text".to_string());
    } else if verdict.reasoning.trim().len() < 20 {
        result.add_warning(format!(
            "reasoning is very short ({} chars)",
            verdict.reasoning.len()
        ));
    }

    if verdict.recommended_action.trim().is_empty() {
        result.add_warning("verdict has no recommended action".to_string());
    }

    result
}
