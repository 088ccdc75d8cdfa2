//! Claim input and demo claim records for the fraud simulator

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Draft claim parameters held by the simulator
///
/// Numeric fields are unvalidated passthrough: the form restricts entry to
/// the intended ranges, the model does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimInput {
    pub farmer_name: String,
    /// Suggested set is Corn, Wheat, Soybeans or Cotton; any string is accepted
    pub crop_type: String,
    /// Claimed payout in dollars
    pub claimed_amount: f64,
    /// Reported yield loss, intended range 0-100
    pub yield_loss_percentage: f64,
    /// Normalized local weather anomaly, intended range 0.0-1.0
    pub weather_anomaly_score: f64,
    /// Prior claims filed over the last three years
    pub previous_claims: u32,
}

impl Default for ClaimInput {
    fn default() -> Self {
        Self {
            farmer_name: "Emily Vance".to_string(),
            crop_type: "Corn".to_string(),
            claimed_amount: 25000.0,
            yield_loss_percentage: 90.0,
            weather_anomaly_score: 0.1,
            previous_claims: 3,
        }
    }
}

/// Field-level overlay applied to the draft input
///
/// Absent fields leave the draft untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimInputPatch {
    pub farmer_name: Option<String>,
    pub crop_type: Option<String>,
    pub claimed_amount: Option<f64>,
    pub yield_loss_percentage: Option<f64>,
    pub weather_anomaly_score: Option<f64>,
    pub previous_claims: Option<u32>,
}

impl ClaimInput {
    /// Apply a partial edit to the draft
    pub fn apply(&mut self, patch: ClaimInputPatch) {
        if let Some(v) = patch.farmer_name {
            self.farmer_name = v;
        }
        if let Some(v) = patch.crop_type {
            self.crop_type = v;
        }
        if let Some(v) = patch.claimed_amount {
            self.claimed_amount = v;
        }
        if let Some(v) = patch.yield_loss_percentage {
            self.yield_loss_percentage = v;
        }
        if let Some(v) = patch.weather_anomaly_score {
            self.weather_anomaly_score = v;
        }
        if let Some(v) = patch.previous_claims {
            self.previous_claims = v;
        }
    }
}

/// Review status of a historical claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ClaimStatus {
    Pending,
    Flagged,
    Approved,
    Rejected,
}

/// Historical claim shown in the demo claims table
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRecord {
    pub claim_id: String,
    pub farmer_name: String,
    pub crop_type: String,
    pub region: String,
    pub claimed_amount: f64,
    pub yield_loss_percentage: f64,
    pub weather_anomaly_score: f64,
    pub previous_claims: u32,
    pub status: ClaimStatus,
}

/// Canned claim history served to the marketing page
pub fn sample_claims() -> Vec<ClaimRecord> {
    vec![
        ClaimRecord {
            claim_id: "CLM001".to_string(),
            farmer_name: "John Doe".to_string(),
            crop_type: "Wheat".to_string(),
            region: "Midwest".to_string(),
            claimed_amount: 12000.0,
            yield_loss_percentage: 85.0,
            weather_anomaly_score: 0.2,
            previous_claims: 0,
            status: ClaimStatus::Approved,
        },
        ClaimRecord {
            claim_id: "CLM002".to_string(),
            farmer_name: "Alice Smith".to_string(),
            crop_type: "Corn".to_string(),
            region: "Central Valley".to_string(),
            claimed_amount: 45000.0,
            yield_loss_percentage: 95.0,
            weather_anomaly_score: 0.1,
            previous_claims: 4,
            status: ClaimStatus::Flagged,
        },
        ClaimRecord {
            claim_id: "CLM003".to_string(),
            farmer_name: "Bob Johnson".to_string(),
            crop_type: "Soybeans".to_string(),
            region: "Southern Delta".to_string(),
            claimed_amount: 8000.0,
            yield_loss_percentage: 30.0,
            weather_anomaly_score: 0.9,
            previous_claims: 1,
            status: ClaimStatus::Pending,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_overrides_only_present_fields() {
        let mut input = ClaimInput::default();
        input.apply(ClaimInputPatch {
            farmer_name: Some("Alice Smith".to_string()),
            claimed_amount: Some(45000.0),
            ..ClaimInputPatch::default()
        });

        assert_eq!(input.farmer_name, "Alice Smith");
        assert_eq!(input.claimed_amount, 45000.0);
        // Untouched fields keep the draft values
        assert_eq!(input.crop_type, "Corn");
        assert_eq!(input.yield_loss_percentage, 90.0);
        assert_eq!(input.previous_claims, 3);
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut input = ClaimInput::default();
        input.apply(ClaimInputPatch::default());
        assert_eq!(input, ClaimInput::default());
    }

    #[test]
    fn input_serializes_with_camel_case_field_names() {
        let json = serde_json::to_value(ClaimInput::default()).unwrap();
        assert_eq!(json["farmerName"], "Emily Vance");
        assert_eq!(json["claimedAmount"], 25000.0);
        assert_eq!(json["weatherAnomalyScore"], 0.1);
    }
}
