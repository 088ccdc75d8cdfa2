//! Prompts for claim fraud assessment

use crate::model::ClaimInput;

/// System prompt for claim analysis
pub const ANALYSIS_SYSTEM_PROMPT: &str = r#"You are a fraud analyst for an agricultural insurance provider.

Your role is to assess individual crop-loss claims for potential fraud
using only the claim parameters supplied with each request.

You must:
- Base the verdict strictly on the provided parameters
- Weigh reported yield loss against the reported weather anomaly
- Weigh the frequency of previous claims
- Weigh the claimed amount against norms for the crop type
- Explain the verdict in plain language for the reviewing officer

Do not:
- Invent weather events, farm history, or regional context
- Assume fraud from a single weak indicator

Your output must be structured JSON only and conform to the requested schema."#;

/// Build the analysis prompt from the claim parameters
pub fn build_claim_prompt(input: &ClaimInput) -> String {
    format!(
        r#"Analyze this agricultural insurance claim for potential fraud based on the following parameters:
Farmer: {farmer}
Crop: {crop}
Claimed Amount: ${amount}
Yield Loss: {loss}%
Weather Anomaly (0-1 score): {anomaly}
Previous Claims: {previous}

In your analysis, consider:
1. Discrepancy between Yield Loss and Weather Anomaly (High loss with low anomaly is suspicious).
2. Frequent previous claims.
3. Claim amount relative to crop type.

Return the result in JSON format."#,
        farmer = input.farmer_name,
        crop = input.crop_type,
        amount = input.claimed_amount,
        loss = input.yield_loss_percentage,
        anomaly = input.weather_anomaly_score,
        previous = input.previous_claims
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_states_all_six_claim_fields() {
        let input = ClaimInput {
            farmer_name: "Alice Smith".to_string(),
            crop_type: "Soybeans".to_string(),
            claimed_amount: 45000.0,
            yield_loss_percentage: 95.0,
            weather_anomaly_score: 0.2,
            previous_claims: 4,
        };

        let prompt = build_claim_prompt(&input);

        assert!(prompt.contains("Farmer: Alice Smith"));
        assert!(prompt.contains("Crop: Soybeans"));
        assert!(prompt.contains("Claimed Amount: $45000"));
        assert!(prompt.contains("Yield Loss: 95%"));
        assert!(prompt.contains("Weather Anomaly (0-1 score): 0.2"));
        assert!(prompt.contains("Previous Claims: 4"));
    }

    #[test]
    fn prompt_carries_the_analytic_guidance() {
        let prompt = build_claim_prompt(&ClaimInput::default());

        assert!(prompt.contains("High loss with low anomaly is suspicious"));
        assert!(prompt.contains("Frequent previous claims"));
        assert!(prompt.contains("Claim amount relative to crop type"));
    }
}
