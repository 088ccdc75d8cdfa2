pub mod assessment;
pub mod claim;
pub mod config;
pub mod metrics;
pub mod verdicts;

pub use assessment::{AssessmentResult, FraudClassification};
pub use claim::{ClaimInput, ClaimInputPatch, ClaimRecord, ClaimStatus};
pub use config::{AssessmentConfig, Config};
pub use metrics::ModelMetric;
