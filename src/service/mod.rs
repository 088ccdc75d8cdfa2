pub mod assessment;
pub mod llm;
pub mod simulator;

pub use assessment::ClaimAssessmentService;
pub use llm::LlmClient;
pub use simulator::Simulator;
