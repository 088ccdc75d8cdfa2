//! Simulator view-state
//!
//! Holds the draft claim input and the latest verdict, and serializes runs
//! so at most one assessment is in flight per simulator instance.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use utoipa::ToSchema;

use crate::model::assessment::AssessmentResult;
use crate::model::{ClaimInput, ClaimInputPatch};
use crate::service::assessment::{AssessmentError, ClaimAssessor};

/// Notice stored when a run fails, shown to the user verbatim
pub const ANALYSIS_FAILED_NOTICE: &str = "Analysis failed. Please check your API configuration.";

/// Renderable view of the simulator
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimulatorSnapshot {
    /// Current draft input
    pub input: ClaimInput,
    /// Latest verdict, absent until the first successful run
    pub result: Option<AssessmentResult>,
    /// Whether a run is currently in flight
    pub running: bool,
    /// Failure notice from the most recent run, cleared on success
    pub notice: Option<String>,
}

/// Outcome of a run request
#[derive(Debug)]
pub enum RunOutcome {
    /// The verdict was produced and stored
    Completed(AssessmentResult),
    /// A run was already in flight; no new request was issued
    AlreadyRunning,
    /// The assessment failed; the stored result is unchanged
    Failed(AssessmentError),
    /// A newer run was issued before this one resolved; its verdict was discarded
    Superseded,
}

struct SimulatorState {
    input: ClaimInput,
    result: Option<AssessmentResult>,
    notice: Option<String>,
    running: bool,
    /// Sequence number of the latest issued run
    seq: u64,
}

/// Per-instance simulator state machine
pub struct Simulator {
    assessor: Arc<dyn ClaimAssessor>,
    state: Mutex<SimulatorState>,
}

impl Simulator {
    pub fn new(assessor: Arc<dyn ClaimAssessor>) -> Self {
        Self {
            assessor,
            state: Mutex::new(SimulatorState {
                input: ClaimInput::default(),
                result: None,
                notice: None,
                running: false,
                seq: 0,
            }),
        }
    }

    /// Current renderable state
    pub async fn snapshot(&self) -> SimulatorSnapshot {
        let state = self.state.lock().await;
        SimulatorSnapshot {
            input: state.input.clone(),
            result: state.result.clone(),
            running: state.running,
            notice: state.notice.clone(),
        }
    }

    /// Apply field edits to the draft input
    ///
    /// Edits made while a run is in flight touch only the draft; the
    /// in-flight request keeps the snapshot taken at trigger time.
    pub async fn update_input(&self, patch: ClaimInputPatch) -> ClaimInput {
        let mut state = self.state.lock().await;
        state.input.apply(patch);
        state.input.clone()
    }

    /// Run one assessment over the current input
    ///
    /// No-op while a run is already in flight. Each trigger takes a fresh
    /// sequence number; a completion is applied only if it is still the
    /// latest issued, so a stale verdict can never clobber a newer one.
    pub async fn run(&self) -> RunOutcome {
        let (input, seq) = {
            let mut state = self.state.lock().await;
            if state.running {
                return RunOutcome::AlreadyRunning;
            }
            state.running = true;
            state.seq += 1;
            (state.input.clone(), state.seq)
        };

        tracing::debug!(seq = seq, farmer = %input.farmer_name, "Simulator run started");

        // The lock is not held across the provider call; edits and
        // snapshots proceed mid-flight.
        let outcome = self.assessor.assess(&input).await;

        let mut state = self.state.lock().await;
        state.running = false;

        if seq != state.seq {
            tracing::warn!(
                seq = seq,
                latest = state.seq,
                "Discarding stale assessment result"
            );
            return RunOutcome::Superseded;
        }

        match outcome {
            Ok(result) => {
                tracing::info!(
                    seq = seq,
                    classification = ?result.fraud_classification,
                    risk_score = result.risk_score,
                    "Simulator run completed"
                );
                state.notice = None;
                state.result = Some(result.clone());
                RunOutcome::Completed(result)
            }
            Err(e) => {
                tracing::error!(seq = seq, error = %e, "Simulator run failed");
                state.notice = Some(ANALYSIS_FAILED_NOTICE.to_string());
                RunOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex as StdMutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use crate::model::assessment::FraudClassification;

    fn fraudulent_verdict() -> AssessmentResult {
        AssessmentResult {
            fraud_classification: FraudClassification::Fraudulent,
            risk_score: 82.0,
            reasoning: "High yield loss reported against a negligible weather anomaly, \
                        with multiple prior claims."
                .to_string(),
            confidence: 0.88,
            recommended_action: "Escalate to a field investigator before payout.".to_string(),
        }
    }

    enum StubMode {
        Verdict(AssessmentResult),
        Unavailable,
        Malformed,
        /// Holds the call open until the gate is notified
        Gated(Arc<Notify>, AssessmentResult),
    }

    struct StubAssessor {
        mode: StdMutex<StubMode>,
        calls: AtomicUsize,
        seen_inputs: StdMutex<Vec<ClaimInput>>,
    }

    impl StubAssessor {
        fn new(mode: StubMode) -> Arc<Self> {
            Arc::new(Self {
                mode: StdMutex::new(mode),
                calls: AtomicUsize::new(0),
                seen_inputs: StdMutex::new(Vec::new()),
            })
        }

        fn set_mode(&self, mode: StubMode) {
            *self.mode.lock().unwrap() = mode;
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ClaimAssessor for StubAssessor {
        async fn assess(&self, input: &ClaimInput) -> Result<AssessmentResult, AssessmentError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen_inputs.lock().unwrap().push(input.clone());

            let gated = match &*self.mode.lock().unwrap() {
                StubMode::Verdict(v) => return Ok(v.clone()),
                StubMode::Unavailable => {
                    return Err(AssessmentError::ServiceUnavailable(
                        "connection refused".to_string(),
                    ));
                }
                StubMode::Malformed => {
                    return Err(AssessmentError::MalformedResponse(
                        "response was not valid JSON".to_string(),
                    ));
                }
                StubMode::Gated(gate, v) => (Arc::clone(gate), v.clone()),
            };

            gated.0.notified().await;
            Ok(gated.1)
        }
    }

    async fn wait_until_running(simulator: &Simulator) {
        while !simulator.snapshot().await.running {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn run_stores_the_canned_fraudulent_verdict() {
        let stub = StubAssessor::new(StubMode::Verdict(fraudulent_verdict()));
        let simulator = Simulator::new(stub.clone());

        let outcome = simulator.run().await;
        assert!(matches!(outcome, RunOutcome::Completed(_)));

        let snapshot = simulator.snapshot().await;
        assert_eq!(snapshot.result, Some(fraudulent_verdict()));
        assert!(!snapshot.running);
        assert!(snapshot.notice.is_none());

        // The high-loss / low-anomaly / repeat-claimant default draft is
        // what the assessor must have been handed
        let seen = stub.seen_inputs.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].farmer_name, "Emily Vance");
        assert_eq!(seen[0].crop_type, "Corn");
        assert_eq!(seen[0].claimed_amount, 25000.0);
        assert_eq!(seen[0].yield_loss_percentage, 90.0);
        assert_eq!(seen[0].weather_anomaly_score, 0.1);
        assert_eq!(seen[0].previous_claims, 3);
    }

    #[tokio::test]
    async fn failure_surfaces_notice_and_keeps_previous_result() {
        let stub = StubAssessor::new(StubMode::Verdict(fraudulent_verdict()));
        let simulator = Simulator::new(stub.clone());

        simulator.run().await;
        stub.set_mode(StubMode::Unavailable);

        let outcome = simulator.run().await;
        assert!(matches!(
            outcome,
            RunOutcome::Failed(AssessmentError::ServiceUnavailable(_))
        ));

        let snapshot = simulator.snapshot().await;
        // The verdict from the first run survives the failed attempt
        assert_eq!(snapshot.result, Some(fraudulent_verdict()));
        assert_eq!(snapshot.notice.as_deref(), Some(ANALYSIS_FAILED_NOTICE));
        assert!(!snapshot.running);
    }

    #[tokio::test]
    async fn malformed_response_surfaces_notice_without_result() {
        let stub = StubAssessor::new(StubMode::Malformed);
        let simulator = Simulator::new(stub);

        let outcome = simulator.run().await;
        assert!(matches!(
            outcome,
            RunOutcome::Failed(AssessmentError::MalformedResponse(_))
        ));

        let snapshot = simulator.snapshot().await;
        assert!(snapshot.result.is_none());
        assert_eq!(snapshot.notice.as_deref(), Some(ANALYSIS_FAILED_NOTICE));
    }

    #[tokio::test]
    async fn second_run_while_in_flight_is_a_no_op() {
        let gate = Arc::new(Notify::new());
        let stub = StubAssessor::new(StubMode::Gated(gate.clone(), fraudulent_verdict()));
        let simulator = Arc::new(Simulator::new(stub.clone()));

        let first = tokio::spawn({
            let simulator = Arc::clone(&simulator);
            async move { simulator.run().await }
        });

        wait_until_running(&simulator).await;

        let second = simulator.run().await;
        assert!(matches!(second, RunOutcome::AlreadyRunning));
        assert_eq!(stub.calls(), 1);

        gate.notify_one();
        let first = first.await.unwrap();
        assert!(matches!(first, RunOutcome::Completed(_)));
        assert_eq!(stub.calls(), 1);
        assert!(simulator.snapshot().await.result.is_some());
    }

    #[tokio::test]
    async fn edits_during_a_run_do_not_touch_the_in_flight_input() {
        let gate = Arc::new(Notify::new());
        let stub = StubAssessor::new(StubMode::Gated(gate.clone(), fraudulent_verdict()));
        let simulator = Arc::new(Simulator::new(stub.clone()));

        let run = tokio::spawn({
            let simulator = Arc::clone(&simulator);
            async move { simulator.run().await }
        });

        wait_until_running(&simulator).await;

        simulator
            .update_input(ClaimInputPatch {
                farmer_name: Some("Bob Johnson".to_string()),
                ..ClaimInputPatch::default()
            })
            .await;

        gate.notify_one();
        run.await.unwrap();

        // The request used the snapshot taken at trigger time
        let seen = stub.seen_inputs.lock().unwrap();
        assert_eq!(seen[0].farmer_name, "Emily Vance");
        // The draft kept the edit
        drop(seen);
        assert_eq!(
            simulator.snapshot().await.input.farmer_name,
            "Bob Johnson"
        );
    }
}
