pub mod states;
pub mod transitions;

pub use states::*;

use crate::config::ClientConfig;
use crate::models::AnalysisRequest;
use crate::services::{AnalysisClient, AnalysisRequestError, PipelineOutcome, ResponsePipeline};
use crate::utils::Logger;

/// Generic message for failures where the service never reported a detail
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate report. Please try again.";

/// Drives one submission at a time through the submitter and the response
/// pipeline, funneling every failure into the single user-visible error slot.
///
/// The network call and the body handling are sequenced, never raced; there
/// is no cancellation. `submit` takes `&mut self`, so a second in-flight
/// submission on the same session is already unrepresentable — the loading
/// gate in [`SessionState::submit_start`] enforces the same rule at the
/// state level and is what callers observe.
pub struct SubmissionSession {
    client: AnalysisClient,
    pipeline: ResponsePipeline,
    state: SessionState,
    logger: Logger,
}

impl SubmissionSession {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: AnalysisClient::new(config.base_url.clone()),
            pipeline: ResponsePipeline::new(config.output_dir.clone()),
            state: SessionState::new(),
            logger: Logger::new("SESSION"),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Run one full submission: submit-start, network call, download + parse,
    /// then submit-success or submit-failure. The gate is released on every
    /// path; after this returns, the session is never left Loading.
    pub async fn submit(&mut self, request: AnalysisRequest) -> &SessionState {
        if !self.state.submit_start(request.clone()) {
            self.logger
                .warn("Submission already in flight, ignoring request");
            return &self.state;
        }

        match self.run_submission(&request).await {
            Ok(outcome) => self.state.submit_success(outcome),
            Err(message) => self.state.submit_failure(message),
        }

        &self.state
    }

    /// The fallible part of a submission, with errors already mapped to the
    /// user-visible string: service details pass through verbatim, transport
    /// and local I/O failures collapse to the generic message.
    async fn run_submission(&self, request: &AnalysisRequest) -> Result<PipelineOutcome, String> {
        let report = self.client.analyze(request).await.map_err(|err| match err {
            AnalysisRequestError::Service(message) => message,
            AnalysisRequestError::Transport(transport_err) => {
                self.logger
                    .error_with_error("Transport failure", &transport_err);
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        })?;

        self.pipeline
            .process(&request.ticker, &report)
            .map_err(|err| {
                self.logger
                    .error(&format!("Response pipeline failed: {}", err));
                GENERIC_FAILURE_MESSAGE.to_string()
            })
    }
}
