use crate::models::AnalysisRequest;
use crate::services::PipelineOutcome;
use crate::state_machine::{SessionState, SubmissionStatus};
use crate::utils::log_state_transition;

impl SessionState {
    /// submit-start: enter Loading and reset the per-submission state.
    ///
    /// Returns `false` without touching anything when a submission is
    /// already in flight — the loading gate. The error slot, results, and
    /// saved path are cleared so a new attempt never shows stale output.
    pub fn submit_start(&mut self, request: AnalysisRequest) -> bool {
        if self.is_loading() {
            return false;
        }

        log_state_transition(
            self.status.as_str(),
            SubmissionStatus::Loading.as_str(),
            &format!("submitting analysis request for {}", request.ticker),
        );

        self.status = SubmissionStatus::Loading;
        self.error = None;
        self.results.clear();
        self.saved_report = None;
        self.request = Some(request);
        true
    }

    /// submit-success: back to Idle with the new preview state
    pub fn submit_success(&mut self, outcome: PipelineOutcome) {
        log_state_transition(
            self.status.as_str(),
            SubmissionStatus::Idle.as_str(),
            &format!("submission succeeded with {} trade rows", outcome.trades.len()),
        );

        self.status = SubmissionStatus::Idle;
        self.results = outcome.trades;
        self.saved_report = Some(outcome.saved_path);
    }

    /// submit-failure: back to Idle with the user-visible message
    pub fn submit_failure(&mut self, message: String) {
        log_state_transition(
            self.status.as_str(),
            SubmissionStatus::Idle.as_str(),
            &format!("submission failed: {}", message),
        );

        self.status = SubmissionStatus::Idle;
        self.error = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TradeRecord;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn request(ticker: &str) -> AnalysisRequest {
        AnalysisRequest::new(
            ticker,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            200.0,
            2.0,
            10,
        )
    }

    fn outcome(rows: usize) -> PipelineOutcome {
        PipelineOutcome {
            saved_path: PathBuf::from("AAPL_analysis.csv"),
            trades: (0..rows)
                .map(|i| TradeRecord {
                    date: format!("2024-01-{:02}", i + 1),
                    entry_price: 100.0,
                    exit_price: 102.5,
                    volume_ratio: 2.3,
                    daily_return: 2.5,
                    total_return: 2.5,
                })
                .collect(),
        }
    }

    #[test]
    fn test_gate_blocks_while_loading() {
        let mut state = SessionState::new();
        assert!(state.submit_start(request("AAPL")));
        assert!(state.is_loading());

        // A second submission is refused and the state is untouched
        assert!(!state.submit_start(request("MSFT")));
        assert_eq!(state.request.as_ref().unwrap().ticker, "AAPL");
    }

    #[test]
    fn test_gate_released_after_success() {
        let mut state = SessionState::new();
        state.submit_start(request("AAPL"));
        state.submit_success(outcome(2));

        assert!(!state.is_loading());
        assert_eq!(state.results.len(), 2);
        assert!(state.error.is_none());
        assert!(state.saved_report.is_some());
    }

    #[test]
    fn test_gate_released_after_failure() {
        let mut state = SessionState::new();
        state.submit_start(request("AAPL"));
        state.submit_failure("Invalid ticker".to_string());

        assert!(!state.is_loading());
        assert_eq!(state.error.as_deref(), Some("Invalid ticker"));
        assert!(state.results.is_empty());
    }

    #[test]
    fn test_new_submission_clears_prior_state() {
        let mut state = SessionState::new();
        state.submit_start(request("AAPL"));
        state.submit_failure("Invalid ticker".to_string());

        state.submit_start(request("MSFT"));
        assert!(state.error.is_none());
        assert!(state.results.is_empty());
        assert!(state.saved_report.is_none());
        assert_eq!(state.request.as_ref().unwrap().ticker, "MSFT");
    }

    #[test]
    fn test_results_replaced_wholesale() {
        let mut state = SessionState::new();
        state.submit_start(request("AAPL"));
        state.submit_success(outcome(3));

        state.submit_start(request("AAPL"));
        state.submit_success(outcome(1));
        assert_eq!(state.results.len(), 1);
    }
}
