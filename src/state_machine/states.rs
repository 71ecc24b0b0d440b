use std::path::PathBuf;

use crate::models::{AnalysisRequest, TradeRecord};

/// Submission status: at most one request is in flight at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Loading,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "IDLE",
            SubmissionStatus::Loading => "LOADING",
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The single state object owned by the submission driver.
///
/// Mutated only by the transition functions in `transitions.rs` — the
/// parsing logic never touches it. `error` is the one user-visible message
/// slot: replaced on each failure, cleared on each new submission attempt.
/// `results` is replaced wholesale per submission, never merged.
#[derive(Debug)]
pub struct SessionState {
    pub request: Option<AnalysisRequest>,
    pub status: SubmissionStatus,
    pub error: Option<String>,
    pub results: Vec<TradeRecord>,
    pub saved_report: Option<PathBuf>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            request: None,
            status: SubmissionStatus::Idle,
            error: None,
            results: Vec::new(),
            saved_report: None,
        }
    }

    /// The loading gate: true while a submission is outstanding
    pub fn is_loading(&self) -> bool {
        self.status == SubmissionStatus::Loading
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
