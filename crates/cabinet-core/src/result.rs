//! Dispatch results

use cabinet_tools::CallTrace;
use serde::{Deserialize, Serialize};

/// Terminal state of one dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchStatus {
    /// The model produced a final answer
    Answered,
    /// The backend returned a stop condition the loop does not handle
    UnexpectedStop,
    /// The iteration ceiling was reached without a final answer
    Exhausted,
    /// The configured deadline elapsed before resolution
    DeadlineExceeded,
}

/// Result of one dispatch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchResult {
    /// Terminal state
    pub status: DispatchStatus,
    /// Final answer, present only when answered
    pub answer: Option<String>,
    /// Error description for non-answered states
    pub error: Option<String>,
    /// Every tool invocation attempted, in request order
    pub call_trace: CallTrace,
    /// Model round-trips consumed
    pub iterations: usize,
}

impl DispatchResult {
    /// Successful completion
    #[must_use]
    pub fn answered(answer: String, call_trace: CallTrace, iterations: usize) -> Self {
        Self {
            status: DispatchStatus::Answered,
            answer: Some(answer),
            error: None,
            call_trace,
            iterations,
        }
    }

    /// Fatal: the backend stopped for a reason the loop does not handle
    #[must_use]
    pub fn unexpected_stop(reason: &str, call_trace: CallTrace, iterations: usize) -> Self {
        Self {
            status: DispatchStatus::UnexpectedStop,
            answer: None,
            error: Some(format!("unexpected stop condition: {}", reason)),
            call_trace,
            iterations,
        }
    }

    /// The iteration budget ran out
    #[must_use]
    pub fn exhausted(call_trace: CallTrace, iterations: usize) -> Self {
        Self {
            status: DispatchStatus::Exhausted,
            answer: None,
            error: Some("max iterations reached".to_string()),
            call_trace,
            iterations,
        }
    }

    /// The configured deadline elapsed
    #[must_use]
    pub fn deadline_exceeded(call_trace: CallTrace, iterations: usize) -> Self {
        Self {
            status: DispatchStatus::DeadlineExceeded,
            answer: None,
            error: Some("execution deadline exceeded".to_string()),
            call_trace,
            iterations,
        }
    }

    /// Whether the dispatch produced a final answer
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == DispatchStatus::Answered
    }
}
