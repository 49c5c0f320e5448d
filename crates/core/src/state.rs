use crate::error::{Result, ViralscriptError};
use crate::types::GeneratedScriptResult;

/// Lifecycle phase of the current generation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Analyzing,
    /// Second in-flight phase. No transition produces it today; readers must
    /// treat it exactly like `Analyzing`.
    Generating,
    Complete,
    Error,
}

/// Phase plus an optional user-facing message
#[derive(Debug, Clone, Default)]
pub struct LoadingState {
    pub phase: Phase,
    pub message: Option<String>,
}

/// Single-writer container for the status/result pair of one session.
///
/// Every transition goes through the methods below. A submission while a
/// request is in flight is rejected instead of cancelling the running one;
/// the submit surface stays disabled until a terminal phase is reached.
#[derive(Debug, Default)]
pub struct Session {
    loading: LoadingState,
    result: Option<GeneratedScriptResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading(&self) -> &LoadingState {
        &self.loading
    }

    pub fn phase(&self) -> Phase {
        self.loading.phase
    }

    pub fn result(&self) -> Option<&GeneratedScriptResult> {
        self.result.as_ref()
    }

    /// True while a request is in flight
    pub fn is_busy(&self) -> bool {
        matches!(self.loading.phase, Phase::Analyzing | Phase::Generating)
    }

    /// Start a new request. Clears any previous result, so a failed follow-up
    /// never shows stale output. Re-entrant from both terminal phases.
    pub fn begin(&mut self, message: impl Into<String>) -> Result<()> {
        if self.is_busy() {
            return Err(ViralscriptError::Busy);
        }
        self.result = None;
        self.loading = LoadingState {
            phase: Phase::Analyzing,
            message: Some(message.into()),
        };
        Ok(())
    }

    /// The in-flight request resolved with a well-formed result
    pub fn complete(&mut self, result: GeneratedScriptResult) {
        self.result = Some(result);
        self.loading = LoadingState {
            phase: Phase::Complete,
            message: None,
        };
    }

    /// The in-flight request failed; `message` is the one human-readable
    /// detail kept. Partial results are never stored.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.result = None;
        self.loading = LoadingState {
            phase: Phase::Error,
            message: Some(message.into()),
        };
    }
}
