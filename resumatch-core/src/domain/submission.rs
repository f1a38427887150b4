use crate::error::ScreeningError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifies one request/response cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Submission lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Request in flight
    Submitting { id: SubmissionId },
    /// Last submission returned `count` entries
    Succeeded { id: SubmissionId, count: usize },
    /// Last submission failed; results were left as they were
    Failed {
        id: SubmissionId,
        error: ScreeningError,
    },
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting { .. })
    }

    /// Progress indicator is shown only while a request is in flight
    pub fn shows_progress(&self) -> bool {
        self.is_submitting()
    }

    pub fn in_flight(&self) -> Option<SubmissionId> {
        match self {
            SubmissionState::Submitting { id } => Some(*id),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ScreeningError> {
        match self {
            SubmissionState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "Idle",
            SubmissionState::Submitting { .. } => "Submitting",
            SubmissionState::Succeeded { .. } => "Succeeded",
            SubmissionState::Failed { .. } => "Failed",
        }
    }
}
