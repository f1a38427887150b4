use crate::application::PendingSubmission;
use crate::domain::{FileHandle, SubmissionId};
use crate::error::{ScreeningError, SubmitRejection};

/// Events emitted by the controller, one per command
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent<F: FileHandle> {
    /// Job description or resume selection changed
    InputChanged,

    /// Request built; the caller must send it and settle with its id
    SubmissionStarted { submission: PendingSubmission<F> },

    /// Submit refused, nothing was sent
    SubmissionRejected { reason: SubmitRejection },

    /// Results replaced
    ResultsReceived { id: SubmissionId, count: usize },

    /// Submission failed, results untouched
    SubmissionFailed {
        id: SubmissionId,
        error: ScreeningError,
    },

    /// Reply for a submission that is not in flight
    StaleReplyIgnored { id: SubmissionId },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MemoryFile;

    #[test]
    fn test_event_clone() {
        let event: FormEvent<MemoryFile> = FormEvent::ResultsReceived {
            id: SubmissionId::new(),
            count: 3,
        };

        let cloned = event.clone();
        assert_eq!(event, cloned);
    }

    #[test]
    fn test_rejection_event_debug() {
        let event: FormEvent<MemoryFile> = FormEvent::SubmissionRejected {
            reason: SubmitRejection::NoResumes,
        };
        assert!(format!("{:?}", event).contains("NoResumes"));
    }
}
