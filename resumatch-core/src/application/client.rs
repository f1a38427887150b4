use crate::application::{ScreeningRequest, SubmissionController};
use crate::domain::{FileHandle, HttpReply, SubmissionState};
use crate::error::{ScreeningError, SubmitRejection};
use async_trait::async_trait;
use std::cell::RefCell;

/// Transport to the scoring service.
///
/// Implementations return whatever status and body the service answered
/// with; only failures to get an answer at all are errors.
#[async_trait(?Send)]
pub trait ScoringClient<F: FileHandle> {
    async fn send(&self, request: ScreeningRequest<F>) -> Result<HttpReply, ScreeningError>;
}

/// Run one full submission against `client`.
///
/// The controller is only borrowed around the synchronous steps, never
/// across the network call, so the view can keep reading it while the
/// request is in flight.
pub async fn submit<F, C>(
    controller: &RefCell<SubmissionController<F>>,
    client: &C,
) -> Result<SubmissionState, SubmitRejection>
where
    F: FileHandle,
    C: ScoringClient<F> + ?Sized,
{
    let pending = controller.borrow_mut().begin_submission()?;

    let outcome = client.send(pending.request).await;

    let mut controller = controller.borrow_mut();
    controller.settle(pending.id, outcome);
    Ok(controller.state().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MemoryFile;
    use std::cell::Cell;

    struct FixedClient {
        reply: Result<HttpReply, ScreeningError>,
        calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl ScoringClient<MemoryFile> for FixedClient {
        async fn send(
            &self,
            _request: ScreeningRequest<MemoryFile>,
        ) -> Result<HttpReply, ScreeningError> {
            self.calls.set(self.calls.get() + 1);
            self.reply.clone()
        }
    }

    fn ready() -> RefCell<SubmissionController<MemoryFile>> {
        let mut controller = SubmissionController::new();
        controller.set_job_description_text("Data Engineer".to_string());
        controller.set_resumes(vec![MemoryFile::new("a.pdf", b"%PDF".to_vec())]);
        RefCell::new(controller)
    }

    #[tokio::test]
    async fn test_submit_settles_success() {
        let controller = ready();
        let client = FixedClient {
            reply: Ok(HttpReply::new(
                200,
                r#"{"scores": [{"fileName": "a.pdf", "score": 64.4}]}"#,
            )),
            calls: Cell::new(0),
        };

        let state = submit(&controller, &client).await.unwrap();

        assert!(matches!(state, SubmissionState::Succeeded { count: 1, .. }));
        assert_eq!(client.calls.get(), 1);
        assert_eq!(controller.borrow().results().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_rejected_sends_nothing() {
        let controller = RefCell::new(SubmissionController::<MemoryFile>::new());
        let client = FixedClient {
            reply: Ok(HttpReply::new(200, r#"{"scores": []}"#)),
            calls: Cell::new(0),
        };

        let result = submit(&controller, &client).await;

        assert_eq!(result, Err(SubmitRejection::MissingJobDescription));
        assert_eq!(client.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_submit_transport_error_fails() {
        let controller = ready();
        let client = FixedClient {
            reply: Err(ScreeningError::transport("NetworkError when attempting to fetch resource.")),
            calls: Cell::new(0),
        };

        let state = submit(&controller, &client).await.unwrap();

        assert!(matches!(
            state,
            SubmissionState::Failed {
                error: ScreeningError::Transport(_),
                ..
            }
        ));
        assert!(controller.borrow().can_submit());
    }
}
