use crate::application::{FormCommand, FormEvent, ScreeningRequest};
use crate::domain::{
    FileHandle, HttpReply, InputMethod, JobDescriptionInput, ResumeSet, ScoreEntry,
    ScoreResponse, SubmissionId, SubmissionState,
};
use crate::error::{ScreeningError, SubmitRejection};

/// A started submission: send `request`, then settle with `id`
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission<F: FileHandle> {
    pub id: SubmissionId,
    pub request: ScreeningRequest<F>,
}

/// Owns the intake form state for one page session
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionController<F: FileHandle> {
    job_description: JobDescriptionInput<F>,
    resumes: ResumeSet<F>,
    state: SubmissionState,
    /// Entries of the last successful submission
    results: Vec<ScoreEntry>,
}

impl<F: FileHandle> Default for SubmissionController<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileHandle> SubmissionController<F> {
    pub fn new() -> Self {
        Self {
            job_description: JobDescriptionInput::default(),
            resumes: ResumeSet::default(),
            state: SubmissionState::Idle,
            results: Vec::new(),
        }
    }

    // ===== Queries =====

    pub fn job_description(&self) -> &JobDescriptionInput<F> {
        &self.job_description
    }

    pub fn input_method(&self) -> InputMethod {
        self.job_description.method()
    }

    pub fn resumes(&self) -> &ResumeSet<F> {
        &self.resumes
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn results(&self) -> &[ScoreEntry] {
        &self.results
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    /// Submit button enablement
    pub fn can_submit(&self) -> bool {
        self.rejection().is_none()
    }

    fn rejection(&self) -> Option<SubmitRejection> {
        if self.state.is_submitting() {
            Some(SubmitRejection::AlreadySubmitting)
        } else if !self.job_description.is_present() {
            Some(SubmitRejection::MissingJobDescription)
        } else if self.resumes.is_empty() {
            Some(SubmitRejection::NoResumes)
        } else {
            None
        }
    }

    // ===== Input =====

    /// Switching mode discards the value entered in the other mode.
    /// Returns `false` when the mode was already active.
    pub fn select_input_method(&mut self, method: InputMethod) -> bool {
        if self.job_description.method() == method {
            return false;
        }
        tracing::debug!("Job description input switched to {:?}", method);
        self.job_description = JobDescriptionInput::empty(method);
        true
    }

    pub fn set_job_description_text(&mut self, text: String) {
        self.job_description = JobDescriptionInput::Text(text);
    }

    pub fn set_job_description_file(&mut self, file: Option<F>) {
        if let Some(file) = &file {
            tracing::debug!("Job description file: {} ({} bytes)", file.name(), file.size());
        }
        self.job_description = JobDescriptionInput::File(file);
    }

    pub fn set_resumes(&mut self, files: Vec<F>) {
        tracing::debug!("Resume selection replaced: {} file(s)", files.len());
        self.resumes.replace(files);
    }

    // ===== Submission =====

    /// Start a submission if the form is complete and nothing is in flight
    pub fn begin_submission(&mut self) -> Result<PendingSubmission<F>, SubmitRejection> {
        if let Some(reason) = self.rejection() {
            tracing::warn!("Submission rejected: {}", reason);
            return Err(reason);
        }

        let id = SubmissionId::new();
        let request = ScreeningRequest::build(&self.job_description, &self.resumes);
        self.state = SubmissionState::Submitting { id };

        tracing::info!(
            "Submission {} started with {} resume(s)",
            id,
            self.resumes.len()
        );

        Ok(PendingSubmission { id, request })
    }

    /// Reconcile the outcome of submission `id`.
    ///
    /// Returns `false` if `id` is not the submission in flight; the state is
    /// then left untouched.
    pub fn settle(&mut self, id: SubmissionId, outcome: Result<HttpReply, ScreeningError>) -> bool {
        if self.state.in_flight() != Some(id) {
            tracing::warn!("Ignoring reply for submission {} (not in flight)", id);
            return false;
        }

        match outcome.and_then(|reply| ScoreResponse::from_reply(&reply)) {
            Ok(entries) => {
                let count = entries.len();
                tracing::info!("Submission {} succeeded with {} result(s)", id, count);
                self.results = entries;
                self.state = SubmissionState::Succeeded { id, count };
            }
            Err(error) => {
                tracing::error!("Submission {} failed: {}", id, error);
                self.state = SubmissionState::Failed { id, error };
            }
        }

        true
    }

    /// Process a single command and return the resulting event
    pub fn handle_command(&mut self, command: FormCommand<F>) -> FormEvent<F> {
        match command {
            FormCommand::SelectInputMethod(method) => {
                self.select_input_method(method);
                FormEvent::InputChanged
            }

            FormCommand::SetJobDescriptionText(text) => {
                self.set_job_description_text(text);
                FormEvent::InputChanged
            }

            FormCommand::SetJobDescriptionFile(file) => {
                self.set_job_description_file(file);
                FormEvent::InputChanged
            }

            FormCommand::SetResumes(files) => {
                self.set_resumes(files);
                FormEvent::InputChanged
            }

            FormCommand::Submit => match self.begin_submission() {
                Ok(submission) => FormEvent::SubmissionStarted { submission },
                Err(reason) => FormEvent::SubmissionRejected { reason },
            },

            FormCommand::Settle { id, outcome } => self.handle_settle(id, outcome),
        }
    }

    fn handle_settle(
        &mut self,
        id: SubmissionId,
        outcome: Result<HttpReply, ScreeningError>,
    ) -> FormEvent<F> {
        if !self.settle(id, outcome) {
            return FormEvent::StaleReplyIgnored { id };
        }

        match &self.state {
            SubmissionState::Succeeded { count, .. } => FormEvent::ResultsReceived {
                id,
                count: *count,
            },
            SubmissionState::Failed { error, .. } => FormEvent::SubmissionFailed {
                id,
                error: error.clone(),
            },
            // settle() always leaves a terminal state when it returns true
            SubmissionState::Idle | SubmissionState::Submitting { .. } => {
                FormEvent::StaleReplyIgnored { id }
            }
        }
    }
}
