/// Why a submission did not produce results
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScreeningError {
    /// Network unreachable, request aborted or timed out
    #[error("Error processing resumes. {0}")]
    Transport(String),

    /// Non-2xx status, body passed through verbatim
    #[error("Error {status}: {body}")]
    Server { status: u16, body: String },

    /// 2xx reply without a usable result list
    #[error("Unexpected response from scoring service: {0}")]
    MalformedResponse(String),
}

impl ScreeningError {
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            ScreeningError::Transport("Unknown error".to_string())
        } else {
            ScreeningError::Transport(message)
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ScreeningError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ScreeningError {
    fn from(err: serde_json::Error) -> Self {
        ScreeningError::MalformedResponse(err.to_string())
    }
}

/// Why `begin_submission` refused to start
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejection {
    #[error("A job description is required")]
    MissingJobDescription,

    #[error("Select at least one resume")]
    NoResumes,

    #[error("A submission is already in progress")]
    AlreadySubmitting,
}

pub type Result<T> = std::result::Result<T, ScreeningError>;
