use crate::domain::{FileHandle, HttpReply, InputMethod, SubmissionId};
use crate::error::ScreeningError;

/// Commands accepted by the submission controller
#[derive(Debug, Clone, PartialEq)]
pub enum FormCommand<F: FileHandle> {
    /// Switch between pasted text and uploaded file
    SelectInputMethod(InputMethod),

    /// Replace the job description with pasted text
    SetJobDescriptionText(String),

    /// Replace the job description with a file, or clear it
    SetJobDescriptionFile(Option<F>),

    /// Replace the resume selection
    SetResumes(Vec<F>),

    /// Start a submission
    Submit,

    /// Feed back the outcome of a submission
    Settle {
        id: SubmissionId,
        outcome: Result<HttpReply, ScreeningError>,
    },
}

impl<F: FileHandle> FormCommand<F> {
    pub fn name(&self) -> &'static str {
        match self {
            FormCommand::SelectInputMethod(_) => "SelectInputMethod",
            FormCommand::SetJobDescriptionText(_) => "SetJobDescriptionText",
            FormCommand::SetJobDescriptionFile(_) => "SetJobDescriptionFile",
            FormCommand::SetResumes(_) => "SetResumes",
            FormCommand::Submit => "Submit",
            FormCommand::Settle { .. } => "Settle",
        }
    }
}
