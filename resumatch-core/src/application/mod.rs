mod client;
mod commands;
mod controller;
mod events;
mod request;

pub use client::{submit, ScoringClient};
pub use commands::FormCommand;
pub use controller::{PendingSubmission, SubmissionController};
pub use events::FormEvent;
pub use request::{
    FormPart, ScreeningRequest, JOB_DESC_FIELD, JOB_DESC_FILE_FIELD, RESUMES_FIELD,
};
