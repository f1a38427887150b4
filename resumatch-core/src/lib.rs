//! # ResuMatch Core
//!
//! Platform-independent state and rules of the resume screening form:
//! input selection, the submission state machine, the multipart request
//! and the interpretation of the scoring service's reply.

pub mod application;
pub mod domain;
pub mod error;

pub use application::{
    submit, FormCommand, FormEvent, FormPart, PendingSubmission, ScoringClient, ScreeningRequest,
    SubmissionController,
};
pub use domain::{
    FileHandle, HttpReply, InputMethod, JobDescriptionInput, MatchBand, MemoryFile,
    PickerOptions, ResumeSet, ScoreEntry, ScoreRecord, ScoreResponse, SubmissionId,
    SubmissionState,
};
pub use error::{ScreeningError, SubmitRejection};
