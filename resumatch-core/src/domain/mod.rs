pub mod file;
pub mod job_description;
pub mod picker;
pub mod resume_set;
pub mod score;
pub mod submission;

pub use file::{FileHandle, MemoryFile};
pub use job_description::{InputMethod, JobDescriptionInput};
pub use picker::PickerOptions;
pub use resume_set::ResumeSet;
pub use score::{HttpReply, MatchBand, ScoreEntry, ScoreRecord, ScoreResponse};
pub use submission::{SubmissionId, SubmissionState};
