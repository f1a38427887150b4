//! UI components for the screening form

mod file_upload;
mod job_description_input;
mod loading_spinner;
mod score_table;
mod selected_files;

pub use file_upload::FileUpload;
pub use job_description_input::JobDescriptionInput;
pub use loading_spinner::LoadingSpinner;
pub use score_table::ScoreTable;
pub use selected_files::SelectedFiles;
