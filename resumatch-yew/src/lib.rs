//! # ResuMatch Yew Front-End
//!
//! Browser intake form for resume screening: collects a job description
//! and a batch of resumes, posts them to the scoring service and renders
//! the ranked scores.

pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod providers;
pub mod transport;

// Re-exports for convenience
pub use app::App;
pub use components::{FileUpload, JobDescriptionInput, LoadingSpinner, ScoreTable, SelectedFiles};
pub use config::Config;
pub use hooks::{use_screening, ScreeningContext};
pub use pages::ScreeningPage;
pub use providers::{ScreeningProvider, ScreeningProviderProps};
pub use transport::{BrowserFile, HttpScoringClient};
