#![allow(dead_code)]

pub mod mock_client;

use resumatch_core::{MemoryFile, SubmissionController};
use std::cell::RefCell;

pub use mock_client::{GatedClient, RecordingClient};

pub fn resume(name: &str) -> MemoryFile {
    MemoryFile::new(name, format!("resume body of {}", name).into_bytes())
}

pub fn resumes(names: &[&str]) -> Vec<MemoryFile> {
    names.iter().map(|name| resume(name)).collect()
}

/// Controller with a pasted description and the given resumes selected
pub fn ready_form(description: &str, names: &[&str]) -> RefCell<SubmissionController<MemoryFile>> {
    let mut controller = SubmissionController::new();
    controller.set_job_description_text(description.to_string());
    controller.set_resumes(resumes(names));
    RefCell::new(controller)
}

/// `{"scores": [...]}` body with one entry per `(file, score)`
pub fn scores_body(entries: &[(&str, f64)]) -> String {
    let scores: Vec<_> = entries
        .iter()
        .map(|(file_name, score)| {
            serde_json::json!({
                "fileName": file_name,
                "score": score,
                "skills": [],
                "experience": "",
                "education": "",
                "location": "",
                "lastPosition": ""
            })
        })
        .collect();
    serde_json::json!({ "scores": scores }).to_string()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
