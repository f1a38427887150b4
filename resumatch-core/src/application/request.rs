use crate::domain::{FileHandle, JobDescriptionInput, ResumeSet};

/// Multipart field carrying pasted job description text
pub const JOB_DESC_FIELD: &str = "job_desc";
/// Multipart field carrying an uploaded job description
pub const JOB_DESC_FILE_FIELD: &str = "job_desc_file";
/// Repeated multipart field, one part per resume
pub const RESUMES_FIELD: &str = "resumes";

/// One part of the outbound multipart form
#[derive(Debug, Clone, PartialEq)]
pub enum FormPart<F: FileHandle> {
    Text { name: &'static str, value: String },
    File { name: &'static str, file: F },
}

impl<F: FileHandle> FormPart<F> {
    pub fn name(&self) -> &'static str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

/// Multipart payload for the scoring endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct ScreeningRequest<F: FileHandle> {
    parts: Vec<FormPart<F>>,
}

impl<F: FileHandle> ScreeningRequest<F> {
    /// Only the active job description variant is written; resumes follow in
    /// selection order.
    pub fn build(job_description: &JobDescriptionInput<F>, resumes: &ResumeSet<F>) -> Self {
        let mut parts = Vec::with_capacity(resumes.len() + 1);

        match job_description {
            JobDescriptionInput::Text(text) => parts.push(FormPart::Text {
                name: JOB_DESC_FIELD,
                value: text.clone(),
            }),
            JobDescriptionInput::File(Some(file)) => parts.push(FormPart::File {
                name: JOB_DESC_FILE_FIELD,
                file: file.clone(),
            }),
            JobDescriptionInput::File(None) => {}
        }

        parts.extend(resumes.files().iter().cloned().map(|file| FormPart::File {
            name: RESUMES_FIELD,
            file,
        }));

        Self { parts }
    }

    pub fn parts(&self) -> &[FormPart<F>] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<FormPart<F>> {
        self.parts
    }

    /// Value of the `job_desc` text field, if present
    pub fn job_description_text(&self) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            FormPart::Text { name, value } if *name == JOB_DESC_FIELD => Some(value.as_str()),
            _ => None,
        })
    }

    /// File sent under `job_desc_file`, if present
    pub fn job_description_file(&self) -> Option<&F> {
        self.parts.iter().find_map(|part| match part {
            FormPart::File { name, file } if *name == JOB_DESC_FILE_FIELD => Some(file),
            _ => None,
        })
    }

    pub fn resumes(&self) -> Vec<&F> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                FormPart::File { name, file } if *name == RESUMES_FIELD => Some(file),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MemoryFile;

    fn resumes(names: &[&str]) -> ResumeSet<MemoryFile> {
        ResumeSet::new(
            names
                .iter()
                .map(|name| MemoryFile::new(*name, b"resume".to_vec()))
                .collect(),
        )
    }

    #[test]
    fn test_text_description_is_a_text_field() {
        let jd = JobDescriptionInput::Text("Rust developer".to_string());
        let request = ScreeningRequest::build(&jd, &resumes(&["a.pdf", "b.pdf"]));

        assert_eq!(request.job_description_text(), Some("Rust developer"));
        assert!(request.job_description_file().is_none());

        let names: Vec<_> = request.parts().iter().map(FormPart::name).collect();
        assert_eq!(names, vec!["job_desc", "resumes", "resumes"]);
    }

    #[test]
    fn test_file_description_is_a_file_part() {
        let jd_file = MemoryFile::new("jd.txt", b"Rust developer".to_vec());
        let jd = JobDescriptionInput::File(Some(jd_file.clone()));
        let request = ScreeningRequest::build(&jd, &resumes(&["a.pdf"]));

        assert_eq!(request.job_description_file(), Some(&jd_file));
        assert!(request.job_description_text().is_none());
        assert_eq!(request.parts()[0].name(), "job_desc_file");
    }

    #[test]
    fn test_resume_parts_keep_selection_order() {
        let jd = JobDescriptionInput::Text("jd".to_string());
        let request = ScreeningRequest::build(&jd, &resumes(&["c.pdf", "a.pdf", "c.pdf"]));

        let names: Vec<_> = request.resumes().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["c.pdf", "a.pdf", "c.pdf"]);
    }
}
