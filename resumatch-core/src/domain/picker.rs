use crate::domain::FileHandle;

/// Hints passed to the native file picker.
///
/// Nothing here validates a file: whatever the picker returns is forwarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOptions {
    /// Accepted extensions, with leading dot
    pub accept: Vec<&'static str>,
    pub multiple: bool,
}

impl PickerOptions {
    pub fn new(accept: Vec<&'static str>, multiple: bool) -> Self {
        Self { accept, multiple }
    }

    /// Single job description document
    pub fn job_description() -> Self {
        Self::new(vec![".pdf", ".docx", ".txt"], false)
    }

    /// Any number of resumes
    pub fn resumes() -> Self {
        Self::new(vec![".pdf", ".docx"], true)
    }

    /// Value for the `accept` attribute
    pub fn accept_attr(&self) -> String {
        self.accept.join(",")
    }

    /// "Supported formats: .pdf, .docx (Max 10MB)"
    pub fn formats_hint(&self) -> String {
        format!("Supported formats: {} (Max 10MB)", self.accept.join(", "))
    }

    /// Project a picker result into the reported selection.
    ///
    /// A cancelled picker (`None`) reports an empty selection; a single-file
    /// picker reports at most the first file.
    pub fn project<F: FileHandle>(&self, picked: Option<Vec<F>>) -> Vec<F> {
        let mut files = picked.unwrap_or_default();
        if !self.multiple {
            files.truncate(1);
        }
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MemoryFile;

    fn files(names: &[&str]) -> Vec<MemoryFile> {
        names
            .iter()
            .map(|name| MemoryFile::new(*name, Vec::new()))
            .collect()
    }

    #[test]
    fn test_presets() {
        assert_eq!(PickerOptions::job_description().accept_attr(), ".pdf,.docx,.txt");
        assert_eq!(PickerOptions::resumes().accept_attr(), ".pdf,.docx");
        assert!(PickerOptions::resumes().multiple);
        assert!(!PickerOptions::job_description().multiple);
    }

    #[test]
    fn test_formats_hint() {
        assert_eq!(
            PickerOptions::resumes().formats_hint(),
            "Supported formats: .pdf, .docx (Max 10MB)"
        );
    }

    #[test]
    fn test_multiple_reports_every_file() {
        let picked = PickerOptions::resumes().project(Some(files(&["a.pdf", "b.docx", "a.pdf"])));
        assert_eq!(picked.len(), 3);
    }

    #[test]
    fn test_single_keeps_first() {
        let picked =
            PickerOptions::job_description().project(Some(files(&["jd.txt", "other.pdf"])));
        assert_eq!(picked, files(&["jd.txt"]));
    }

    #[test]
    fn test_cancel_reports_empty() {
        let picked: Vec<MemoryFile> = PickerOptions::resumes().project(None);
        assert!(picked.is_empty());
    }

    #[test]
    fn test_wrong_type_is_forwarded() {
        let picked = PickerOptions::resumes().project(Some(files(&["notes.exe"])));
        assert_eq!(picked.len(), 1);
    }
}
