use crate::domain::FileHandle;
use serde::{Deserialize, Serialize};

/// Which job description input is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputMethod {
    /// Pasted into the text area
    #[default]
    Text,
    /// Uploaded as a document
    File,
}

impl InputMethod {
    pub fn label(&self) -> &'static str {
        match self {
            InputMethod::Text => "Enter Text",
            InputMethod::File => "Upload File",
        }
    }
}

/// Job description, either pasted or uploaded. Only one is ever active.
#[derive(Debug, Clone, PartialEq)]
pub enum JobDescriptionInput<F: FileHandle> {
    Text(String),
    File(Option<F>),
}

impl<F: FileHandle> Default for JobDescriptionInput<F> {
    fn default() -> Self {
        JobDescriptionInput::Text(String::new())
    }
}

impl<F: FileHandle> JobDescriptionInput<F> {
    /// Empty input for the given mode
    pub fn empty(method: InputMethod) -> Self {
        match method {
            InputMethod::Text => JobDescriptionInput::Text(String::new()),
            InputMethod::File => JobDescriptionInput::File(None),
        }
    }

    pub fn method(&self) -> InputMethod {
        match self {
            JobDescriptionInput::Text(_) => InputMethod::Text,
            JobDescriptionInput::File(_) => InputMethod::File,
        }
    }

    /// Whitespace-only text and a cleared file both count as absent
    pub fn is_present(&self) -> bool {
        match self {
            JobDescriptionInput::Text(text) => !text.trim().is_empty(),
            JobDescriptionInput::File(file) => file.is_some(),
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            JobDescriptionInput::Text(text) => Some(text),
            JobDescriptionInput::File(_) => None,
        }
    }

    pub fn file(&self) -> Option<&F> {
        match self {
            JobDescriptionInput::File(file) => file.as_ref(),
            JobDescriptionInput::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MemoryFile;

    type Input = JobDescriptionInput<MemoryFile>;

    #[test]
    fn test_default_is_empty_text() {
        let input = Input::default();
        assert_eq!(input.method(), InputMethod::Text);
        assert!(!input.is_present());
    }

    #[test]
    fn test_whitespace_text_is_absent() {
        assert!(!Input::Text("   \n\t".to_string()).is_present());
        assert!(Input::Text("Senior Rust Engineer".to_string()).is_present());
    }

    #[test]
    fn test_file_presence() {
        assert!(!Input::File(None).is_present());

        let file = MemoryFile::new("jd.txt", b"Rust".to_vec());
        let input = Input::File(Some(file.clone()));
        assert!(input.is_present());
        assert_eq!(input.file(), Some(&file));
        assert_eq!(input.text(), None);
    }

    #[test]
    fn test_empty_matches_method() {
        assert_eq!(Input::empty(InputMethod::File), Input::File(None));
        assert_eq!(
            Input::empty(InputMethod::Text),
            Input::Text(String::new())
        );
    }
}
