use crate::domain::FileHandle;

/// Resumes picked in the last selection, in picker order.
/// Duplicates are kept; every selection replaces the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeSet<F: FileHandle> {
    files: Vec<F>,
}

impl<F: FileHandle> Default for ResumeSet<F> {
    fn default() -> Self {
        Self { files: Vec::new() }
    }
}

impl<F: FileHandle> ResumeSet<F> {
    pub fn new(files: Vec<F>) -> Self {
        Self { files }
    }

    /// Replace the whole selection
    pub fn replace(&mut self, files: Vec<F>) {
        self.files = files;
    }

    pub fn files(&self) -> &[F] {
        &self.files
    }

    pub fn names(&self) -> Vec<String> {
        self.files.iter().map(FileHandle::name).collect()
    }

    pub fn total_size(&self) -> u64 {
        self.files.iter().map(FileHandle::size).sum()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
