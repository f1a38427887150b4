use std::fmt::Debug;

/// A user-selected local file.
///
/// The core never reads the content; it only needs enough to show the file
/// and to hand it back to the transport that forwards the bytes.
pub trait FileHandle: Debug + Clone + PartialEq + 'static {
    /// File name as reported by the picker
    fn name(&self) -> String;

    /// Size in bytes
    fn size(&self) -> u64;
}

/// In-memory file (native callers and tests)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryFile {
    name: String,
    content: Vec<u8>,
}

impl MemoryFile {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

impl FileHandle for MemoryFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> u64 {
        self.content.len() as u64
    }
}
