use resumatch_core::FileHandle;
use web_sys::{File, HtmlInputElement};

/// File picked through an `<input type="file">`
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserFile(File);

impl BrowserFile {
    pub fn as_file(&self) -> &File {
        &self.0
    }
}

impl From<File> for BrowserFile {
    fn from(file: File) -> Self {
        Self(file)
    }
}

impl FileHandle for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }
}

/// Files currently selected in `input`, `None` if it has no file list
pub fn files_from_input(input: &HtmlInputElement) -> Option<Vec<BrowserFile>> {
    let list = input.files()?;
    Some(
        (0..list.length())
            .filter_map(|index| list.get(index))
            .map(BrowserFile::from)
            .collect(),
    )
}
