// crates/usecase/src/scan.rs
use std::path::Path;

use textfolio_domain::TextFile;
use textfolio_ports::filesystem::{TextFileDto, TextFileSource};
use textfolio_shared_kernel::{ApplicationError, ErrorContext, Result};

/// Collect the `.txt` files of one folder into domain entries.
///
/// The adapter behind [`TextFileSource`] decides what happens to individual
/// unreadable files; this use case only enforces the application policy that
/// an empty result is an error.
pub struct ScanFolder<'a> {
    source: &'a dyn TextFileSource,
}

impl<'a> ScanFolder<'a> {
    pub fn new(source: &'a dyn TextFileSource) -> Self {
        Self { source }
    }

    pub fn run(&self, folder: &Path) -> Result<Vec<TextFile>> {
        let entries = self
            .source
            .collect(folder)
            .with_context(|| format!("collecting text files from '{}'", folder.display()))?;
        if entries.is_empty() {
            return Err(ApplicationError::NoTextFiles { folder: folder.to_path_buf() }.into());
        }
        Ok(entries.into_iter().map(dto_to_entry).collect())
    }
}

fn dto_to_entry(dto: TextFileDto) -> TextFile {
    TextFile { path: dto.path, name: dto.name, content: dto.content }
}
