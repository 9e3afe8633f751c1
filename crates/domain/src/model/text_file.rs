// crates/domain/src/model/text_file.rs
use std::path::PathBuf;

/// One discovered text file with its content already loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFile {
    pub path: PathBuf,
    pub name: String,
    pub content: String,
}
