// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use textfolio_shared_kernel::Result;

/// DTO representing one text file discovered by an input port, content
/// already loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextFileDto {
    pub path: PathBuf,
    pub name: String,
    pub content: String,
}

/// Port for enumerating and loading the text files of a folder.
pub trait TextFileSource: Send + Sync {
    /// Collect the `.txt` files directly under `folder`, in a deterministic
    /// order. Implementations decide how to handle individual unreadable
    /// files; a failure to read the folder itself is an error.
    fn collect(&self, folder: &Path) -> Result<Vec<TextFileDto>>;
}
