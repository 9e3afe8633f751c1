// crates/infra/src/persistence/file_reader.rs
use std::{fs::File, io::Read, path::Path};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the entire file into memory as raw bytes.
    pub fn read_to_end(path: &Path) -> std::io::Result<Vec<u8>> {
        let mut file = File::open(path)?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Read the entire file as UTF-8 text, replacing invalid sequences.
    pub fn read_lossy(path: &Path) -> std::io::Result<String> {
        Self::read_to_end(path).map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }
}
