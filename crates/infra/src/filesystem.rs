// crates/infra/src/filesystem.rs
use std::path::{Path, PathBuf};

use textfolio_ports::filesystem::{TextFileDto, TextFileSource};
use textfolio_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileReader;

/// Disk-backed text file source.
///
/// Collects the regular files directly under a folder whose name ends in
/// `.txt` (exact lowercase suffix, no recursion), sorted by name so the
/// batch order is deterministic. Contents are decoded as UTF-8 with invalid
/// sequences replaced.
///
/// A single unreadable file is logged and skipped; the folder itself failing
/// to read is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskTextFileSource;

impl DiskTextFileSource {
    pub fn new() -> Self {
        Self
    }
}

impl TextFileSource for DiskTextFileSource {
    fn collect(&self, folder: &Path) -> Result<Vec<TextFileDto>> {
        let mut candidates = list_txt_files(folder)?;
        candidates.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut files = Vec::with_capacity(candidates.len());
        for (name, path) in candidates {
            match FileReader::read_lossy(&path) {
                Ok(content) => files.push(TextFileDto { path, name, content }),
                Err(source) => {
                    let err = InfrastructureError::FileRead { path, source };
                    log::warn!("skipping unreadable file: {err}");
                }
            }
        }
        Ok(files)
    }
}

fn list_txt_files(folder: &Path) -> Result<Vec<(String, PathBuf)>> {
    let folder_err = |source| InfrastructureError::FolderRead { path: folder.to_path_buf(), source };

    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(folder).map_err(folder_err)? {
        let entry = entry.map_err(folder_err)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(".txt") {
            continue;
        }
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if is_file {
            candidates.push((name, entry.path()));
        }
    }
    Ok(candidates)
}
