// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
};

use textfolio_shared_kernel::{InfraResult, InfrastructureError};

/// Disambiguates staging files when one process writes more than once.
static STAGING_SEQ: AtomicUsize = AtomicUsize::new(0);

/// Writes report and locker output without leaving partial files behind.
pub struct FileWriter;

impl FileWriter {
    /// Write `data` to `path` atomically: stage into a sibling file, flush,
    /// then rename over the target. A crash mid-write leaves any previous
    /// content of `path` intact.
    pub fn atomic_write(path: &Path, data: &[u8]) -> InfraResult<()> {
        Self::stage_and_rename(path, data).map_err(|source| InfrastructureError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    fn stage_and_rename(path: &Path, data: &[u8]) -> io::Result<()> {
        let staging = Self::staging_path(path)?;
        {
            let mut writer = BufWriter::new(File::create(&staging)?);
            writer.write_all(data)?;
            writer.flush()?;
            let _ = writer.get_ref().sync_all();
        }
        fs::rename(&staging, path)?;
        Self::sync_parent(path);
        Ok(())
    }

    // Staging file must share the target's directory or the rename could
    // cross filesystems.
    fn staging_path(path: &Path) -> io::Result<PathBuf> {
        let parent = path.parent().ok_or_else(|| io::Error::other("path has no parent"))?;
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        let seq = STAGING_SEQ.fetch_add(1, Ordering::Relaxed);
        Ok(parent.join(format!(".{name}.{}.{seq}.staging", std::process::id())))
    }

    /// Best-effort directory sync so the rename survives a crash on Unix.
    #[cfg(unix)]
    fn sync_parent(path: &Path) {
        if let Some(parent) = path.parent() {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }
    }

    #[cfg(not(unix))]
    fn sync_parent(_path: &Path) {}
}
