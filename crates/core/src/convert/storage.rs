//! Injected directory abstraction for the conversion pipeline.
//!
//! Every component that touches the output directory goes through [`Storage`]
//! so unit tests can run against an in-memory fake instead of real storage.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Filesystem operations the conversion pipeline needs.
pub trait Storage {
    /// Read the full byte content of a file.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Whether a file exists at the exact path.
    fn exists(&self, path: &Path) -> bool;

    /// List the files directly inside a directory (non-recursive).
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

    /// Write a file so that a partial result is never observable at `path`:
    /// the content goes to a temporary sibling first, then is renamed into
    /// place.
    fn write_atomic(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> io::Result<()>;
}

/// [`Storage`] backed by the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskStorage;

impl Storage for DiskStorage {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn list_dir(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                entries.push(entry.path());
            }
        }
        entries.sort();
        Ok(entries)
    }

    fn write_atomic(&self, path: &Path, contents: &str) -> io::Result<()> {
        let tmp = temp_sibling(path);
        std::fs::write(&tmp, contents)?;
        if let Err(e) = std::fs::rename(&tmp, path) {
            // Rename failed; don't leave the temp file behind.
            let _ = std::fs::remove_file(&tmp);
            return Err(e);
        }
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }
}

/// Temporary sibling path for atomic writes: `<dir>/.<name>.tmp`.
/// Same directory as the target so the rename stays on one filesystem.
fn temp_sibling(path: &Path) -> PathBuf {
    let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}

/// In-memory [`Storage`] fake (for testing): a map from path to bytes.
#[derive(Debug, Default)]
pub struct MemStorage {
    files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file directly, as if it were already on disk.
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.lock().insert(path.into(), contents.into());
    }

    /// Snapshot of every stored path, in sorted order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.lock().keys().cloned().collect()
    }

    /// Current content of a file, if present.
    pub fn contents(&self, path: &Path) -> Option<Vec<u8>> {
        self.lock().get(path).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<PathBuf, Vec<u8>>> {
        self.files.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Storage for MemStorage {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.lock().get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no such file: {}", path.display()))
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.lock().contains_key(path)
    }

    fn list_dir(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        Ok(self
            .lock()
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect())
    }

    fn write_atomic(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.lock().insert(path.to_path_buf(), contents.as_bytes().to_vec());
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        self.lock().remove(path).map(|_| ()).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no such file: {}", path.display()))
        })
    }
}
