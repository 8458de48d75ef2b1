//! Source document discovery.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// Default source patterns, iterated in order.
pub const SOURCE_PATTERNS: [&str; 2] = ["md", "markdown"];

#[derive(Debug, Error)]
pub enum WalkerError {
    #[error("directory does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// Walker that discovers source documents under a root directory.
///
/// Each pattern (a file extension, matched case-insensitively) is iterated
/// in turn over the root and the results concatenated. Overlapping patterns
/// yield duplicates; callers should supply non-overlapping patterns.
#[derive(Debug)]
pub struct DirectoryWalker {
    root: PathBuf,
    patterns: Vec<String>,
    recursive: bool,
}

impl DirectoryWalker {
    /// Create a walker with the default markdown patterns.
    pub fn new(root: &Path, recursive: bool) -> Result<Self, WalkerError> {
        let patterns = SOURCE_PATTERNS.iter().map(|p| (*p).to_string()).collect();
        Self::with_patterns(root, patterns, recursive)
    }

    /// Create a walker with a custom pattern set.
    pub fn with_patterns(
        root: &Path,
        patterns: Vec<String>,
        recursive: bool,
    ) -> Result<Self, WalkerError> {
        let root = root
            .canonicalize()
            .map_err(|_| WalkerError::MissingRoot(root.display().to_string()))?;

        if !root.is_dir() {
            return Err(WalkerError::MissingRoot(root.display().to_string()));
        }

        Ok(Self { root, patterns, recursive })
    }

    /// Lazily yield matching files, pattern-major order.
    ///
    /// Walk errors are yielded inline so the caller can record them and keep
    /// going; the iterator is finite and not restartable.
    pub fn walk(&self) -> impl Iterator<Item = Result<PathBuf, WalkerError>> + '_ {
        self.patterns.iter().flat_map(move |pattern| {
            let mut walk = WalkDir::new(&self.root).follow_links(false);
            if !self.recursive {
                walk = walk.max_depth(1);
            }

            walk.into_iter().filter_map(move |entry| match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if entry.file_type().is_file() && has_extension(path, pattern) {
                        Some(Ok(path.to_path_buf()))
                    } else {
                        None
                    }
                }
                Err(e) => {
                    // Attribute the error to the failing entry when known.
                    let path = e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| self.root.display().to_string());
                    Some(Err(WalkerError::WalkError(path, e)))
                }
            })
        })
    }

    /// The canonicalized root being walked.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn has_extension(path: &Path, pattern: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(pattern))
}
