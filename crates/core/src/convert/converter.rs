//! Per-document conversion pipeline and pass orchestration.
//!
//! Each document moves through hash → gate → sweep → render → persist and
//! ends in exactly one of the [`DocumentOutcome`] states. Failures are data,
//! not control flow: a failed document is recorded and the pass continues.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, error, info};

use crate::convert::storage::Storage;
use crate::convert::{cache, hasher, namer};
use crate::render::{self, RenderError};
use crate::walker::DirectoryWalker;

/// Errors that terminate a single document's conversion attempt.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Source file could not be read (e.g. vanished between discovery and
    /// hashing).
    #[error("failed to read source file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The rendering boundary rejected the document.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The final artifact could not be persisted.
    #[error("failed to write artifact {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Terminal state of one document within a pass.
#[derive(Debug)]
pub enum DocumentOutcome {
    /// Cache miss: stale artifacts swept, document rendered and persisted.
    Converted { artifact: PathBuf, removed_stale: usize },
    /// The current-fingerprint artifact already existed; nothing was touched.
    Fresh { artifact: PathBuf },
    /// The attempt failed; the pass continues with the next document.
    Failed { path: PathBuf, error: ConvertError },
}

/// Aggregated result of one pass over a directory.
#[derive(Debug, Default)]
pub struct PassReport {
    pub converted: usize,
    pub fresh: usize,
    pub failed: usize,
    pub removed_stale: usize,
}

impl PassReport {
    fn record(&mut self, outcome: &DocumentOutcome) {
        match outcome {
            DocumentOutcome::Converted { removed_stale, .. } => {
                self.converted += 1;
                self.removed_stale += removed_stale;
            }
            DocumentOutcome::Fresh { .. } => self.fresh += 1,
            DocumentOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

/// Drives the cached conversion of source documents through a [`Storage`].
#[derive(Debug)]
pub struct Converter<S: Storage> {
    storage: S,
}

impl<S: Storage> Converter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Convert a single source document, honoring the output cache.
    ///
    /// The source is re-read from storage on every invocation; no state is
    /// carried between calls. On a cache hit neither the stale sweep nor the
    /// renderer runs, so same-stem leftovers from other historical
    /// fingerprints survive until the next miss for that stem.
    pub fn convert_file(&self, source: &Path) -> DocumentOutcome {
        debug!("input file: {}", source.display());

        let dir = source.parent().unwrap_or_else(|| Path::new("")).to_path_buf();
        let stem =
            source.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
        let extension =
            source.extension().map(|e| e.to_string_lossy().into_owned()).unwrap_or_default();

        let bytes = match self.storage.read(source) {
            Ok(bytes) => bytes,
            Err(e) => {
                return DocumentOutcome::Failed {
                    path: source.to_path_buf(),
                    error: ConvertError::Read { path: source.to_path_buf(), source: e },
                };
            }
        };

        let fp = hasher::fingerprint(&bytes);
        let target = namer::target_path(source, &fp);

        if cache::is_fresh(&self.storage, &target) {
            debug!("artifact already exists: {}", target.display());
            return DocumentOutcome::Fresh { artifact: target };
        }

        // Miss path: sweep before writing, so at most one artifact per stem
        // survives the pass.
        let removed_stale = cache::remove_stale(&self.storage, &dir, &stem, &fp);

        let content = String::from_utf8_lossy(&bytes);
        let html = match render::render_html(&content, &extension) {
            Ok(html) => html,
            Err(e) => {
                return DocumentOutcome::Failed {
                    path: source.to_path_buf(),
                    error: e.into(),
                };
            }
        };
        let document = render::wrap_document(&stem, &html);

        info!("converting {} to {}", source.display(), target.display());
        match self.storage.write_atomic(&target, &document) {
            Ok(()) => DocumentOutcome::Converted { artifact: target, removed_stale },
            Err(e) => DocumentOutcome::Failed {
                path: source.to_path_buf(),
                error: ConvertError::Write { path: target, source: e },
            },
        }
    }

    /// Run one pass over every document the walker yields.
    ///
    /// Per-document failures and walk errors are logged and counted; the
    /// pass always completes. Only an invalid root is fatal, and that is
    /// rejected when the walker is constructed.
    pub fn run(&self, walker: &DirectoryWalker) -> PassReport {
        let mut report = PassReport::default();

        for entry in walker.walk() {
            match entry {
                Ok(path) => {
                    let outcome = self.convert_file(&path);
                    if let DocumentOutcome::Failed { path, error } = &outcome {
                        error!("error converting {}: {error}", path.display());
                    }
                    report.record(&outcome);
                }
                Err(e) => {
                    error!("walk error: {e}");
                    report.failed += 1;
                }
            }
        }

        report
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
