//! Freshness gate and stale artifact sweep.

use std::path::Path;

use tracing::{info, warn};

use crate::convert::namer::{self, RENDERED_EXT};
use crate::convert::storage::Storage;

/// Whether a fresh artifact already exists at the exact target path.
///
/// The path embeds the content fingerprint, so existence alone is necessary
/// and sufficient proof of freshness; no timestamp or metadata comparison is
/// involved. On a hit the caller skips both the stale sweep and rendering.
pub fn is_fresh<S: Storage>(storage: &S, target: &Path) -> bool {
    storage.exists(target)
}

/// Delete every artifact for `stem` in `dir` whose embedded fingerprint
/// differs from `current`. Returns the number of files removed.
///
/// Best-effort sweep: a failed delete is logged and the remaining candidates
/// are still attempted. Calling again with no stale files present is a no-op.
pub fn remove_stale<S: Storage>(storage: &S, dir: &Path, stem: &str, current: &str) -> usize {
    let artifacts = match namer::existing_artifacts(storage, dir, stem) {
        Ok(artifacts) => artifacts,
        Err(e) => {
            warn!("failed to enumerate artifacts for {stem} in {}: {e}", dir.display());
            return 0;
        }
    };

    let current_name = format!("{stem}.{current}.{RENDERED_EXT}");
    let mut removed = 0;

    for path in artifacts {
        if path.file_name().and_then(|n| n.to_str()) == Some(current_name.as_str()) {
            continue;
        }
        match storage.remove_file(&path) {
            Ok(()) => {
                info!("deleting {}", path.display());
                removed += 1;
            }
            Err(e) => warn!("failed to delete stale artifact {}: {e}", path.display()),
        }
    }

    removed
}
