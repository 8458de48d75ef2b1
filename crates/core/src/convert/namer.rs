//! Artifact naming.
//!
//! Encoding the fingerprint in the filename makes the cache self-describing:
//! no separate index is needed, and staleness falls out of a directory scan.

use std::io;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::convert::hasher::FINGERPRINT_LEN;
use crate::convert::storage::Storage;

/// Canonical extension of rendered artifacts.
pub const RENDERED_EXT: &str = "html";

/// Canonical output path for a source document and its fingerprint:
/// `<dir>/<stem>.<fingerprint>.html`, sibling to the source.
pub fn target_path(source: &Path, fingerprint: &str) -> PathBuf {
    let stem = source.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    source.with_file_name(format!("{stem}.{fingerprint}.{RENDERED_EXT}"))
}

/// All artifacts in `dir` previously generated for `stem`, for any
/// fingerprint value, not just the current one.
///
/// Re-enumerates the directory on every call so the view reflects external
/// changes; the returned iterator is finite and not restartable.
pub fn existing_artifacts<S: Storage>(
    storage: &S,
    dir: &Path,
    stem: &str,
) -> io::Result<impl Iterator<Item = PathBuf> + use<S>> {
    let pattern = artifact_pattern(stem);
    let entries = storage.list_dir(dir)?;
    Ok(entries.into_iter().filter(move |path| {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| pattern.is_match(n))
    }))
}

/// Matches `<stem>.<8 lowercase hex>.html` exactly.
fn artifact_pattern(stem: &str) -> Regex {
    Regex::new(&format!(
        "^{}\\.[0-9a-f]{{{FINGERPRINT_LEN}}}\\.{RENDERED_EXT}$",
        regex::escape(stem)
    ))
    .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::storage::MemStorage;
    use rstest::rstest;

    #[rstest]
    #[case("/docs/a.md", "deadbeef", "/docs/a.deadbeef.html")]
    #[case("/docs/notes.markdown", "0a1b2c3d", "/docs/notes.0a1b2c3d.html")]
    #[case("/deep/nested/dir/readme.md", "ffffffff", "/deep/nested/dir/readme.ffffffff.html")]
    fn target_path_embeds_fingerprint(
        #[case] source: &str,
        #[case] fp: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(target_path(Path::new(source), fp), PathBuf::from(expected));
    }

    #[test]
    fn existing_artifacts_matches_any_fingerprint() {
        let storage = MemStorage::new();
        storage.insert("/docs/a.md", "# A");
        storage.insert("/docs/a.deadbeef.html", "old");
        storage.insert("/docs/a.0a1b2c3d.html", "older");

        let mut found: Vec<_> =
            existing_artifacts(&storage, Path::new("/docs"), "a").unwrap().collect();
        found.sort();
        assert_eq!(
            found,
            vec![
                PathBuf::from("/docs/a.0a1b2c3d.html"),
                PathBuf::from("/docs/a.deadbeef.html"),
            ]
        );
    }

    #[rstest]
    #[case("a.deadbeef.txt")] // wrong extension
    #[case("a.deadbee.html")] // 7 hex chars
    #[case("a.deadbeef0.html")] // 9 hex chars
    #[case("a.DEADBEEF.html")] // uppercase hex
    #[case("a.nothexyz.html")] // non-hex
    #[case("b.deadbeef.html")] // different stem
    #[case("a.md")] // the source itself
    fn existing_artifacts_rejects_near_misses(#[case] name: &str) {
        let storage = MemStorage::new();
        storage.insert(format!("/docs/{name}"), "x");

        let found: Vec<_> =
            existing_artifacts(&storage, Path::new("/docs"), "a").unwrap().collect();
        assert!(found.is_empty(), "{name} should not match, got {found:?}");
    }

    #[test]
    fn existing_artifacts_escapes_stem_metacharacters() {
        let storage = MemStorage::new();
        // "a.b" must not be treated as "a<any>b".
        storage.insert("/docs/axb.deadbeef.html", "x");
        storage.insert("/docs/a.b.deadbeef.html", "y");

        let found: Vec<_> =
            existing_artifacts(&storage, Path::new("/docs"), "a.b").unwrap().collect();
        assert_eq!(found, vec![PathBuf::from("/docs/a.b.deadbeef.html")]);
    }
}
