//! Content-addressed output cache and per-document conversion pipeline.
//!
//! Artifacts are written as `<stem>.<fingerprint>.html` next to their source.
//! The filename itself is the cache index: freshness is an existence check on
//! the exact fingerprinted path, and staleness is detected purely from
//! directory listings. No separate index file exists to fall out of sync.

pub mod cache;
pub mod converter;
pub mod hasher;
pub mod namer;
pub mod storage;

pub use cache::{is_fresh, remove_stale};
pub use converter::{ConvertError, Converter, DocumentOutcome, PassReport};
pub use hasher::{FINGERPRINT_LEN, fingerprint};
pub use namer::{RENDERED_EXT, existing_artifacts, target_path};
pub use storage::{DiskStorage, MemStorage, Storage};
