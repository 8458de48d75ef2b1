//! Core library for mdpress.
//!
//! Converts markdown source documents into HTML artifacts named after a
//! content fingerprint, so unchanged documents are never re-rendered and
//! stale output is removed as sources change.

pub mod convert;
pub mod render;
pub mod walker;

pub use convert::{Converter, DiskStorage, DocumentOutcome, PassReport, Storage};
pub use walker::{DirectoryWalker, WalkerError};
