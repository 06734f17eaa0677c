//! Scanner module for directory traversal and content hashing.
//!
//! The scanner is divided into submodules:
//! - [`walker`]: sequential directory traversal and file discovery
//! - [`hasher`]: streaming BLAKE3 content digests

pub mod hasher;
pub mod walker;

use std::path::PathBuf;

pub use hasher::{digest_file, Digest, HashError, HASH_CHUNK_SIZE};
pub use walker::{Walker, KEEP_SENTINEL};

/// Metadata for a discovered regular file.
///
/// Ephemeral: exists only while the file is being routed through the
/// dedup/classify/copy pipeline.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Path to the file
    pub path: PathBuf,
    /// File size in bytes, as reported at visit time
    pub size: u64,
}

impl FileEntry {
    #[must_use]
    pub fn new(path: PathBuf, size: u64) -> Self {
        Self { path, size }
    }
}

/// Errors that can occur during directory scanning.
///
/// These are yielded per entry by the walker; the orchestrator logs them
/// and continues with the next entry.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Permission was denied when accessing a file or directory.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The entry vanished between listing and stat.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// An I/O error occurred while accessing an entry.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
