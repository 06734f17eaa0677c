//! Streaming BLAKE3 content digests.
//!
//! Files are read in fixed-size chunks and fed incrementally into the hash
//! accumulator, so peak memory stays bounded regardless of file size.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Chunk size for streaming reads. Media files can be large; 8 MiB keeps
/// throughput high while bounding peak memory.
pub const HASH_CHUNK_SIZE: usize = 8 * 1024 * 1024;

/// A file content digest, encoded as lowercase hexadecimal.
///
/// Two files are considered duplicates iff they have the same size and the
/// same digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest(String);

impl Digest {
    /// The digest as a lowercase hex string.
    #[must_use]
    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors that can occur while digesting a file.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The file was not found (it may have been deleted mid-scan).
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl HashError {
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }
}

/// Compute the BLAKE3 digest of a file's full byte stream.
///
/// Reads in [`HASH_CHUNK_SIZE`] chunks. The empty stream yields the
/// well-defined constant empty digest, so zero-byte files all compare equal.
///
/// # Errors
///
/// Returns [`HashError`] if the file cannot be opened or read to
/// completion.
pub fn digest_file(path: &Path) -> Result<Digest, HashError> {
    let mut file = File::open(path).map_err(|e| HashError::from_io(path, e))?;
    let mut hasher = blake3::Hasher::new();
    let mut buf = vec![0u8; HASH_CHUNK_SIZE];

    loop {
        let read = file.read(&mut buf).map_err(|e| HashError::from_io(path, e))?;
        if read == 0 {
            break;
        }
        hasher.update(&buf[..read]);
    }

    Ok(Digest(hasher.finalize().to_hex().to_string()))
}
