//! Sequential directory walker built on walkdir.
//!
//! Visits every entry under a root directory in deterministic (sorted)
//! order, yielding only regular files. Directories, symlinks and other
//! non-regular entries are skipped, as is the `.gitkeep` sentinel used to
//! keep otherwise-empty directories under version control.
//!
//! Per-entry failures (an entry vanishing between listing and stat, an
//! unreadable subdirectory) are yielded as [`ScanError`] values rather than
//! stopping iteration.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{FileEntry, ScanError};

/// Placeholder filename ignored during traversal.
pub const KEEP_SENTINEL: &str = ".gitkeep";

/// Sequential directory walker for file discovery.
#[derive(Debug)]
pub struct Walker {
    root: PathBuf,
}

impl Walker {
    /// Create a new walker for the given root directory.
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Walk the directory tree, yielding regular-file entries.
    ///
    /// Errors are yielded inline so the caller decides whether to skip or
    /// abort; this walker never aborts on its own.
    pub fn walk(&self) -> impl Iterator<Item = Result<FileEntry, ScanError>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry_result| match entry_result {
                Ok(entry) => {
                    // Symlinks, directories and special files are not copied.
                    if !entry.file_type().is_file() {
                        return None;
                    }
                    if entry.file_name() == KEEP_SENTINEL {
                        log::trace!("ignoring sentinel: {}", entry.path().display());
                        return None;
                    }
                    match entry.metadata() {
                        Ok(meta) => Some(Ok(FileEntry::new(entry.into_path(), meta.len()))),
                        Err(e) => Some(Err(self.map_error(e))),
                    }
                }
                Err(e) => Some(Err(self.map_error(e))),
            })
    }

    /// Convert a walkdir error into a [`ScanError`].
    fn map_error(&self, error: walkdir::Error) -> ScanError {
        let path = error
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);
        match error.io_error().map(io::Error::kind) {
            Some(io::ErrorKind::PermissionDenied) => ScanError::PermissionDenied(path),
            Some(io::ErrorKind::NotFound) => ScanError::NotFound(path),
            _ => ScanError::Io {
                path,
                source: io::Error::other(error.to_string()),
            },
        }
    }
}
