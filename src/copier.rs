//! Collision-safe file copier.
//!
//! Copies a file flat into a destination directory, resolving filename
//! collisions with a `stem_N.ext` linear probe. The probe assumes no other
//! writer touches the destination concurrently.
//!
//! Permission denial on the copy itself is a soft failure: the file is
//! skipped and the run continues. Every other I/O failure is surfaced to
//! the caller.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use filetime::FileTime;

/// Result of a copy attempt, so callers and tests can assert on the
/// outcome instead of relying on the absence of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The file was copied; holds the final target path (possibly suffixed).
    Copied(PathBuf),
    /// The filesystem denied write permission; the file was skipped.
    SkippedPermission,
}

/// Errors that abort the run when copying.
#[derive(thiserror::Error, Debug)]
pub enum CopyError {
    /// The destination directory could not be created.
    #[error("failed to create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source path has no final filename component.
    #[error("source has no file name: {0}")]
    NoFileName(PathBuf),

    /// The copy failed for a reason other than permission denial.
    #[error("failed to copy {src} to {dest}: {source}")]
    Copy {
        src: PathBuf,
        dest: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Copy `src` into `dest_dir`, creating the directory as needed.
///
/// The target keeps the source's base filename; if taken, `_1`, `_2`, ...
/// is inserted before the extension until an unused name is found. The
/// source modification time is preserved on a best-effort basis.
///
/// # Errors
///
/// Returns [`CopyError`] for directory-creation failures and for copy
/// failures other than permission denial.
pub fn copy_into(src: &Path, dest_dir: &Path) -> Result<CopyOutcome, CopyError> {
    fs::create_dir_all(dest_dir).map_err(|e| CopyError::CreateDir {
        path: dest_dir.to_path_buf(),
        source: e,
    })?;

    let name = src
        .file_name()
        .ok_or_else(|| CopyError::NoFileName(src.to_path_buf()))?
        .to_string_lossy()
        .into_owned();

    let target = unique_target(dest_dir, &name);

    match fs::copy(src, &target) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            log::warn!("permission denied copying {}, skipping", src.display());
            return Ok(CopyOutcome::SkippedPermission);
        }
        Err(e) => {
            return Err(CopyError::Copy {
                src: src.to_path_buf(),
                dest: target,
                source: e,
            });
        }
    }

    preserve_mtime(src, &target);

    Ok(CopyOutcome::Copied(target))
}

/// Find an unused target path, probing `stem_1.ext`, `stem_2.ext`, ...
///
/// A dot at position 0 is a hidden-file marker, not an extension separator.
fn unique_target(dest_dir: &Path, name: &str) -> PathBuf {
    let target = dest_dir.join(name);
    if !target.exists() {
        return target;
    }

    let (stem, suffix) = match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    };

    let mut i: u64 = 1;
    loop {
        let candidate = dest_dir.join(format!("{stem}_{i}{suffix}"));
        if !candidate.exists() {
            return candidate;
        }
        i += 1;
    }
}

/// Carry the source's modification time over to the copy. Failure here is
/// not worth aborting the run for.
fn preserve_mtime(src: &Path, target: &Path) {
    match fs::metadata(src) {
        Ok(meta) => {
            let mtime = FileTime::from_last_modification_time(&meta);
            if let Err(e) = filetime::set_file_mtime(target, mtime) {
                log::debug!("could not set mtime on {}: {}", target.display(), e);
            }
        }
        Err(e) => log::debug!("could not stat {}: {}", src.display(), e),
    }
}
