//! Orchestrator: walks the source tree and routes each file through the
//! dedup/classify/copy pipeline.
//!
//! Error policy (per file):
//! - visitation failures (stat races, unreadable entries) are logged and
//!   skipped; the walk continues
//! - digest read failures abort the run
//! - copy failures abort the run, except permission denial, which skips
//!   the file and continues

use std::path::{Path, PathBuf};

use crate::classify::{classify, Category};
use crate::copier::{copy_into, CopyError, CopyOutcome};
use crate::dedup::DuplicateIndex;
use crate::progress::Progress;
use crate::scanner::{HashError, Walker};

/// Default interval, in processed files, between progress refreshes.
pub const PROGRESS_EVERY: u64 = 500;

/// Configuration for an organize run.
#[derive(Debug, Clone)]
pub struct OrganizeConfig {
    /// Refresh the progress line every N processed files.
    pub progress_every: u64,
    /// Suppress the progress line entirely.
    pub quiet: bool,
}

impl Default for OrganizeConfig {
    fn default() -> Self {
        Self {
            progress_every: PROGRESS_EVERY,
            quiet: false,
        }
    }
}

/// Errors that abort an organize run.
#[derive(thiserror::Error, Debug)]
pub enum OrganizeError {
    /// The source root does not exist.
    #[error("source folder not found: {0}")]
    SourceMissing(PathBuf),

    /// The source root is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A file could not be read to completion while digesting.
    #[error(transparent)]
    Hash(#[from] HashError),

    /// A copy failed for a reason other than permission denial.
    #[error(transparent)]
    Copy(#[from] CopyError),
}

/// Counters from a completed organize run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizeSummary {
    /// Non-duplicate files successfully copied into a bucket.
    pub processed: u64,
    /// Files skipped because their content was already seen this run.
    pub duplicates: u64,
    /// Files skipped because the copy was denied write permission.
    pub permission_skips: u64,
    /// Entries skipped because they could not be visited.
    pub walk_errors: u64,
}

/// Runs the scan-dedup-classify-copy pipeline over a source tree.
pub struct Organizer {
    config: OrganizeConfig,
}

impl Organizer {
    #[must_use]
    pub fn new(config: OrganizeConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(OrganizeConfig::default())
    }

    /// Organize `source` into `dest/{images,videos,others}`.
    ///
    /// Destination directories are created on demand. Copies are flat: the
    /// source subdirectory structure is not preserved. Only non-duplicate,
    /// successfully copied files count toward `processed`.
    ///
    /// # Errors
    ///
    /// Returns [`OrganizeError`] if the source root is missing or not a
    /// directory, or on a fatal per-file failure (see module docs).
    pub fn organize(&self, source: &Path, dest: &Path) -> Result<OrganizeSummary, OrganizeError> {
        if !source.exists() {
            return Err(OrganizeError::SourceMissing(source.to_path_buf()));
        }
        if !source.is_dir() {
            return Err(OrganizeError::NotADirectory(source.to_path_buf()));
        }

        log::info!("organizing {} into {}", source.display(), dest.display());

        let bucket_dirs = BucketDirs::new(dest);
        let mut index = DuplicateIndex::new();
        let mut summary = OrganizeSummary::default();
        let progress = Progress::new(self.config.quiet, self.config.progress_every);

        for entry in Walker::new(source).walk() {
            let file = match entry {
                Ok(file) => file,
                Err(e) => {
                    log::warn!("skipping entry: {e}");
                    summary.walk_errors += 1;
                    continue;
                }
            };

            if index.observe(file.size, &file.path)? {
                summary.duplicates += 1;
                continue;
            }

            let name = file
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let category = classify(&name);

            match copy_into(&file.path, bucket_dirs.for_category(category))? {
                CopyOutcome::Copied(target) => {
                    log::trace!("{} -> {}", file.path.display(), target.display());
                    summary.processed += 1;
                    progress.tick(summary.processed);
                }
                CopyOutcome::SkippedPermission => {
                    summary.permission_skips += 1;
                }
            }
        }

        progress.finish(summary.processed);
        log::info!(
            "done: {} copied, {} duplicates skipped, {} permission skips, {} walk errors",
            summary.processed,
            summary.duplicates,
            summary.permission_skips,
            summary.walk_errors
        );

        Ok(summary)
    }
}

/// The three destination bucket directories.
struct BucketDirs {
    images: PathBuf,
    videos: PathBuf,
    others: PathBuf,
}

impl BucketDirs {
    fn new(dest: &Path) -> Self {
        Self {
            images: dest.join(Category::Image.dir_name()),
            videos: dest.join(Category::Video.dir_name()),
            others: dest.join(Category::Other.dir_name()),
        }
    }

    fn for_category(&self, category: Category) -> &Path {
        match category {
            Category::Image => &self.images,
            Category::Video => &self.videos,
            Category::Other => &self.others,
        }
    }
}
