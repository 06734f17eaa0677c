//! Duplicate index: size-bucketed, digest-confirmed duplicate detection.
//!
//! Files are bucketed by byte length as a cheap pre-filter; content digests
//! are only computed once a second file of the same size appears. A bucket
//! advances monotonically:
//!
//! ```text
//! (absent) -> Single(path) -> Multi(digests)
//! ```
//!
//! The first file of a size is stored by path without hashing it. The first
//! collision hashes both the stored path (lazily) and the incoming file;
//! distinct contents promote the bucket to a digest set. The index lives
//! for one run only; nothing persists across runs, so files already present
//! in the destination from a prior run are not deduplicated against.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::scanner::{digest_file, Digest, HashError};

/// Per-size dedup state. Absence of the key means no file of that size has
/// been seen yet.
#[derive(Debug)]
enum SizeBucket {
    /// Exactly one file of this size seen; its digest has not been computed.
    Single(PathBuf),
    /// Two or more distinct-content files of this size seen.
    Multi(HashSet<Digest>),
}

/// Tracks observed file content per size bucket for the lifetime of one run.
#[derive(Debug, Default)]
pub struct DuplicateIndex {
    buckets: HashMap<u64, SizeBucket>,
}

impl DuplicateIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct sizes observed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Record a file and report whether it duplicates previously seen content.
    ///
    /// Returns `Ok(true)` iff a file with the same size and the same digest
    /// was already observed. The first file of a given size is never hashed;
    /// hashing cost is only paid once a second file of that size arrives.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] if either the stored or the incoming file
    /// cannot be read to completion.
    pub fn observe(&mut self, size: u64, path: &Path) -> Result<bool, HashError> {
        match self.buckets.entry(size) {
            Entry::Vacant(slot) => {
                slot.insert(SizeBucket::Single(path.to_path_buf()));
                Ok(false)
            }
            Entry::Occupied(mut slot) => {
                let first = match slot.get() {
                    SizeBucket::Single(existing) => Some(existing.clone()),
                    SizeBucket::Multi(_) => None,
                };

                if let Some(first) = first {
                    // First collision for this size: hash the stored file
                    // lazily, then the incoming one.
                    let first_digest = digest_file(&first)?;
                    let digest = digest_file(path)?;
                    if digest == first_digest {
                        log::debug!(
                            "duplicate of {}: {}",
                            first.display(),
                            path.display()
                        );
                        return Ok(true);
                    }
                    let mut digests = HashSet::with_capacity(2);
                    digests.insert(first_digest);
                    digests.insert(digest);
                    slot.insert(SizeBucket::Multi(digests));
                    Ok(false)
                } else {
                    let digest = digest_file(path)?;
                    if let SizeBucket::Multi(digests) = slot.get_mut() {
                        if !digests.insert(digest) {
                            log::debug!("duplicate content: {}", path.display());
                            return Ok(true);
                        }
                    }
                    Ok(false)
                }
            }
        }
    }
}
