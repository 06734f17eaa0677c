//! Command-line interface definitions for mediseg.
//!
//! # Example
//!
//! ```bash
//! # Sort ./resources into ./segregated/{images,videos,others}
//! mediseg
//!
//! # Explicit source and destination
//! mediseg ~/Pictures/dump ~/Pictures/sorted
//!
//! # Verbose mode for debugging
//! mediseg -v ~/Pictures/dump ~/Pictures/sorted
//! ```

use clap::Parser;
use std::path::PathBuf;

use crate::organize::PROGRESS_EVERY;

/// Sort a media tree into images/videos/others, skipping duplicate content.
///
/// Every regular file under SOURCE is classified by extension and copied
/// flat into DEST/images, DEST/videos or DEST/others. Content duplicates
/// (same size and same BLAKE3 digest) are copied only once per run.
#[derive(Debug, Parser)]
#[command(name = "mediseg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source directory tree to scan
    #[arg(value_name = "SOURCE", default_value = "resources")]
    pub source: PathBuf,

    /// Destination directory for the images/videos/others buckets
    #[arg(value_name = "DEST", default_value = "segregated")]
    pub dest: PathBuf,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output and all logs except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Update the progress line every N processed files
    #[arg(long, value_name = "N", default_value_t = PROGRESS_EVERY)]
    pub progress_every: u64,
}
