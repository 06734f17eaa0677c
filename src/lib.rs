//! mediseg - Media Tree Segregator
//!
//! Scans a source directory tree and copies each regular file into one of
//! three flat destination buckets (`images/`, `videos/`, `others/`) based on
//! its extension. Files whose content was already seen during the run are
//! skipped: files are bucketed by size, and a streaming BLAKE3 digest
//! confirms duplicates only once a second file of the same size appears.
//!
//! Source files are never moved or deleted; name collisions at the
//! destination are resolved with a `_1`, `_2`, ... suffix.

pub mod classify;
pub mod cli;
pub mod copier;
pub mod dedup;
pub mod logging;
pub mod organize;
pub mod progress;
pub mod scanner;

use anyhow::{Context, Result};

use crate::organize::{OrganizeConfig, OrganizeSummary, Organizer};

/// Run the application with parsed CLI arguments.
///
/// Initializes logging, then organizes the source tree into the destination
/// buckets. Returns the run summary so callers (and tests) can inspect the
/// outcome.
pub fn run_app(cli: cli::Cli) -> Result<OrganizeSummary> {
    logging::init_logging(cli.verbose, cli.quiet);

    let config = OrganizeConfig {
        progress_every: cli.progress_every,
        quiet: cli.quiet,
    };

    let organizer = Organizer::new(config);
    let summary = organizer
        .organize(&cli.source, &cli.dest)
        .with_context(|| format!("failed to organize {}", cli.source.display()))?;

    Ok(summary)
}
