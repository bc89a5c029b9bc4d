//! Discovery of candidate CSV files in a directory

use crate::augmenter::{augment_file, is_csv_path, AugmentOptions, AugmentReport};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

/// What happened when looking for the target file in a directory
#[derive(Debug)]
pub enum DiscoveryOutcome {
    /// The directory holds no CSV files at all
    NoCsvFiles,
    /// CSV files exist but the target is not one of them
    TargetMissing { candidates: Vec<PathBuf> },
    /// The target was found and augmented
    Processed {
        candidates: Vec<PathBuf>,
        report: AugmentReport,
    },
    /// The target was found but augmenting it failed
    Failed {
        candidates: Vec<PathBuf>,
        target: PathBuf,
        error: Error,
    },
}

impl DiscoveryOutcome {
    /// Candidate files that were found, empty for `NoCsvFiles`
    pub fn candidates(&self) -> &[PathBuf] {
        match self {
            DiscoveryOutcome::NoCsvFiles => &[],
            DiscoveryOutcome::TargetMissing { candidates }
            | DiscoveryOutcome::Processed { candidates, .. }
            | DiscoveryOutcome::Failed { candidates, .. } => candidates,
        }
    }
}

/// List CSV files directly inside `dir`, sorted by file name.
pub fn scan_csv_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir.as_ref())
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_file() && is_csv_path(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Augment `target` only if it is one of the CSV files in `dir`.
///
/// `target` is a file name relative to `dir`. Only a failure to read `dir`
/// itself is returned as `Err`; augmentation failures are reported as
/// [`DiscoveryOutcome::Failed`] alongside the candidates.
pub fn process_target<P: AsRef<Path>>(
    dir: P,
    target: &str,
    options: &AugmentOptions,
) -> Result<DiscoveryOutcome> {
    let dir = dir.as_ref();
    let candidates = scan_csv_files(dir)?;
    info!(dir = %dir.display(), count = candidates.len(), "scanned for CSV files");

    if candidates.is_empty() {
        return Ok(DiscoveryOutcome::NoCsvFiles);
    }

    let Some(target_path) = candidates
        .iter()
        .find(|p| p.file_name().is_some_and(|n| n == target))
        .cloned()
    else {
        return Ok(DiscoveryOutcome::TargetMissing { candidates });
    };

    match augment_file(&target_path, options) {
        Ok(report) => Ok(DiscoveryOutcome::Processed { candidates, report }),
        Err(error) => Ok(DiscoveryOutcome::Failed {
            candidates,
            target: target_path,
            error,
        }),
    }
}
