//! Copy-if-changed sync from the canonical source into an IDE folder
//!
//! Not reachable from the binary. A file is copied when the destination
//! is missing or its digest differs from the source's. Nothing is ever
//! deleted at the destination.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{FileGroup, FileList};
use crate::digest::file_digest;
use crate::error::SyncError;

/// What to do with a single source/destination pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyDecision {
    Skip,
    Copy,
}

/// One file-list entry resolved against a source and destination root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCopy {
    pub group: FileGroup,
    pub relative: &'static str,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub decision: CopyDecision,
}

/// Outcome of applying a plan
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub copied: usize,
    pub skipped: usize,
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} file(s) copied, {} unchanged",
            self.copied, self.skipped
        )
    }
}

/// Decide whether `source` needs to be copied over `destination`
pub fn decide(source: &Path, destination: &Path) -> Result<CopyDecision, SyncError> {
    let src_digest = file_digest(source)
        .map_err(|e| SyncError::io(source, e))?
        .ok_or_else(|| SyncError::SourceMissing {
            path: source.to_path_buf(),
        })?;

    let dst_digest = file_digest(destination).map_err(|e| SyncError::io(destination, e))?;

    match dst_digest {
        Some(d) if d == src_digest => Ok(CopyDecision::Skip),
        _ => Ok(CopyDecision::Copy),
    }
}

/// Resolve every entry of `list` and decide what to do with it
pub fn plan(
    list: &FileList,
    canonical_root: &Path,
    destination_root: &Path,
) -> Result<Vec<PlannedCopy>, SyncError> {
    list.iter()
        .map(|(group, relative)| {
            let source = canonical_root.join(relative);
            let destination = destination_root.join(relative);
            let decision = decide(&source, &destination)?;
            Ok(PlannedCopy {
                group,
                relative,
                source,
                destination,
                decision,
            })
        })
        .collect()
}

/// Perform the copies in a plan, creating parent directories as needed
pub fn apply(plan: &[PlannedCopy]) -> Result<SyncReport, SyncError> {
    let mut report = SyncReport::default();

    for entry in plan {
        if entry.decision == CopyDecision::Skip {
            report.skipped += 1;
            continue;
        }

        if let Some(parent) = entry.destination.parent() {
            fs::create_dir_all(parent).map_err(|e| SyncError::io(parent, e))?;
        }
        fs::copy(&entry.source, &entry.destination)
            .map_err(|e| SyncError::io(&entry.destination, e))?;
        report.copied += 1;
    }

    Ok(report)
}

/// Plan and apply in one go
pub fn sync_folder(
    list: &FileList,
    canonical_root: &Path,
    destination_root: &Path,
) -> Result<SyncReport, SyncError> {
    let planned = plan(list, canonical_root, destination_root)?;
    apply(&planned)
}
