//! Document splitter for concatenated multi-root blobs.
//!
//! Some "XML" exports are not one document but many: a single file holding
//! several complete documents back to back, each opening with its own
//! declaration line. No XML parser will touch that. This crate splits such a
//! blob into one file per embedded document so the pieces can be processed as
//! valid documents, and can verify a finished split against the source.

pub mod boundary;
pub mod error;
pub mod scanner;
pub mod types;
pub mod verify;
pub mod writer;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use boundary::Boundary;
pub use error::{SplitError, SplitResult};
pub use scanner::Scanner;
pub use types::{BatchReport, SplitOptions, SplitReport, SubDocument, VerifyFailure, VerifyReport};
pub use verify::verify_split;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use walkdir::WalkDir;

/// Split one source blob into per-document artifacts.
///
/// Artifacts are written as their boundaries are discovered; besides the read
/// handle, at most one write handle is open at a time, and every handle is
/// released on each exit path. Already-written artifacts are not cleaned up
/// when a later write fails.
///
/// A blob with no declaration lines is not an error: the whole input becomes
/// artifact 0 and the report carries `declaration_count == 0` so callers can
/// tell the fallback from a genuine split. An empty blob produces no
/// artifacts. Numbering always starts at 0 and never skips.
pub fn split_file(source: &Path, options: &SplitOptions) -> SplitResult<SplitReport> {
    let start = Instant::now();

    tracing::info!("Splitting {:?} on prefix {:?}", source, options.prefix);

    if let Some(dir) = &options.output_dir {
        std::fs::create_dir_all(dir).map_err(|e| SplitError::Create {
            path: dir.clone(),
            source: e,
        })?;
    }

    let file = File::open(source).map_err(|e| SplitError::Open {
        path: source.to_path_buf(),
        source: e,
    })?;
    let mut scanner = Scanner::new(BufReader::new(file), Boundary::new(&options.prefix));

    let mut artifacts = Vec::new();

    for doc in scanner.by_ref() {
        let doc = doc.map_err(|e| SplitError::Read {
            path: source.to_path_buf(),
            source: e,
        })?;

        let path = writer::artifact_path(source, doc.ordinal, options.output_dir.as_deref());
        writer::write_artifact(&path, &doc)?;

        tracing::debug!(
            "Wrote artifact {:?}: {} lines, {} bytes",
            path,
            doc.line_count(),
            doc.byte_len()
        );
        artifacts.push(path);
    }

    let report = SplitReport {
        source: source.to_path_buf(),
        artifacts,
        declaration_count: scanner.declaration_count(),
        lines: scanner.lines_read(),
        bytes: scanner.bytes_read(),
        duration_secs: start.elapsed().as_secs_f64(),
    };

    if report.declaration_count == 0 && !report.artifacts.is_empty() {
        tracing::warn!(
            "No declaration lines in {:?}; emitted the whole input as {:?}",
            source,
            report.artifacts[0]
        );
    }

    tracing::info!(
        "Split {:?}: {} artifacts from {} lines ({} bytes) in {:.2}s",
        source,
        report.artifacts.len(),
        report.lines,
        report.bytes,
        report.duration_secs
    );

    Ok(report)
}

/// Split a batch of files and directories.
///
/// Directories are walked without following symlinks; entries are filtered by
/// include/exclude substring patterns. The target list is fixed before any
/// artifact is written: artifacts land beside their sources by default and
/// themselves open with the declaration prefix, so splitting mid-walk would
/// feed the walk its own output. A source that fails to split is logged and
/// skipped, and the batch continues.
pub fn split_all(
    paths: &[PathBuf],
    include: &[String],
    exclude: &[String],
    options: &SplitOptions,
) -> BatchReport {
    let start = Instant::now();

    let mut targets: Vec<PathBuf> = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path)
                .follow_links(false)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let entry_path = entry.path();
                if entry_path.is_file() && should_include(entry_path, include, exclude) {
                    targets.push(entry_path.to_path_buf());
                }
            }
        } else {
            // Explicit files bypass the include/exclude filters.
            targets.push(path.clone());
        }
    }

    let mut reports = Vec::new();
    let mut skipped = Vec::new();

    for path in &targets {
        match split_file(path, options) {
            Ok(report) => reports.push(report),
            Err(e) => {
                tracing::warn!("Skipping {:?}: {}", path, e);
                skipped.push((path.clone(), e.to_string()));
            }
        }
    }

    let report = BatchReport {
        reports,
        skipped,
        duration_secs: start.elapsed().as_secs_f64(),
    };

    tracing::info!(
        "Batch split complete: {} sources, {} artifacts, {} skipped in {:.2}s",
        report.reports.len(),
        report.artifact_count(),
        report.skipped.len(),
        report.duration_secs
    );

    report
}

/// Check if a file should be included based on patterns.
fn should_include(path: &Path, include: &[String], exclude: &[String]) -> bool {
    let path_str = path.to_string_lossy();

    // Check excludes first
    for pattern in exclude {
        if path_str.contains(pattern.as_str()) {
            return false;
        }
    }

    // If includes are specified, must match at least one
    if !include.is_empty() {
        return include.iter().any(|p| path_str.contains(p.as_str()));
    }

    true
}
