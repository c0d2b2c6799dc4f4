//! Post-split verification.
//!
//! Re-scans the source blob and checks the produced artifacts against it:
//! every expected artifact exists, none is empty, each opens with the
//! declaration prefix, and their ordinal-order concatenation reproduces the
//! blob byte-for-byte. The last property is checked piecewise: if every
//! artifact equals its sub-document, the concatenation equals the blob.

use crate::boundary::Boundary;
use crate::error::{SplitError, SplitResult};
use crate::scanner::Scanner;
use crate::types::{SplitOptions, VerifyFailure, VerifyReport};
use crate::writer::artifact_path;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Verify a completed split of `source` against the artifacts on disk.
///
/// Failures are collected, not short-circuited, so one report names every
/// broken property. I/O problems on the source itself are errors; problems
/// on an artifact are findings.
pub fn verify_split(source: &Path, options: &SplitOptions) -> SplitResult<VerifyReport> {
    let boundary = Boundary::new(&options.prefix);

    let file = File::open(source).map_err(|e| SplitError::Open {
        path: source.to_path_buf(),
        source: e,
    })?;
    let mut scanner = Scanner::new(BufReader::new(file), boundary.clone());

    let mut failures = Vec::new();
    let mut expected = 0u64;

    for doc in scanner.by_ref() {
        let doc = doc.map_err(|e| SplitError::Read {
            path: source.to_path_buf(),
            source: e,
        })?;
        expected += 1;

        let path = artifact_path(source, doc.ordinal, options.output_dir.as_deref());

        let actual = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(_) => {
                failures.push(VerifyFailure::MissingArtifact { path });
                continue;
            }
        };

        if actual.is_empty() {
            failures.push(VerifyFailure::EmptyArtifact { path });
            continue;
        }

        // The fallback artifact of a declaration-free blob is exempt from the
        // first-line property; its sub-document never opened with the prefix.
        let doc_declared = doc.first_line().is_some_and(|l| boundary.matches(l));
        if doc_declared && !boundary.matches(first_line(&actual)) {
            failures.push(VerifyFailure::BadFirstLine { path: path.clone() });
        }

        let expected_bytes: Vec<u8> = doc.lines.iter().flatten().copied().collect();
        if actual != expected_bytes {
            failures.push(VerifyFailure::ContentMismatch { path });
        }
    }

    let report = VerifyReport {
        source: source.to_path_buf(),
        expected_artifacts: expected,
        declaration_count: scanner.declaration_count(),
        failures,
    };

    if report.ok() {
        tracing::info!(
            "Verified split of {:?}: {} artifacts intact",
            source,
            report.expected_artifacts
        );
    } else {
        tracing::warn!(
            "Split of {:?} failed verification: {} finding(s)",
            source,
            report.failures.len()
        );
    }

    Ok(report)
}

/// Slice of `bytes` up to and including the first newline.
fn first_line(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == b'\n') {
        Some(pos) => &bytes[..=pos],
        None => bytes,
    }
}
