//! Shared types for split and verify operations.

use docsplit_core::config::DEFAULT_PREFIX;
use serde::Serialize;
use std::path::PathBuf;

/// Options for a split operation.
#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Declaration-line prefix marking the start of an embedded document
    pub prefix: String,

    /// Directory to place artifacts in (default: beside the source blob)
    pub output_dir: Option<PathBuf>,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            output_dir: None,
        }
    }
}

/// One embedded document's full line range within the blob.
///
/// Lines are raw bytes with their original terminators, so artifacts written
/// from sub-documents concatenate back to the source blob byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubDocument {
    /// Zero-based ordinal in discovery order
    pub ordinal: usize,

    /// Raw lines, in original order
    pub lines: Vec<Vec<u8>>,
}

impl SubDocument {
    /// First raw line, if any.
    pub fn first_line(&self) -> Option<&[u8]> {
        self.lines.first().map(|l| l.as_slice())
    }

    /// Total byte length across all lines.
    pub fn byte_len(&self) -> u64 {
        self.lines.iter().map(|l| l.len() as u64).sum()
    }

    /// Number of lines.
    pub fn line_count(&self) -> u64 {
        self.lines.len() as u64
    }
}

/// Outcome of splitting one source blob.
#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    /// Source blob path
    pub source: PathBuf,

    /// Artifact paths, in ordinal order
    pub artifacts: Vec<PathBuf>,

    /// Number of declaration lines seen in the blob.
    ///
    /// Zero means the single-artifact fallback was taken.
    pub declaration_count: u64,

    /// Lines read from the blob
    pub lines: u64,

    /// Bytes read from the blob
    pub bytes: u64,

    /// Wall-clock duration of the split
    pub duration_secs: f64,
}

/// Outcome of splitting a batch of sources.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Per-source reports, in processing order
    pub reports: Vec<SplitReport>,

    /// Sources that failed and were skipped, with the failure message
    pub skipped: Vec<(PathBuf, String)>,

    /// Wall-clock duration of the whole batch
    pub duration_secs: f64,
}

impl BatchReport {
    /// Total artifacts produced across the batch.
    pub fn artifact_count(&self) -> usize {
        self.reports.iter().map(|r| r.artifacts.len()).sum()
    }

    /// Total bytes read across the batch.
    pub fn byte_count(&self) -> u64 {
        self.reports.iter().map(|r| r.bytes).sum()
    }
}

/// A single property violation found by verification.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum VerifyFailure {
    /// Expected artifact file does not exist
    MissingArtifact { path: PathBuf },

    /// Artifact exists but holds no bytes
    EmptyArtifact { path: PathBuf },

    /// Artifact's first line does not match the declaration prefix
    BadFirstLine { path: PathBuf },

    /// Artifact bytes differ from the corresponding sub-document
    ContentMismatch { path: PathBuf },
}

/// Outcome of verifying a completed split against its source blob.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    /// Source blob path
    pub source: PathBuf,

    /// Artifacts the blob should have produced
    pub expected_artifacts: u64,

    /// Declaration lines seen in the blob
    pub declaration_count: u64,

    /// Property violations, empty when the split is intact
    pub failures: Vec<VerifyFailure>,
}

impl VerifyReport {
    /// True when every checked property holds.
    pub fn ok(&self) -> bool {
        self.failures.is_empty()
    }
}
