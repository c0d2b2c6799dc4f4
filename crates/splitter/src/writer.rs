//! Artifact naming and persistence.

use crate::error::{SplitError, SplitResult};
use crate::types::SubDocument;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Compute the artifact path for a sub-document.
///
/// Artifacts are named `{source-path}-{n}` with the zero-based ordinal
/// appended to the full source file name (`patent.data` becomes
/// `patent.data-0`, `patent.data-1`, ...). When `output_dir` is given the
/// artifact keeps that name but lands in the directory instead of beside the
/// source.
pub fn artifact_path(source: &Path, ordinal: usize, output_dir: Option<&Path>) -> PathBuf {
    match output_dir {
        Some(dir) => {
            let mut name = source
                .file_name()
                .unwrap_or_else(|| source.as_os_str())
                .to_os_string();
            name.push(format!("-{}", ordinal));
            dir.join(name)
        }
        None => {
            let mut full = source.as_os_str().to_os_string();
            full.push(format!("-{}", ordinal));
            PathBuf::from(full)
        }
    }
}

/// Write one sub-document's lines verbatim to `path`.
///
/// The file handle is scoped to this call; it is flushed and closed before
/// returning on every path, success or error.
pub fn write_artifact(path: &Path, doc: &SubDocument) -> SplitResult<()> {
    let file = File::create(path).map_err(|source| SplitError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    for line in &doc.lines {
        writer.write_all(line).map_err(|source| SplitError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    writer.flush().map_err(|source| SplitError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_path_beside_source() {
        let path = artifact_path(Path::new("data/patent.data"), 0, None);
        assert_eq!(path, PathBuf::from("data/patent.data-0"));

        let path = artifact_path(Path::new("patent.data"), 12, None);
        assert_eq!(path, PathBuf::from("patent.data-12"));
    }

    #[test]
    fn test_artifact_path_in_output_dir() {
        let path = artifact_path(Path::new("data/patent.data"), 3, Some(Path::new("out")));
        assert_eq!(path, PathBuf::from("out/patent.data-3"));
    }

    #[test]
    fn test_write_artifact_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc-0");
        let doc = SubDocument {
            ordinal: 0,
            lines: vec![b"<?xml a?>\n".to_vec(), b"<a/>".to_vec()],
        };

        write_artifact(&path, &doc).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, b"<?xml a?>\n<a/>");
    }

    #[test]
    fn test_write_artifact_create_failure() {
        let doc = SubDocument {
            ordinal: 0,
            lines: vec![b"<?xml?>\n".to_vec()],
        };
        let err = write_artifact(Path::new("/nonexistent-dir/doc-0"), &doc).unwrap_err();
        assert!(matches!(err, SplitError::Create { .. }));
    }
}
