//! End-to-end split tests over real files.

use crate::types::SplitOptions;
use crate::{split_all, split_file};
use std::fs;
use std::path::{Path, PathBuf};

/// Build a blob with a declaration line every `stride` lines.
fn blob_with_stride(documents: usize, stride: usize) -> String {
    let mut out = String::new();
    for n in 0..documents {
        out.push_str(&format!("<?xml version=\"1.0\"?><!-- doc {} -->\n", n));
        for i in 1..stride {
            out.push_str(&format!("<line n=\"{}\"/>\n", i));
        }
    }
    out
}

fn write_blob(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_split_produces_one_artifact_per_declaration() {
    let dir = tempfile::tempdir().unwrap();
    let blob = write_blob(dir.path(), "patent.data", &blob_with_stride(4, 10));

    let report = split_file(&blob, &SplitOptions::default()).unwrap();

    assert_eq!(report.artifacts.len(), 4);
    assert_eq!(report.declaration_count, 4);
    for (n, artifact) in report.artifacts.iter().enumerate() {
        assert_eq!(*artifact, dir.path().join(format!("patent.data-{}", n)));
        let contents = fs::read_to_string(artifact).unwrap();
        assert!(contents.starts_with("<?xml"));
        assert!(!contents.is_empty());
    }
}

#[test]
fn test_concatenated_artifacts_reproduce_blob() {
    let dir = tempfile::tempdir().unwrap();
    let original = blob_with_stride(3, 7);
    let blob = write_blob(dir.path(), "patent.data", &original);

    let report = split_file(&blob, &SplitOptions::default()).unwrap();

    let mut rebuilt = Vec::new();
    for artifact in &report.artifacts {
        rebuilt.extend_from_slice(&fs::read(artifact).unwrap());
    }
    assert_eq!(rebuilt, original.as_bytes());
}

#[test]
fn test_boundaries_at_fixed_line_positions() {
    // Declarations at line positions 0, 50 and 120 must split into
    // [0,50), [50,120), [120,end).
    let mut lines: Vec<String> = (0..150).map(|i| format!("<filler {}/>", i)).collect();
    for pos in [0usize, 50, 120] {
        lines[pos] = format!("<?xml version=\"1.0\"?><!-- at {} -->", pos);
    }
    let original = lines.join("\n") + "\n";

    let dir = tempfile::tempdir().unwrap();
    let blob = write_blob(dir.path(), "patent.data", &original);

    let report = split_file(&blob, &SplitOptions::default()).unwrap();
    assert_eq!(report.artifacts.len(), 3);

    let counts: Vec<usize> = report
        .artifacts
        .iter()
        .map(|a| fs::read_to_string(a).unwrap().lines().count())
        .collect();
    assert_eq!(counts, vec![50, 70, 30]);
}

#[test]
fn test_declaration_free_blob_becomes_artifact_zero() {
    let dir = tempfile::tempdir().unwrap();
    let blob = write_blob(dir.path(), "notes.txt", "plain\nlines\nonly\n");

    let report = split_file(&blob, &SplitOptions::default()).unwrap();

    assert_eq!(report.declaration_count, 0);
    assert_eq!(report.artifacts, vec![dir.path().join("notes.txt-0")]);
    assert_eq!(
        fs::read_to_string(&report.artifacts[0]).unwrap(),
        "plain\nlines\nonly\n"
    );
}

#[test]
fn test_empty_blob_produces_no_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let blob = write_blob(dir.path(), "empty.data", "");

    let report = split_file(&blob, &SplitOptions::default()).unwrap();

    assert!(report.artifacts.is_empty());
    assert_eq!(report.lines, 0);
    assert_eq!(report.bytes, 0);
}

#[test]
fn test_blob_ending_on_declaration_line() {
    let dir = tempfile::tempdir().unwrap();
    let blob = write_blob(dir.path(), "patent.data", "<?xml a?>\n<a/>\n<?xml b?>\n");

    let report = split_file(&blob, &SplitOptions::default()).unwrap();

    assert_eq!(report.artifacts.len(), 2);
    assert_eq!(
        fs::read_to_string(&report.artifacts[1]).unwrap(),
        "<?xml b?>\n"
    );
}

#[test]
fn test_source_blob_is_not_mutated() {
    let dir = tempfile::tempdir().unwrap();
    let original = blob_with_stride(2, 5);
    let blob = write_blob(dir.path(), "patent.data", &original);

    split_file(&blob, &SplitOptions::default()).unwrap();

    assert_eq!(fs::read_to_string(&blob).unwrap(), original);
}

#[test]
fn test_output_dir_redirects_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let blob = write_blob(dir.path(), "patent.data", &blob_with_stride(2, 3));
    let out = dir.path().join("out");

    let options = SplitOptions {
        output_dir: Some(out.clone()),
        ..SplitOptions::default()
    };
    let report = split_file(&blob, &options).unwrap();

    assert_eq!(
        report.artifacts,
        vec![out.join("patent.data-0"), out.join("patent.data-1")]
    );
    assert!(out.join("patent.data-1").exists());
}

#[test]
fn test_missing_source_is_an_open_error() {
    let err = split_file(Path::new("/nonexistent/patent.data"), &SplitOptions::default())
        .unwrap_err();
    assert!(matches!(err, crate::SplitError::Open { .. }));
}

#[test]
fn test_custom_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let blob = write_blob(
        dir.path(),
        "cards.vcf",
        "BEGIN:VCARD\nFN:Ada\nEND:VCARD\nBEGIN:VCARD\nFN:Grace\nEND:VCARD\n",
    );

    let options = SplitOptions {
        prefix: "BEGIN:VCARD".to_string(),
        ..SplitOptions::default()
    };
    let report = split_file(&blob, &options).unwrap();

    assert_eq!(report.artifacts.len(), 2);
    assert!(fs::read_to_string(&report.artifacts[1])
        .unwrap()
        .contains("Grace"));
}

#[test]
fn test_split_all_walks_directories_and_skips_failures() {
    let dir = tempfile::tempdir().unwrap();
    let tree = dir.path().join("tree");
    fs::create_dir_all(tree.join("nested")).unwrap();
    fs::write(tree.join("a.data"), blob_with_stride(2, 3)).unwrap();
    fs::write(tree.join("nested/b.data"), blob_with_stride(3, 2)).unwrap();
    fs::write(tree.join("skip.tmp"), "ignored\n").unwrap();

    let missing = dir.path().join("gone.data");
    let report = split_all(
        &[tree.clone(), missing],
        &[],
        &[".tmp".to_string()],
        &SplitOptions::default(),
    );

    assert_eq!(report.reports.len(), 2);
    assert_eq!(report.artifact_count(), 5);
    assert_eq!(report.skipped.len(), 1);
    assert!(report.skipped[0].0.ends_with("gone.data"));
}

#[test]
fn test_split_all_never_splits_its_own_artifacts() {
    // Artifacts land beside their sources and open with the declaration
    // prefix, so a walk that picks up just-written output would split each
    // blob's artifacts again into doubly-suffixed files.
    let dir = tempfile::tempdir().unwrap();
    let tree = dir.path().join("tree");
    fs::create_dir_all(&tree).unwrap();
    let blobs = 40;
    for n in 0..blobs {
        fs::write(tree.join(format!("blob{}.data", n)), blob_with_stride(2, 3)).unwrap();
    }

    let report = split_all(&[tree.clone()], &[], &[], &SplitOptions::default());

    assert_eq!(report.reports.len(), blobs);
    assert_eq!(report.artifact_count(), blobs * 2);
    assert!(report.skipped.is_empty());

    for entry in fs::read_dir(&tree).unwrap() {
        let name = entry.unwrap().file_name().into_string().unwrap();
        assert!(
            !name.ends_with("-0-0") && !name.ends_with("-1-0"),
            "artifact was split again: {}",
            name
        );
    }
}

#[test]
fn test_split_all_include_filter() {
    let dir = tempfile::tempdir().unwrap();
    let tree = dir.path().join("tree");
    fs::create_dir_all(&tree).unwrap();
    fs::write(tree.join("a.data"), blob_with_stride(1, 2)).unwrap();
    fs::write(tree.join("b.log"), "noise\n").unwrap();

    let report = split_all(
        &[tree],
        &[".data".to_string()],
        &[],
        &SplitOptions::default(),
    );

    assert_eq!(report.reports.len(), 1);
    assert!(report.reports[0].source.ends_with("a.data"));
}
