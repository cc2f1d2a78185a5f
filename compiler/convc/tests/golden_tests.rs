#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Golden tests for the generator.
//!
//! Every `golden/<name>.json` manifest is generated and compared against
//! `golden/<name>.go`. Each case is generated twice, sequentially and in
//! parallel, and both runs must produce the expected text.

use std::fs;
use std::path::{Path, PathBuf};

use convc::commands::{generate_file, GenerateOptions};
use pretty_assertions::assert_eq;

fn golden_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden")
}

fn manifests(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .expect("golden directory should exist")
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|e| e == "json"))
        .collect();
    files.sort();
    files
}

fn generate(manifest: &Path, parallel: bool) -> String {
    let options = GenerateOptions {
        output: None,
        parallel,
    };
    match generate_file(manifest, &options) {
        Ok(rendered) => rendered,
        Err(err) => panic!("{}: {}", manifest.display(), err.report()),
    }
}

#[test]
fn golden_outputs_match() {
    let cases = manifests(&golden_dir());
    assert!(!cases.is_empty(), "no golden manifests found");

    for manifest in cases {
        let expected_path = manifest.with_extension("go");
        let expected = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("{}: {e}", expected_path.display()));

        assert_eq!(
            generate(&manifest, false),
            expected,
            "sequential output differs for {}",
            manifest.display()
        );
        assert_eq!(
            generate(&manifest, true),
            expected,
            "parallel output differs for {}",
            manifest.display()
        );
    }
}

#[test]
fn written_file_matches_returned_text() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("users_gen.go");
    let manifest = golden_dir().join("users.json");
    let options = GenerateOptions {
        output: Some(output.clone()),
        parallel: true,
    };

    let rendered = generate_file(&manifest, &options).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), rendered);

    // Regenerating over an existing file is stable.
    let again = generate_file(&manifest, &options).unwrap();
    assert_eq!(again, rendered);
    assert_eq!(fs::read_to_string(&output).unwrap(), rendered);
}
