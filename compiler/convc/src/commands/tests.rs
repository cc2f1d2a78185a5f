use std::path::PathBuf;

use conv_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use super::*;

const MANIFEST: &str = r#"{
    "package": "example.com/app/model",
    "types": [
        { "name": "User", "struct": [{ "name": "Name", "type": "string" }] },
        { "package": "example.com/app/storage", "name": "User",
          "struct": [{ "name": "Name", "type": "string" }] }
    ],
    "methods": [
        { "name": "FromStorage", "src": "*storage.User", "dst": "*User" }
    ]
}"#;

fn write_manifest(dir: &TempDir, text: &str) -> PathBuf {
    let path = dir.path().join("convert.json");
    if let Err(err) = std::fs::write(&path, text) {
        panic!("cannot write fixture: {err}");
    }
    path
}

fn temp_dir() -> TempDir {
    match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(err) => panic!("cannot create temp dir: {err}"),
    }
}

#[test]
fn generate_writes_output() {
    let dir = temp_dir();
    let manifest = write_manifest(&dir, MANIFEST);
    let output = dir.path().join("convert_gen.go");
    let options = GenerateOptions {
        output: Some(output.clone()),
        parallel: false,
    };

    let Ok(rendered) = generate_file(&manifest, &options) else {
        panic!("expected generation to succeed");
    };
    let written = std::fs::read_to_string(&output).unwrap_or_default();
    assert_eq!(written, rendered);
    assert!(rendered.contains("func FromStorage(src *storage.User) (dst *User) {"));
}

#[test]
fn failed_methods_skip_the_write() {
    let dir = temp_dir();
    let text = MANIFEST.replace(
        r#""dst": "*User" }"#,
        r#""dst": "*User", "pos": { "line": 3, "column": 5 },
            "options": { "conv": [{ "func": "nope", "src": "Name" }] } }"#,
    );
    let manifest = write_manifest(&dir, &text);
    let output = dir.path().join("convert_gen.go");
    let options = GenerateOptions {
        output: Some(output.clone()),
        parallel: true,
    };

    let Err(err) = generate_file(&manifest, &options) else {
        panic!("expected a failure");
    };
    assert!(!output.exists());
    let RunError::Failed { count, diagnostics } = &err else {
        panic!("expected Failed, got {err:?}");
    };
    assert_eq!(*count, 1);
    assert_eq!(diagnostics[0].code, ErrorCode::E1001);
    assert_eq!(diagnostics[0].notes, vec!["in method `FromStorage`"]);
    assert_eq!(err.to_string(), "1 method failed");
    assert!(err.report().contains("convert.json:3:5"));
}

#[test]
fn check_counts_methods() {
    let dir = temp_dir();
    let manifest = write_manifest(&dir, MANIFEST);
    assert_eq!(check_file(&manifest, true).ok(), Some(1));
}

#[test]
fn malformed_manifest_is_reported() {
    let dir = temp_dir();
    let manifest = write_manifest(&dir, r#"{ "package": "p", "bogus": 1 }"#);
    let Err(RunError::Manifest(diagnostic)) = check_file(&manifest, false) else {
        panic!("expected a manifest error");
    };
    assert_eq!(diagnostic.code, ErrorCode::E2002);
}

#[test]
fn missing_manifest_is_a_read_error() {
    let dir = temp_dir();
    let missing = dir.path().join("absent.json");
    assert!(matches!(
        check_file(&missing, false),
        Err(RunError::Read { .. })
    ));
}

#[test]
fn explain_known_and_unknown_codes() {
    assert_eq!(
        explain_error("e1004").ok().as_deref(),
        Some("E1004: receiver type must be declared in the target package")
    );
    assert!(matches!(
        explain_error("E9999"),
        Err(RunError::UnknownCode(code)) if code == "E9999"
    ));
}
