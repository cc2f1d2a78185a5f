#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end tests of the `convc` binary.

use std::fs;
use std::process::{Command, Output};

fn convc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_convc"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("convc should run")
}

const BROKEN: &str = r#"{
    "package": "example.com/app/model",
    "types": [
        { "name": "User", "struct": [{ "name": "Name", "type": "string" }] }
    ],
    "methods": [
        { "name": "Good", "src": "*User", "dst": "*User" },
        { "name": "Bad", "src": "*User", "dst": "*User",
          "options": { "conv": [{ "func": "missing", "src": "Name" }] },
          "pos": { "line": 8, "column": 9 } }
    ]
}"#;

#[test]
fn generate_prints_to_stdout() {
    let manifest = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/golden/users.json");
    let out = convc(&["generate", manifest]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("// Code generated by convc. DO NOT EDIT.\n"));
    assert!(stdout.contains("func UserFromStorage("));
}

#[test]
fn failing_method_skips_write_and_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("broken.json");
    let output = dir.path().join("broken_gen.go");
    fs::write(&manifest, BROKEN).unwrap();

    let out = convc(&[
        "generate",
        manifest.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);
    assert!(!out.status.success());
    assert!(!output.exists());

    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("error[E1001]: unknown function `missing`"));
    assert!(stderr.contains("broken.json:8:9"));
    assert!(stderr.contains("in method `Bad`"));
    assert!(stderr.contains("error: 1 method failed"));
}

#[test]
fn explain_describes_codes() {
    let out = convc(&["explain", "E1007"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("E1007: hook function"));

    let out = convc(&["explain", "X1"]);
    assert!(!out.status.success());
}

#[test]
fn unknown_command_fails() {
    let out = convc(&["frobnicate"]);
    assert!(!out.status.success());
    assert!(String::from_utf8(out.stderr)
        .unwrap()
        .contains("Unknown command: frobnicate"));
}
