use conv_diagnostic::{ConfigError, ErrorCode, Pos};
use conv_types::{Idx, TypeOracle};
use pretty_assertions::assert_eq;

use super::*;
use crate::manifest::Manifest;

fn load_json(text: &str) -> Result<Loaded, ConfigError> {
    load(&Manifest::from_json(text)?)
}

#[test]
fn self_referential_struct_loads() {
    let Ok(mut loaded) = load_json(
        r#"{
            "package": "example.com/app/model",
            "types": [{
                "name": "Node",
                "struct": [
                    { "name": "Value", "type": "int" },
                    { "name": "Next", "type": "*Node" }
                ]
            }]
        }"#,
    ) else {
        panic!("expected manifest to load");
    };
    let Ok(node) = loaded.resolve("Node", "example.com/app/model", Pos::default()) else {
        panic!("expected Node to resolve");
    };
    let fields = loaded.pool.fields(node);
    assert_eq!(fields.len(), 2);
    assert_eq!(loaded.pool.deref(fields[1].ty), node);
}

#[test]
fn forward_references_across_packages() {
    let Ok(mut loaded) = load_json(
        r#"{
            "package": "example.com/app/model",
            "types": [
                { "name": "User", "struct": [{ "name": "Status", "type": "storage.Status" }] },
                { "package": "example.com/app/storage", "name": "Status", "underlying": "int",
                  "methods": [{ "name": "String", "results": ["string"] }] }
            ]
        }"#,
    ) else {
        panic!("expected manifest to load");
    };
    let Ok(status) = loaded.resolve("storage.Status", "example.com/app/model", Pos::default())
    else {
        panic!("expected storage.Status to resolve");
    };
    assert!(loaded.pool.implements_stringer(status));
    assert_eq!(loaded.pool.underlying(status), Idx::INT);
}

#[test]
fn functions_default_to_manifest_package() {
    let Ok(loaded) = load_json(
        r#"{
            "package": "example.com/app/model",
            "functions": [
                { "name": "toStatus", "params": ["int"], "results": ["string", "error"] },
                { "package": "example.com/app/conv", "name": "Upper",
                  "params": ["string"], "results": ["string"] }
            ]
        }"#,
    ) else {
        panic!("expected manifest to load");
    };
    let local = loaded.pool.function("toStatus", "example.com/app/model");
    assert_eq!(local.map(|f| f.results.clone()), Some(vec![Idx::STRING, Idx::ERROR]));
    let foreign = loaded.pool.function("conv.Upper", "example.com/app/model");
    assert_eq!(foreign.map(|f| f.package.as_str()), Some("example.com/app/conv"));
}

#[test]
fn unknown_field_type_is_reported_with_position() {
    let err = load_json(
        r#"{
            "package": "p",
            "types": [{ "name": "A", "struct": [{ "name": "B", "type": "Missing" }],
                        "pos": { "line": 4, "column": 1 } }]
        }"#,
    );
    let Err(err) = err else {
        panic!("expected an error");
    };
    assert_eq!(err.code(), ErrorCode::E2001);
    assert_eq!(err.pos(), Pos::new(4, 1));
}

#[test]
fn type_needs_exactly_one_body() {
    for body in [
        r#""struct": [], "underlying": "int""#,
        r#""methods": []"#,
    ] {
        let text = format!(r#"{{ "package": "p", "types": [{{ "name": "A", {body} }}] }}"#);
        let Err(err) = load_json(&text) else {
            panic!("expected an error for {body}");
        };
        assert_eq!(err.code(), ErrorCode::E2002);
    }
}
