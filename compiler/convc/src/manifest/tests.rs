use pretty_assertions::assert_eq;

use super::*;
use conv_diagnostic::ErrorCode;

#[test]
fn minimal_manifest() {
    let manifest = Manifest::from_json(r#"{ "package": "example.com/app/model" }"#);
    let Ok(manifest) = manifest else {
        panic!("expected manifest to parse");
    };
    assert_eq!(manifest.package, "example.com/app/model");
    assert!(manifest.types.is_empty());
    assert!(manifest.methods.is_empty());
    assert_eq!(manifest.defaults.getter, None);
}

#[test]
fn full_method_declaration() {
    let text = r#"{
        "package": "example.com/app/model",
        "types": [
            { "name": "User", "struct": [{ "name": "Name", "type": "string" }],
              "methods": [{ "name": "Label", "results": ["string"] }] },
            { "name": "Status", "underlying": "int" }
        ],
        "functions": [{ "name": "toStatus", "params": ["int"], "results": ["Status", "error"] }],
        "defaults": { "getter": true, "skip": ["ID"] },
        "methods": [{
            "name": "ToModel",
            "src": "*storage.User",
            "dst": "*User",
            "receiver": "u",
            "style": "arg",
            "options": {
                "rule": "none",
                "map": [{ "src": "Profile.Name()", "dst": "Name" }],
                "conv": [{ "func": "toStatus", "src": "Status" }],
                "literal": [{ "dst": "Kind", "value": "\"user\"" }],
                "scopes": [{ "pattern": "Profile", "typecast": true }],
                "postprocess": "validate"
            },
            "pos": { "line": 12, "column": 2 }
        }]
    }"#;
    let Ok(manifest) = Manifest::from_json(text) else {
        panic!("expected manifest to parse");
    };

    assert_eq!(manifest.types.len(), 2);
    assert_eq!(manifest.types[0].methods[0].results, vec!["string"]);
    assert_eq!(manifest.types[1].underlying.as_deref(), Some("int"));
    assert_eq!(manifest.defaults.skip, vec!["ID"]);

    let method = &manifest.methods[0];
    assert_eq!(method.receiver.as_deref(), Some("u"));
    assert_eq!(method.style, Some(StyleDecl::Arg));
    assert_eq!(method.options.rule, Some(RuleDecl::None));
    assert_eq!(method.options.conv[0].dst, None);
    assert_eq!(method.options.scopes[0].typecast, Some(true));
    assert_eq!(Pos::from(method.pos), Pos::new(12, 2));
}

#[test]
fn unknown_keys_are_rejected() {
    let err = Manifest::from_json(r#"{ "package": "p", "methds": [] }"#);
    let Err(err) = err else {
        panic!("expected an error");
    };
    assert_eq!(err.code(), ErrorCode::E2002);
}

#[test]
fn syntax_errors_are_reported() {
    let Err(err) = Manifest::from_json("{ \"package\": ") else {
        panic!("expected an error");
    };
    assert!(matches!(err, ConfigError::InvalidManifest { .. }));
}
