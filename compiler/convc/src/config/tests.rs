use conv_diagnostic::{ErrorCode, Pos};
use conv_options::{MatchFlags, MatchRule, Style};
use pretty_assertions::assert_eq;

use super::*;
use crate::manifest::{MapDecl, OptionsDecl};

fn parse(json: &str) -> OptionsDecl {
    match serde_json::from_str(json) {
        Ok(decl) => decl,
        Err(err) => panic!("bad fixture: {err}"),
    }
}

#[test]
fn empty_declaration_gives_defaults() {
    let Ok(options) = resolve_options(&OptionsDecl::default(), Pos::default()) else {
        panic!("expected options");
    };
    assert_eq!(options.rule, MatchRule::Name);
    assert_eq!(options.style, Style::Return);
    assert_eq!(options.flags, MatchFlags::EXACT_CASE);
    assert!(options.matchers().is_empty());
}

#[test]
fn scalars_override_and_lists_append() {
    let defaults = parse(r#"{ "getter": true, "typecast": true, "skip": ["ID"], "preprocess": "a" }"#);
    let method = parse(r#"{ "typecast": false, "skip": ["Secret"], "style": "arg" }"#);
    let merged = defaults.overlay(&method);

    assert_eq!(merged.getter, Some(true));
    assert_eq!(merged.typecast, Some(false));
    assert_eq!(merged.skip, vec!["ID", "Secret"]);
    assert_eq!(merged.preprocess.as_deref(), Some("a"));

    let Ok(options) = resolve_options(&merged, Pos::new(2, 1)) else {
        panic!("expected options");
    };
    assert_eq!(options.style, Style::Arg);
    assert_eq!(options.flags, MatchFlags::EXACT_CASE | MatchFlags::GETTER);
    assert_eq!(options.skips().len(), 2);
    assert_eq!(options.preprocess.as_ref().map(|h| h.func.as_str()), Some("a"));
}

#[test]
fn default_mappings_are_registered_first() {
    let mut defaults = OptionsDecl::default();
    defaults.map.push(MapDecl {
        src: "A".to_string(),
        dst: "X".to_string(),
    });
    let mut method = OptionsDecl::default();
    method.map.push(MapDecl {
        src: "B".to_string(),
        dst: "X".to_string(),
    });
    let Ok(options) = resolve_options(&defaults.overlay(&method), Pos::default()) else {
        panic!("expected options");
    };
    assert_eq!(options.mapping_for("X", true).map(|m| m.src.as_str()), Some("A"));
}

#[test]
fn case_insensitive_and_scopes() {
    let decl = parse(
        r#"{ "exact_case": false, "scopes": [{ "pattern": "Profile", "getter": true }] }"#,
    );
    let Ok(options) = resolve_options(&decl, Pos::default()) else {
        panic!("expected options");
    };
    assert_eq!(options.flags, MatchFlags::empty());
    assert!(options.flags_for("Profile.Name").getter());
    assert!(!options.flags_for("Name").getter());
}

#[test]
fn bad_patterns_fail() {
    let decl = parse(r#"{ "skip": ["/(/"] }"#);
    let Err(err) = resolve_options(&decl, Pos::new(9, 3)) else {
        panic!("expected an error");
    };
    assert_eq!(err.code(), ErrorCode::E1003);
    assert_eq!(err.pos(), Pos::new(9, 3));
}

#[test]
fn blank_hook_is_unknown_function() {
    let decl = parse(r#"{ "postprocess": "  " }"#);
    let Err(err) = resolve_options(&decl, Pos::default()) else {
        panic!("expected an error");
    };
    assert_eq!(err.code(), ErrorCode::E1001);
}
