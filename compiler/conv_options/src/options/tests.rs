use conv_diagnostic::{ConfigError, Pos};

use super::*;

fn pos() -> Pos {
    Pos::new(1, 1)
}

#[test]
fn skip_lookup_honours_case_rule() {
    let mut opts = Options::new();
    assert!(opts.add_skip("Created", pos()).is_ok());
    assert!(opts.add_skip("/^Internal/", pos()).is_ok());

    assert!(opts.skip_for("Created", true).is_some());
    assert!(opts.skip_for("created", true).is_none());
    assert!(opts.skip_for("created", false).is_some());
    assert!(opts.skip_for("InternalID", true).is_some());
    assert!(opts.skip_for("Name", true).is_none());
}

#[test]
fn first_registered_matcher_wins() {
    let mut opts = Options::new();
    assert!(opts.add_mapping("First", "Name", pos()).is_ok());
    assert!(opts.add_mapping("Second", "Name", pos()).is_ok());
    assert!(opts.add_converter("toA", "A", Some("Name"), pos()).is_ok());
    assert!(opts.add_converter("toB", "B", Some("Name"), pos()).is_ok());

    let mapping = opts.mapping_for("Name", true).map(|m| m.src.as_str());
    assert_eq!(mapping, Some("First"));
    let conv = opts.converter_for("Name", true).map(|c| c.func.as_str());
    assert_eq!(conv, Some("toA"));
    assert_eq!(opts.matchers().len(), 4);
    assert_eq!(opts.converters().count(), 2);
}

#[test]
fn converter_destination_defaults_to_source() {
    let mut opts = Options::new();
    assert!(opts.add_converter("toStatus", "Status", None, pos()).is_ok());
    assert!(opts.converter_for("Status", true).is_some());
    assert!(opts.converter_for("State", true).is_none());
}

#[test]
fn empty_paths_are_rejected() {
    let mut opts = Options::new();
    assert!(matches!(
        opts.add_mapping("", "Name", pos()),
        Err(ConfigError::EmptyPath { directive: "map", what: "source", .. })
    ));
    assert!(matches!(
        opts.add_converter("toX", "X", Some(" "), pos()),
        Err(ConfigError::EmptyPath { directive: "conv", what: "destination", .. })
    ));
    assert!(matches!(
        opts.add_converter("", "X", None, pos()),
        Err(ConfigError::UnknownFunction { .. })
    ));
    assert!(opts.matchers().is_empty());
}

#[test]
fn literals_are_matchers() {
    let mut opts = Options::new();
    assert!(opts.add_literal("Version", " 2 ", pos()).is_ok());
    let lit = opts.literal_for("Version", true).map(|l| l.value.as_str());
    assert_eq!(lit, Some("2"));
}

#[test]
fn blank_literal_value_is_rejected() {
    let mut opts = Options::new();
    assert!(matches!(
        opts.add_literal("Version", "  ", pos()),
        Err(ConfigError::EmptyPath { directive: "literal", what: "value", .. })
    ));
    assert!(opts.literal_for("Version", true).is_none());
}

#[test]
fn scopes_cover_nested_paths() {
    let mut opts = Options::new();
    let overrides = FlagOverrides::default().set(MatchFlags::TYPECAST, true);
    assert!(opts.add_scope("Category", overrides, pos()).is_ok());

    assert!(opts.flags_for("Category").typecast());
    assert!(opts.flags_for("Category.ID").typecast());
    assert!(!opts.flags_for("CategoryID").typecast());
    assert!(!opts.flags_for("Name").typecast());
}

#[test]
fn first_matching_scope_applies() {
    let mut opts = Options::new();
    let on = FlagOverrides::default().set(MatchFlags::GETTER, true);
    let off = FlagOverrides::default().set(MatchFlags::GETTER, false);
    assert!(opts.add_scope("/^Profile/", on, pos()).is_ok());
    assert!(opts.add_scope("Profile.Name", off, pos()).is_ok());
    assert!(opts.flags_for("Profile.Name").getter());
}

#[test]
fn path_prefixes() {
    let prefixes: Vec<&str> = path_or_prefix("a.b.c").collect();
    assert_eq!(prefixes, ["a.b.c", "a.b", "a"]);
    let single: Vec<&str> = path_or_prefix("a").collect();
    assert_eq!(single, ["a"]);
}
