use pretty_assertions::assert_eq;

use super::*;

fn simple(lhs: &str, returns_error: bool) -> Assignment {
    Assignment::Simple {
        lhs: lhs.to_string(),
        rhs: "src.X".to_string(),
        returns_error,
    }
}

#[test]
fn skip_and_no_match_are_not_effective() {
    assert!(!Assignment::Skip { lhs: "dst.A".into() }.is_effective());
    assert!(!Assignment::NoMatch { lhs: "dst.A".into() }.is_effective());
    assert!(simple("dst.A", false).is_effective());
}

#[test]
fn error_flag_propagates_from_children() {
    let nested = Assignment::Nested(NestedAssignment {
        lhs: "dst.Profile".into(),
        init: None,
        guard: None,
        children: vec![simple("dst.Profile.A", false), simple("dst.Profile.B", true)],
    });
    assert!(nested.returns_error());

    let clean = Assignment::Nested(NestedAssignment {
        lhs: "dst.Profile".into(),
        init: None,
        guard: None,
        children: vec![simple("dst.Profile.A", false)],
    });
    assert!(!clean.returns_error());
}

#[test]
fn unmatched_walks_nested_children() {
    let nested = Assignment::Nested(NestedAssignment {
        lhs: "dst.Profile".into(),
        init: None,
        guard: Some("src.Profile".into()),
        children: vec![
            simple("dst.Profile.A", false),
            Assignment::NoMatch {
                lhs: "dst.Profile.B".into(),
            },
        ],
    });
    assert_eq!(nested.unmatched(), vec!["dst.Profile.B"]);
    assert_eq!(nested.lhs(), "dst.Profile");
}

#[test]
fn slice_lhs() {
    let slice = Assignment::SliceCopy(SliceAssignment {
        lhs: "dst.Tags".into(),
        rhs: "src.Tags".into(),
        slice_type: "[]string".into(),
        elem_cast: None,
    });
    assert_eq!(slice.lhs(), "dst.Tags");
    assert!(!slice.returns_error());
}
