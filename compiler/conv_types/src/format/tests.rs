use std::collections::BTreeSet;

use pretty_assertions::assert_eq;

use crate::{FieldDef, Idx, Pool};

#[test]
fn type_expr_qualifies_foreign_types() {
    let mut pool = Pool::new();
    let user = pool.named_struct("example.com/app/domain", "User", vec![]);
    let ptr = pool.pointer_to(user);
    let list = pool.slice_of(ptr);

    assert_eq!(
        pool.type_expr(user, "example.com/app/domain").as_deref(),
        Some("User")
    );
    assert_eq!(
        pool.type_expr(ptr, "example.com/app/conv").as_deref(),
        Some("*domain.User")
    );
    assert_eq!(
        pool.type_expr(list, "example.com/app/conv").as_deref(),
        Some("[]*domain.User")
    );
}

#[test]
fn type_expr_for_maps_and_basics() {
    let mut pool = Pool::new();
    let counts = pool.map_of(Idx::STRING, Idx::INT);
    assert_eq!(pool.type_expr(counts, "p").as_deref(), Some("map[string]int"));
    assert_eq!(pool.type_expr(Idx::ERROR, "p").as_deref(), Some("error"));
}

#[test]
fn anonymous_structs_have_no_expression() {
    let mut pool = Pool::new();
    let anon = pool.struct_of(vec![FieldDef::new("X", Idx::INT)]);
    let list = pool.slice_of(anon);
    assert_eq!(pool.type_expr(anon, "p"), None);
    assert_eq!(pool.type_expr(list, "p"), None);
    assert_eq!(pool.display(anon), "struct{X int}");
}

#[test]
fn collect_packages_stops_at_named_types() {
    let mut pool = Pool::new();
    let inner = pool.named_struct("example.com/inner", "Inner", vec![]);
    let outer = pool.named_struct(
        "example.com/outer",
        "Outer",
        vec![FieldDef::new("In", inner)],
    );
    let key = pool.named_type("example.com/keys", "Key", Idx::STRING);
    let table = pool.map_of(key, outer);

    let mut out = BTreeSet::new();
    pool.collect_packages(table, &mut out);
    let found: Vec<&str> = out.iter().map(String::as_str).collect();
    assert_eq!(found, ["example.com/keys", "example.com/outer"]);
}
