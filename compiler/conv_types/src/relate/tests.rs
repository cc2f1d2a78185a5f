use crate::{FieldDef, Idx, MethodDef, Pool};

#[test]
fn identical_types_are_assignable() {
    let mut pool = Pool::new();
    let tags = pool.slice_of(Idx::STRING);
    assert!(pool.assignable(Idx::STRING, Idx::STRING));
    assert!(pool.assignable(tags, tags));
}

#[test]
fn named_and_basic_are_not_assignable() {
    let mut pool = Pool::new();
    let status = pool.named_type("pkg", "Status", Idx::STRING);
    assert!(!pool.assignable(status, Idx::STRING));
    assert!(!pool.assignable(Idx::STRING, status));
    assert!(pool.convertible(status, Idx::STRING));
    assert!(pool.convertible(Idx::STRING, status));
}

#[test]
fn unnamed_side_with_identical_underlying_is_assignable() {
    let mut pool = Pool::new();
    let strings = pool.slice_of(Idx::STRING);
    let tags = pool.named_type("pkg", "Tags", strings);
    assert!(pool.assignable(strings, tags));
    assert!(pool.assignable(tags, strings));
}

#[test]
fn structs_from_different_packages_are_only_convertible() {
    let mut pool = Pool::new();
    let fields = vec![FieldDef::new("ID", Idx::INT64)];
    let a = pool.named_struct("example.com/domain", "User", fields.clone());
    let b = pool.named_struct("example.com/storage", "User", fields);
    assert!(!pool.assignable(a, b));
    assert!(pool.convertible(a, b));

    let pa = pool.pointer_to(a);
    let pb = pool.pointer_to(b);
    assert!(!pool.assignable(pa, pb));
    assert!(pool.convertible(pa, pb));
}

#[test]
fn numeric_conversions() {
    let pool = Pool::new();
    assert!(!pool.assignable(Idx::INT, Idx::INT64));
    assert!(pool.convertible(Idx::INT, Idx::INT64));
    assert!(pool.convertible(Idx::FLOAT64, Idx::INT32));
    assert!(!pool.convertible(Idx::BOOL, Idx::INT));
    assert!(!pool.convertible(Idx::INT, Idx::STRING));
}

#[test]
fn string_and_byte_slices() {
    let mut pool = Pool::new();
    let bytes = pool.slice_of(Idx::UINT8);
    let runes = pool.slice_of(Idx::INT32);
    let words = pool.slice_of(Idx::STRING);
    assert!(pool.convertible(Idx::STRING, bytes));
    assert!(pool.convertible(bytes, Idx::STRING));
    assert!(pool.convertible(runes, Idx::STRING));
    assert!(!pool.convertible(words, Idx::STRING));
}

#[test]
fn error_implementations_assign_to_error() {
    let mut pool = Pool::new();
    let not_found = pool.named_struct("pkg", "NotFound", vec![]);
    pool.add_method(not_found, MethodDef::getter("Error", Idx::STRING));
    let plain = pool.named_struct("pkg", "Plain", vec![]);
    assert!(pool.assignable(not_found, Idx::ERROR));
    assert!(!pool.assignable(plain, Idx::ERROR));
}

#[test]
fn unknown_indices_relate_to_nothing() {
    let pool = Pool::new();
    let bogus = Idx::from_raw(9_999);
    assert!(!pool.assignable(bogus, bogus));
    assert!(!pool.convertible(Idx::NONE, Idx::STRING));
}
