//! The query surface the matching engine uses to inspect types.
//!
//! [`TypeOracle`] is read-only. Implementations must be safe to share
//! between threads because the driver builds several methods in parallel
//! against one oracle; [`Pool`] qualifies without any locking since it is
//! never mutated after loading.

use std::collections::BTreeSet;

use crate::{package_name, FieldDef, FuncDef, Idx, MethodDef, Pool, TypeData};

/// Structural queries about types.
pub trait TypeOracle: Sync {
    /// Fields of a struct-shaped type, in declaration order.
    ///
    /// Does not dereference pointers. Returns an empty slice for
    /// non-struct types.
    fn fields(&self, ty: Idx) -> &[FieldDef];

    /// Methods callable on a value of `ty`, in declaration order.
    ///
    /// A pointer to a named type has the named type's methods.
    fn methods(&self, ty: Idx) -> &[MethodDef];

    fn is_assignable(&self, from: Idx, to: Idx) -> bool;

    fn is_convertible(&self, from: Idx, to: Idx) -> bool;

    /// Whether the underlying type is a struct (no pointer dereference).
    fn is_struct(&self, ty: Idx) -> bool;

    fn is_pointer(&self, ty: Idx) -> bool;

    /// Element type if `ty` is a slice.
    fn slice_elem(&self, ty: Idx) -> Option<Idx>;

    /// Whether `ty` has a `String() string` method.
    fn implements_stringer(&self, ty: Idx) -> bool;

    /// Strip one level of pointer; non-pointers are returned unchanged.
    fn deref(&self, ty: Idx) -> Idx;

    /// Whether the underlying type is a predeclared basic type.
    fn is_basic(&self, ty: Idx) -> bool;

    /// Declaring package of a named type.
    fn package_of(&self, ty: Idx) -> Option<&str>;

    /// Source-text spelling of `ty` inside `from_package`, if one exists.
    fn type_expr(&self, ty: Idx, from_package: &str) -> Option<String>;

    /// Human-readable name for logs.
    fn display(&self, ty: Idx) -> String;

    /// Resolve a function reference as written in a directive.
    ///
    /// `pkg.Func` resolves against the package whose name is `pkg`; a bare
    /// `Func` resolves in `from_package`.
    fn function(&self, name: &str, from_package: &str) -> Option<&FuncDef>;

    /// Import paths referenced by the spelling of `ty`.
    fn collect_packages(&self, ty: Idx, out: &mut BTreeSet<String>);

    /// Whether `ty` is a valid handle for this oracle.
    fn contains(&self, ty: Idx) -> bool;
}

impl Pool {
    /// Methods of `idx`, looking through one pointer level.
    pub fn method_set(&self, idx: Idx) -> &[MethodDef] {
        let target = match self.get(idx) {
            Some(TypeData::Pointer(elem)) => *elem,
            _ => idx,
        };
        match self.named_decl(target) {
            Some(decl) => &decl.methods,
            None => &[],
        }
    }
}

impl TypeOracle for Pool {
    fn fields(&self, ty: Idx) -> &[FieldDef] {
        match self.get(self.underlying(ty)) {
            Some(TypeData::Struct(fields)) => fields,
            _ => &[],
        }
    }

    fn methods(&self, ty: Idx) -> &[MethodDef] {
        self.method_set(ty)
    }

    fn is_assignable(&self, from: Idx, to: Idx) -> bool {
        self.assignable(from, to)
    }

    fn is_convertible(&self, from: Idx, to: Idx) -> bool {
        self.convertible(from, to)
    }

    fn is_struct(&self, ty: Idx) -> bool {
        matches!(self.get(self.underlying(ty)), Some(TypeData::Struct(_)))
    }

    fn is_pointer(&self, ty: Idx) -> bool {
        matches!(self.get(self.underlying(ty)), Some(TypeData::Pointer(_)))
    }

    fn slice_elem(&self, ty: Idx) -> Option<Idx> {
        match self.get(self.underlying(ty)) {
            Some(TypeData::Slice(elem)) => Some(*elem),
            _ => None,
        }
    }

    fn implements_stringer(&self, ty: Idx) -> bool {
        self.method_set(ty)
            .iter()
            .any(|m| m.name == "String" && m.params.is_empty() && m.results == [Idx::STRING])
    }

    fn deref(&self, ty: Idx) -> Idx {
        match self.get(self.underlying(ty)) {
            Some(TypeData::Pointer(elem)) => *elem,
            _ => ty,
        }
    }

    fn is_basic(&self, ty: Idx) -> bool {
        self.basic_kind(ty).is_some()
    }

    fn package_of(&self, ty: Idx) -> Option<&str> {
        self.named_decl(ty).map(|decl| decl.package.as_str())
    }

    fn type_expr(&self, ty: Idx, from_package: &str) -> Option<String> {
        Pool::type_expr(self, ty, from_package)
    }

    fn display(&self, ty: Idx) -> String {
        Pool::display(self, ty)
    }

    fn function(&self, name: &str, from_package: &str) -> Option<&FuncDef> {
        match name.split_once('.') {
            Some((pkg, func)) => self
                .functions()
                .iter()
                .find(|f| f.name == func && package_name(&f.package) == pkg),
            None => self.function_in(from_package, name),
        }
    }

    fn collect_packages(&self, ty: Idx, out: &mut BTreeSet<String>) {
        Pool::collect_packages(self, ty, out);
    }

    fn contains(&self, ty: Idx) -> bool {
        Pool::contains(self, ty)
    }
}
