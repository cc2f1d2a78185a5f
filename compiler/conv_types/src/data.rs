//! Type data stored in the pool.

use crate::Idx;

/// Structural description of one type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeData {
    /// A predeclared basic type.
    Basic(crate::BasicKind),
    /// The predeclared `error` interface.
    Error,
    /// A declared (nominal) type.
    Named(NamedType),
    /// `*T`
    Pointer(Idx),
    /// `[]T`
    Slice(Idx),
    /// `map[K]V`
    Map { key: Idx, value: Idx },
    /// An anonymous struct literal type.
    Struct(Vec<FieldDef>),
}

/// A declared type: `type Name <underlying>` plus its methods.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NamedType {
    /// Full import path of the declaring package.
    pub package: String,
    pub name: String,
    /// `Idx::NONE` until the declaration is defined.
    pub underlying: Idx,
    /// Methods in declaration order.
    pub methods: Vec<MethodDef>,
}

/// A struct field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldDef {
    pub name: String,
    pub ty: Idx,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, ty: Idx) -> Self {
        FieldDef {
            name: name.into(),
            ty,
        }
    }
}

/// A method declared on a named type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MethodDef {
    pub name: String,
    pub params: Vec<Idx>,
    pub results: Vec<Idx>,
}

impl MethodDef {
    pub fn new(name: impl Into<String>, params: Vec<Idx>, results: Vec<Idx>) -> Self {
        MethodDef {
            name: name.into(),
            params,
            results,
        }
    }

    /// Shorthand for a zero-argument method returning `ty`.
    pub fn getter(name: impl Into<String>, ty: Idx) -> Self {
        Self::new(name, Vec::new(), vec![ty])
    }

    /// Shorthand for a zero-argument method returning `(ty, error)`.
    pub fn fallible_getter(name: impl Into<String>, ty: Idx) -> Self {
        Self::new(name, Vec::new(), vec![ty, Idx::ERROR])
    }

    /// The value type and error flag if this method can act as a getter.
    ///
    /// A getter takes no arguments and returns one value, optionally
    /// followed by an `error`.
    pub fn getter_result(&self) -> Option<(Idx, bool)> {
        if !self.params.is_empty() {
            return None;
        }
        value_and_error(&self.results)
    }
}

/// A package-level function, used for converters and pre/post-process hooks.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FuncDef {
    /// Full import path of the declaring package.
    pub package: String,
    pub name: String,
    pub params: Vec<Idx>,
    pub results: Vec<Idx>,
}

impl FuncDef {
    /// The value type and error flag of the results, if they have the
    /// `T` or `(T, error)` shape.
    pub fn value_result(&self) -> Option<(Idx, bool)> {
        value_and_error(&self.results)
    }

    /// Whether the results are exactly `()` or `(error)`.
    pub fn error_only_result(&self) -> Option<bool> {
        match self.results.as_slice() {
            [] => Some(false),
            [only] if *only == Idx::ERROR => Some(true),
            _ => None,
        }
    }
}

fn value_and_error(results: &[Idx]) -> Option<(Idx, bool)> {
    match results {
        [value] if *value != Idx::ERROR => Some((*value, false)),
        [value, err] if *value != Idx::ERROR && *err == Idx::ERROR => Some((*value, true)),
        _ => None,
    }
}

/// Whether an identifier is exported (starts with an upper-case letter).
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// The package name used to qualify identifiers: the last path segment.
pub fn package_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
