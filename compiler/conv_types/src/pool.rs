//! Type pool: storage and construction of types.
//!
//! Types are appended to a flat vector and addressed by [`Idx`]. Unnamed
//! composites (pointers, slices, maps, anonymous structs) are interned so
//! that structural identity is index equality. Named types are declared in
//! two steps (`declare_named` then `define_named`) which lets a struct refer
//! to itself through a pointer or slice.

use rustc_hash::FxHashMap;

use crate::{BasicKind, FieldDef, FuncDef, Idx, MethodDef, NamedType, TypeData};

/// Upper bound on `type A B` chains followed while resolving an underlying
/// type. Deeper chains are treated as unresolved.
const MAX_NAMED_HOPS: usize = 32;

/// Owning storage for all types of one generation run.
#[derive(Clone, Debug)]
pub struct Pool {
    types: Vec<TypeData>,
    interned: FxHashMap<TypeData, Idx>,
    named: FxHashMap<(String, String), Idx>,
    functions: Vec<FuncDef>,
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

impl Pool {
    /// Create a pool with the basic types and `error` pre-interned.
    pub fn new() -> Self {
        let mut pool = Pool {
            types: Vec::with_capacity(64),
            interned: FxHashMap::default(),
            named: FxHashMap::default(),
            functions: Vec::new(),
        };
        for kind in BasicKind::ALL {
            let idx = pool.push(TypeData::Basic(kind));
            debug_assert_eq!(idx, kind.idx());
        }
        let error = pool.push(TypeData::Error);
        debug_assert_eq!(error, Idx::ERROR);
        pool
    }

    fn push(&mut self, data: TypeData) -> Idx {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "a pool never holds more than u32::MAX types"
        )]
        let idx = Idx::from_raw(self.types.len() as u32);
        self.types.push(data);
        idx
    }

    fn intern(&mut self, data: TypeData) -> Idx {
        if let Some(&idx) = self.interned.get(&data) {
            return idx;
        }
        let idx = self.push(data.clone());
        self.interned.insert(data, idx);
        idx
    }

    // ── Construction ────────────────────────────────────────────────

    /// `*elem`
    pub fn pointer_to(&mut self, elem: Idx) -> Idx {
        self.intern(TypeData::Pointer(elem))
    }

    /// `[]elem`
    pub fn slice_of(&mut self, elem: Idx) -> Idx {
        self.intern(TypeData::Slice(elem))
    }

    /// `map[key]value`
    pub fn map_of(&mut self, key: Idx, value: Idx) -> Idx {
        self.intern(TypeData::Map { key, value })
    }

    /// An anonymous struct with the given fields.
    pub fn struct_of(&mut self, fields: Vec<FieldDef>) -> Idx {
        self.intern(TypeData::Struct(fields))
    }

    /// Declare a named type without defining it yet.
    ///
    /// Declaring the same `(package, name)` twice returns the first index.
    pub fn declare_named(&mut self, package: &str, name: &str) -> Idx {
        let key = (package.to_string(), name.to_string());
        if let Some(&idx) = self.named.get(&key) {
            return idx;
        }
        let idx = self.push(TypeData::Named(NamedType {
            package: key.0.clone(),
            name: key.1.clone(),
            underlying: Idx::NONE,
            methods: Vec::new(),
        }));
        self.named.insert(key, idx);
        idx
    }

    /// Set the underlying type of a declared named type.
    pub fn define_named(&mut self, named: Idx, underlying: Idx) {
        if let Some(TypeData::Named(decl)) = self.types.get_mut(named.index()) {
            decl.underlying = underlying;
        }
    }

    /// Declare and define a named type in one step.
    pub fn named_type(&mut self, package: &str, name: &str, underlying: Idx) -> Idx {
        let idx = self.declare_named(package, name);
        self.define_named(idx, underlying);
        idx
    }

    /// Declare a named struct type in one step.
    pub fn named_struct(&mut self, package: &str, name: &str, fields: Vec<FieldDef>) -> Idx {
        let underlying = self.struct_of(fields);
        self.named_type(package, name, underlying)
    }

    /// Append a method to a named type's method set.
    pub fn add_method(&mut self, named: Idx, method: MethodDef) {
        if let Some(TypeData::Named(decl)) = self.types.get_mut(named.index()) {
            decl.methods.push(method);
        }
    }

    /// Register a package-level function.
    pub fn add_function(&mut self, func: FuncDef) {
        self.functions.push(func);
    }

    // ── Lookup ──────────────────────────────────────────────────────

    /// Look up a named type by package path and name.
    pub fn named(&self, package: &str, name: &str) -> Option<Idx> {
        self.named
            .get(&(package.to_string(), name.to_string()))
            .copied()
    }

    /// Structural data of a type, or `None` for out-of-range indices.
    pub fn get(&self, idx: Idx) -> Option<&TypeData> {
        self.types.get(idx.index())
    }

    /// Whether `idx` refers to a type stored in this pool.
    pub fn contains(&self, idx: Idx) -> bool {
        idx.index() < self.types.len()
    }

    /// Number of stored types, including the pre-interned ones.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Follow named declarations down to a structural type.
    ///
    /// Returns `Idx::NONE` for undefined or cyclic declarations.
    pub fn underlying(&self, idx: Idx) -> Idx {
        let mut current = idx;
        for _ in 0..MAX_NAMED_HOPS {
            match self.get(current) {
                Some(TypeData::Named(decl)) => current = decl.underlying,
                Some(_) => return current,
                None => return Idx::NONE,
            }
        }
        Idx::NONE
    }

    /// The named declaration behind `idx`, if it is a named type.
    pub fn named_decl(&self, idx: Idx) -> Option<&NamedType> {
        match self.get(idx) {
            Some(TypeData::Named(decl)) => Some(decl),
            _ => None,
        }
    }

    /// Whether `idx` is a named type (declared or predeclared).
    pub fn is_named(&self, idx: Idx) -> bool {
        matches!(
            self.get(idx),
            Some(TypeData::Named(_) | TypeData::Basic(_) | TypeData::Error)
        )
    }

    /// The basic kind of the underlying type, if any.
    pub fn basic_kind(&self, idx: Idx) -> Option<BasicKind> {
        match self.get(self.underlying(idx)) {
            Some(TypeData::Basic(kind)) => Some(*kind),
            _ => None,
        }
    }

    /// Find a function by package path and name.
    pub fn function_in(&self, package: &str, name: &str) -> Option<&FuncDef> {
        self.functions
            .iter()
            .find(|func| func.package == package && func.name == name)
    }

    /// All registered functions, in registration order.
    pub fn functions(&self) -> &[FuncDef] {
        &self.functions
    }
}
