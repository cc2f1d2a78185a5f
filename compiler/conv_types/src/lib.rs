//! Type model for convgen.
//!
//! The generator reasons about a Go-like type system: predeclared basic
//! types, named types with methods, pointers, slices, maps and structs.
//! This crate provides:
//!
//! - [`Idx`]: a 32-bit handle for every type
//! - [`Pool`]: the owning store, with structural interning of unnamed
//!   composites and two-step declaration of named types
//! - [`TypeOracle`]: the read-only query surface consumed by the matching
//!   engine (fields, methods, assignability, convertibility, spelling)
//!
//! The host front end that loads real declarations is not part of this
//! crate; anything able to fill a [`Pool`] (or implement [`TypeOracle`]
//! directly) can drive the engine.

mod data;
mod format;
mod idx;
mod oracle;
mod pool;
mod relate;

pub use data::{
    is_exported, package_name, FieldDef, FuncDef, MethodDef, NamedType, TypeData,
};
pub use idx::{BasicKind, Idx};
pub use oracle::TypeOracle;
pub use pool::Pool;

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Idx;
    const _: () = assert!(std::mem::size_of::<Idx>() == 4);
}
