//! Textual forms of types.
//!
//! Two renderings exist: `type_expr` produces source text valid inside a
//! given package (or `None` when no spelling exists, e.g. anonymous
//! structs), and `display` produces a human-readable name for logs.

use std::collections::BTreeSet;

use crate::{package_name, Idx, Pool, TypeData};

impl Pool {
    /// Source-text spelling of `idx` as seen from `from_package`.
    ///
    /// Types declared in `from_package` are left unqualified; others are
    /// qualified with their package name. Anonymous struct types have no
    /// spelling usable in a conversion and yield `None`.
    pub fn type_expr(&self, idx: Idx, from_package: &str) -> Option<String> {
        match self.get(idx)? {
            TypeData::Basic(_) | TypeData::Error => idx.name().map(str::to_string),
            TypeData::Named(decl) => {
                if decl.package == from_package {
                    Some(decl.name.clone())
                } else {
                    Some(format!("{}.{}", package_name(&decl.package), decl.name))
                }
            }
            TypeData::Pointer(elem) => Some(format!("*{}", self.type_expr(*elem, from_package)?)),
            TypeData::Slice(elem) => Some(format!("[]{}", self.type_expr(*elem, from_package)?)),
            TypeData::Map { key, value } => Some(format!(
                "map[{}]{}",
                self.type_expr(*key, from_package)?,
                self.type_expr(*value, from_package)?
            )),
            TypeData::Struct(_) => None,
        }
    }

    /// Human-readable name for diagnostics.
    pub fn display(&self, idx: Idx) -> String {
        let Some(data) = self.get(idx) else {
            return "<none>".to_string();
        };
        match data {
            TypeData::Basic(_) | TypeData::Error => idx.name().unwrap_or("<basic>").to_string(),
            TypeData::Named(decl) => format!("{}.{}", package_name(&decl.package), decl.name),
            TypeData::Pointer(elem) => format!("*{}", self.display(*elem)),
            TypeData::Slice(elem) => format!("[]{}", self.display(*elem)),
            TypeData::Map { key, value } => {
                format!("map[{}]{}", self.display(*key), self.display(*value))
            }
            TypeData::Struct(fields) => {
                let body: Vec<String> = fields
                    .iter()
                    .map(|f| format!("{} {}", f.name, self.display(f.ty)))
                    .collect();
                format!("struct{{{}}}", body.join("; "))
            }
        }
    }

    /// Collect the import paths a spelling of `idx` refers to.
    ///
    /// Named types contribute their own package only; their underlying type
    /// is never spelled out, so recursion stops there.
    pub fn collect_packages(&self, idx: Idx, out: &mut BTreeSet<String>) {
        match self.get(idx) {
            Some(TypeData::Named(decl)) => {
                out.insert(decl.package.clone());
            }
            Some(TypeData::Pointer(elem) | TypeData::Slice(elem)) => {
                self.collect_packages(*elem, out);
            }
            Some(TypeData::Map { key, value }) => {
                self.collect_packages(*key, out);
                self.collect_packages(*value, out);
            }
            Some(TypeData::Struct(fields)) => {
                for field in fields {
                    self.collect_packages(field.ty, out);
                }
            }
            Some(TypeData::Basic(_) | TypeData::Error) | None => {}
        }
    }
}

#[cfg(test)]
mod tests;
